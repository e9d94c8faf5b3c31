//! Cyclic cursor over a list of citations

/// Index after `index` in a list of `len` items, wrapping to 0.
/// `None` for an empty list.
pub fn next_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (index + 1) % len)
}

/// Index before `index` in a list of `len` items, wrapping to the end.
/// `None` for an empty list.
pub fn prev_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| if index == 0 { len - 1 } else { index - 1 })
}

/// Carousel position. The index stays in `[0, len)` whenever the list it
/// walks over is non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CitationCarousel {
    index: usize,
}

impl CitationCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self, len: usize) {
        if let Some(i) = next_index(self.index.min(len.saturating_sub(1)), len) {
            self.index = i;
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Some(i) = prev_index(self.index.min(len.saturating_sub(1)), len) {
            self.index = i;
        }
    }

    /// Pull the index back into range after the list changed
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// Human-facing "n/len" label, 1-based
    pub fn position_label(&self, len: usize) -> Option<String> {
        (len > 0).then(|| format!("{}/{}", self.index.min(len - 1) + 1, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(next_index(0, 3), Some(1));
        assert_eq!(next_index(2, 3), Some(0));
        assert_eq!(next_index(0, 1), Some(0));
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(prev_index(1, 3), Some(0));
        assert_eq!(prev_index(0, 3), Some(2));
    }

    #[test]
    fn test_empty_list_has_no_neighbours() {
        assert_eq!(next_index(0, 0), None);
        assert_eq!(prev_index(0, 0), None);
    }

    #[test]
    fn test_carousel_empty_is_noop() {
        let mut c = CitationCarousel::new();
        c.next(0);
        c.prev(0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.position_label(0), None);
        assert_eq!(c.current::<u8>(&[]), None);
    }

    #[test]
    fn test_carousel_position_label_is_one_based() {
        let mut c = CitationCarousel::new();
        assert_eq!(c.position_label(4).as_deref(), Some("1/4"));
        c.prev(4);
        assert_eq!(c.position_label(4).as_deref(), Some("4/4"));
    }

    #[test]
    fn test_carousel_clamp_after_shrink() {
        let mut c = CitationCarousel::new();
        c.prev(5);
        assert_eq!(c.index(), 4);
        c.clamp(2);
        assert_eq!(c.index(), 1);
        assert_eq!(c.current(&["a", "b"]), Some(&"b"));
    }
}
