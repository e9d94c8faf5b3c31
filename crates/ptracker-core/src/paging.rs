//! Client-side pagination for the promise table
//!
//! Pages are 1-based, matching what is shown to the user.

/// Visible slice of a list plus the page count it was cut from
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
}

/// Entry in the page-button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Cut page `page` (1-based) out of `items`.
///
/// The page is clamped into `[1, total_pages]`. A zero page size yields no
/// pages at all.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let total = total_pages(items.len(), page_size);
    if total == 0 {
        return PageSlice {
            visible: &[],
            total_pages: 0,
        };
    }

    let page = page.clamp(1, total);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    PageSlice {
        visible: &items[start..end],
        total_pages: total,
    }
}

/// Page-button row: the first three pages, an ellipsis once there are more
/// than four pages, and the last page once there are more than three.
pub fn page_buttons(total_pages: usize) -> Vec<PageButton> {
    let mut buttons: Vec<PageButton> = (1..=total_pages.min(3)).map(PageButton::Page).collect();
    if total_pages > 4 {
        buttons.push(PageButton::Ellipsis);
    }
    if total_pages > 3 {
        buttons.push(PageButton::Page(total_pages));
    }
    buttons
}

/// Current-page cursor over a list whose length may change between calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Jump to `page`. Requests outside `[1, total_pages]` leave the
    /// current page untouched and return `false`.
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        if page >= 1 && page <= self.total_pages(len) {
            self.current = page;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.go_to(self.current + 1, len)
    }

    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self, len: usize) -> bool {
        self.go_to(1, len)
    }

    pub fn last(&mut self, len: usize) -> bool {
        self.go_to(self.total_pages(len), len)
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current < self.total_pages(len)
    }

    /// Back to page 1 (list replaced)
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Keep the cursor valid after the list shrank
    pub fn clamp(&mut self, len: usize) {
        let total = self.total_pages(len).max(1);
        self.current = self.current.clamp(1, total);
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current, self.page_size).visible
    }

    /// Index into the full list of the first row on the current page
    pub fn offset(&self) -> usize {
        (self.current - 1) * self.page_size
    }

    pub fn buttons(&self, len: usize) -> Vec<PageButton> {
        page_buttons(self.total_pages(len))
    }

    /// Pagination controls are only shown when the list spills past one page
    pub fn is_needed(&self, len: usize) -> bool {
        len > self.page_size
    }

    /// 1-based inclusive range of rows on the current page, `None` when empty
    pub fn showing_range(&self, len: usize) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }
        let start = self.offset().min(len - 1) + 1;
        let end = (self.offset() + self.page_size).min(len);
        Some((start, end))
    }
}
