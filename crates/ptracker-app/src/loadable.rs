//! Fetch state of a remotely owned value

/// Lifecycle of data fetched from the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Request failed; the message is shown in place of the data
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Loadable::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Loadable::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// Loaded items, or an empty slice in every other state
    pub fn items(&self) -> &[T] {
        self.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    /// Append to a loaded list; any other state becomes a one-item list
    pub fn push(&mut self, item: T) {
        match self {
            Loadable::Loaded(items) => items.push(item),
            other => *other = Loadable::Loaded(vec![item]),
        }
    }
}
