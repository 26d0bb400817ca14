//! Fetch lifecycle of a list view.
//!
//! ```text
//! Loading --Succeeded--> Loaded(items)
//! Loading --Failed-----> Errored(message)
//! ```
//!
//! `Loaded` and `Errored` are terminal for the view instance. A new lifecycle
//! starts only when the view is mounted again.

use crate::shared::api_error::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(Vec<T>),
    Errored(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

/// Completion of the single in-flight request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    Succeeded(Vec<T>),
    Failed(FetchError),
}

impl<T> From<Result<Vec<T>, FetchError>> for FetchEvent<T> {
    fn from(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) => FetchEvent::Succeeded(items),
            Err(e) => FetchEvent::Failed(e),
        }
    }
}

/// What a view shows for its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Error,
    Placeholder,
    Empty,
    Rows(usize),
}

impl<T> ViewState<T> {
    /// Reducer. Settled states ignore any further event.
    pub fn apply(self, event: FetchEvent<T>) -> Self {
        match (self, event) {
            (ViewState::Loading, FetchEvent::Succeeded(items)) => ViewState::Loaded(items),
            (ViewState::Loading, FetchEvent::Failed(e)) => ViewState::Errored(e.to_string()),
            (settled, _) => settled,
        }
    }

    pub fn panel(&self) -> Panel {
        match self {
            ViewState::Errored(_) => Panel::Error,
            ViewState::Loading => Panel::Placeholder,
            ViewState::Loaded(items) if items.is_empty() => Panel::Empty,
            ViewState::Loaded(items) => Panel::Rows(items.len()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ViewState::Loaded(items) => items,
            _ => &[],
        }
    }
}
