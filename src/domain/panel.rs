// Panel outcome - what one query produced for one render pass
use serde::Serialize;

/// Outcome of a single panel query.
///
/// `Empty` and `Failed` both render the panel's no-data state, but a failure
/// also carries the diagnostic shown to the user, so "nothing in the window"
/// and "the store could not be queried" stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    Empty,
    Failed { message: String },
}

impl<T> Panel<T> {
    pub fn failed(message: impl Into<String>) -> Self {
        Panel::Failed {
            message: message.into(),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Panel::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Panel::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl<T> Panel<Vec<T>> {
    /// Wrap a row set, treating zero rows as `Empty`.
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Panel::Empty
        } else {
            Panel::Ready(rows)
        }
    }
}
