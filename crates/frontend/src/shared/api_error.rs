use thiserror::Error;

/// Failure of a collection fetch.
///
/// All variants collapse into the same errored view state; only the
/// message text differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure (connection refused, aborted request)
    #[error("{0}")]
    Network(String),

    #[error("Server responded with HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}
