use super::error_code::SeriateErrorCode;
use super::{GraphError, TraversalError};

/// Errors surfaced by the public ordering entry point.
/// Aggregates subsystem errors via `From` conversions. Either failure
/// aborts the whole call; no partial ordering is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum OrderingError {
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),

    #[error("topological traversal failed: {0}")]
    Traversal(#[from] TraversalError),
}

impl SeriateErrorCode for OrderingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Traversal(e) => e.error_code(),
        }
    }
}
