use super::error_code::{self, SeriateErrorCode};

/// Errors raised during topological traversal.
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// The dependency graph contains a cycle. `path` holds one full
    /// cyclic path in traversal order, with the closing vertex repeated
    /// at the end, so callers can log it or decide which edge to break.
    #[error("dependency cycle detected: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

impl SeriateErrorCode for TraversalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CycleDetected { .. } => error_code::TRAVERSAL_CYCLE,
        }
    }
}
