use super::error_code::{self, SeriateErrorCode};

/// Errors raised while constructing the dependency graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Two input declarations share a name. The name -> declaration
    /// lookup cannot be built unambiguously, so no graph work proceeds.
    #[error("duplicate declaration name: {name}")]
    DuplicateDeclaration { name: String },
}

impl SeriateErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateDeclaration { .. } => error_code::GRAPH_DUPLICATE_NAME,
        }
    }
}
