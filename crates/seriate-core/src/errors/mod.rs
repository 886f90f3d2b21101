//! Error taxonomy for seriate.
//! One enum per subsystem, `thiserror` throughout, no `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod ordering_error;
pub mod traversal_error;

pub use config_error::ConfigError;
pub use error_code::SeriateErrorCode;
pub use graph_error::GraphError;
pub use ordering_error::OrderingError;
pub use traversal_error::TraversalError;
