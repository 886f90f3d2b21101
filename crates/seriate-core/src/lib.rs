//! # seriate-core
//!
//! Foundation crate for the seriate ordering engine.
//! Defines the declaration model, error taxonomy, and configuration.
//! The graph engine crate builds on top of this.

pub mod config;
pub mod errors;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{GraphConfig, SeriateConfig};
pub use errors::{ConfigError, GraphError, OrderingError, SeriateErrorCode, TraversalError};
pub use types::Declaration;
