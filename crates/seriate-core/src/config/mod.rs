//! Configuration for the ordering engine.
//! TOML-based: project file (`seriate.toml`), then `SERIATE_*`
//! environment overrides, then compiled defaults.

pub mod graph_config;
pub mod seriate_config;

pub use graph_config::GraphConfig;
pub use seriate_config::SeriateConfig;
