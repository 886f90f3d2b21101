//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::GraphConfig;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SERIATE_*`)
/// 2. Project config (`seriate.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeriateConfig {
    pub graph: GraphConfig,
}

impl SeriateConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("seriate.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SeriateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SeriateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut SeriateConfig, other: &SeriateConfig) {
        if other.graph.base_type_edges.is_some() {
            base.graph.base_type_edges = other.graph.base_type_edges;
        }
        if other.graph.reference_edges.is_some() {
            base.graph.reference_edges = other.graph.reference_edges;
        }
        if other.graph.body_reference_edges.is_some() {
            base.graph.body_reference_edges = other.graph.body_reference_edges;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SERIATE_GRAPH_BASE_TYPE_EDGES`, etc. Unparseable values
    /// are ignored.
    fn apply_env_overrides(config: &mut SeriateConfig) {
        if let Ok(val) = std::env::var("SERIATE_GRAPH_BASE_TYPE_EDGES") {
            if let Ok(v) = val.parse::<bool>() {
                config.graph.base_type_edges = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SERIATE_GRAPH_REFERENCE_EDGES") {
            if let Ok(v) = val.parse::<bool>() {
                config.graph.reference_edges = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SERIATE_GRAPH_BODY_REFERENCE_EDGES") {
            if let Ok(v) = val.parse::<bool>() {
                config.graph.body_reference_edges = Some(v);
            }
        }
    }
}
