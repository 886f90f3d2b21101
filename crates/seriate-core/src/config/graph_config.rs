//! Graph construction configuration.

use serde::{Deserialize, Serialize};

/// Controls which edge sources participate in graph construction.
///
/// All sources are on by default. Turning one off is the supported way
/// for a caller to retry after a reported cycle without the engine
/// guessing which edge to drop (e.g. keep base-type edges, drop
/// reference edges).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphConfig {
    /// Add edges for direct base types. Default: true.
    pub base_type_edges: Option<bool>,
    /// Add edges for referenced names (including auxiliary names
    /// supplied at the entry point). Default: true.
    pub reference_edges: Option<bool>,
    /// Add edges for member-body references. Default: true.
    pub body_reference_edges: Option<bool>,
}

impl GraphConfig {
    /// Returns whether base-type edges are enabled, defaulting to true.
    pub fn effective_base_type_edges(&self) -> bool {
        self.base_type_edges.unwrap_or(true)
    }

    /// Returns whether reference edges are enabled, defaulting to true.
    pub fn effective_reference_edges(&self) -> bool {
        self.reference_edges.unwrap_or(true)
    }

    /// Returns whether body-reference edges are enabled, defaulting to true.
    pub fn effective_body_reference_edges(&self) -> bool {
        self.body_reference_edges.unwrap_or(true)
    }
}
