//! Arena-backed dependency graph.
//!
//! Vertex names are interned into dense keys in insertion order, so the
//! interner doubles as the known universe of resolvable names: a name
//! that was never added as a vertex cannot become an edge target.
//! Adjacency lists preserve first-insertion order, which together with
//! input-order vertex iteration makes every downstream traversal
//! reproducible.

use lasso::{Key, Rodeo, Spur};
use smallvec::SmallVec;

/// Dense key for an interned declaration name.
pub type NameKey = Spur;

/// Counters describing a constructed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    /// Edge targets outside the known universe, skipped during
    /// construction (framework types, external libraries).
    pub skipped_references: usize,
}

/// Directed dependency graph over declaration names.
///
/// An edge `A -> B` reads "A depends on B": B must be ordered at or
/// before A. Self-edges are never stored and duplicate edge insertion
/// is a no-op.
#[derive(Debug)]
pub struct DependencyGraph {
    names: Rodeo,
    /// Vertex keys in insertion order. Key indices are dense, so this
    /// is the inverse of `NameKey::into_usize`.
    vertices: Vec<NameKey>,
    /// Outgoing edges per vertex, indexed by `NameKey::into_usize`.
    adjacency: Vec<SmallVec<[NameKey; 4]>>,
    edge_count: usize,
    pub(crate) skipped_references: usize,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            names: Rodeo::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
            skipped_references: 0,
        }
    }

    /// Add a vertex for `name`, returning its key. A name that is
    /// already a vertex keeps its existing key.
    pub fn add_vertex(&mut self, name: &str) -> NameKey {
        if let Some(key) = self.names.get(name) {
            return key;
        }
        let key = self.names.get_or_intern(name);
        self.vertices.push(key);
        self.adjacency.push(SmallVec::new());
        key
    }

    /// Add a directed edge `from -> to`. Self-edges are rejected and a
    /// pair that is already present is not inserted twice. Returns
    /// whether the edge was inserted.
    pub fn add_edge(&mut self, from: NameKey, to: NameKey) -> bool {
        if from == to {
            return false;
        }
        let list = &mut self.adjacency[from.into_usize()];
        if list.contains(&to) {
            return false;
        }
        list.push(to);
        self.edge_count += 1;
        true
    }

    /// Whether `name` is a vertex.
    pub fn contains(&self, name: &str) -> bool {
        self.names.get(name).is_some()
    }

    /// Key for `name`, if it is a vertex.
    pub fn key_of(&self, name: &str) -> Option<NameKey> {
        self.names.get(name)
    }

    /// Resolve a key back to its name.
    pub fn resolve(&self, key: NameKey) -> &str {
        self.names.resolve(&key)
    }

    /// Outgoing edge targets of a vertex, in first-insertion order.
    pub fn edges_of(&self, key: NameKey) -> &[NameKey] {
        self.adjacency[key.into_usize()].as_slice()
    }

    /// Vertex keys in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = NameKey> + '_ {
        self.vertices.iter().copied()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Counters for logging and diagnostics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            edges: self.edge_count,
            skipped_references: self.skipped_references,
        }
    }
}
