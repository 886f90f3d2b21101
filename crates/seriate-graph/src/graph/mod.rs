//! Dependency graph subsystem: arena-backed adjacency storage, graph
//! construction from declaration facts, topological traversal, DOT export.

pub mod builder;
pub mod dot;
pub mod traversal;
pub mod types;

pub use builder::build_graph;
pub use traversal::topological_sort;
pub use types::{DependencyGraph, GraphStats, NameKey};
