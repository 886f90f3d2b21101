//! # seriate-graph
//!
//! Dependency-ordering engine for class-like declarations.
//!
//! Given a batch of declarations with pre-extracted facts (base types,
//! referenced names), builds a directed dependency graph and produces a
//! deterministic topological order in which every declaration comes
//! after the declarations it depends on. Downstream migration and
//! code-generation passes consume the result directly.

pub mod graph;
pub mod ordering;

pub use graph::{build_graph, topological_sort, DependencyGraph, GraphStats, NameKey};
pub use ordering::{sort_by_dependency, sort_declarations};
