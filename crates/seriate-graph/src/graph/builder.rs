//! Graph construction from declaration facts.

use seriate_core::config::GraphConfig;
use seriate_core::errors::GraphError;
use seriate_core::types::Declaration;

use super::types::{DependencyGraph, NameKey};

/// Build the dependency graph for a batch of declarations.
///
/// Vertices are added for every declaration, in input order, before any
/// edge work. Edges are then drawn per declaration from up to three
/// sources, in a fixed order: base types, referenced names (with
/// `auxiliary_reference_names` appended to every declaration), then
/// member-body references. A target name outside the batch never
/// produces an edge; a declaration naming itself never produces an
/// edge. Identical input yields an identical graph.
pub fn build_graph(
    declarations: &[Declaration],
    auxiliary_reference_names: &[String],
    config: &GraphConfig,
) -> Result<DependencyGraph, GraphError> {
    tracing::debug!(declarations = declarations.len(), "building dependency graph");

    let mut graph = DependencyGraph::new();

    for decl in declarations {
        if graph.contains(&decl.name) {
            return Err(GraphError::DuplicateDeclaration {
                name: decl.name.clone(),
            });
        }
        graph.add_vertex(&decl.name);
    }

    for decl in declarations {
        // The vertex pass interned every declaration name.
        let Some(from) = graph.key_of(&decl.name) else {
            continue;
        };

        if config.effective_base_type_edges() {
            for name in &decl.base_type_names {
                add_reference_edge(&mut graph, from, name);
            }
        }
        if config.effective_reference_edges() {
            for name in decl.referenced_names.iter().chain(auxiliary_reference_names) {
                add_reference_edge(&mut graph, from, name);
            }
        }
        if config.effective_body_reference_edges() {
            for name in &decl.body_referenced_names {
                add_reference_edge(&mut graph, from, name);
            }
        }
    }

    let stats = graph.stats();
    tracing::debug!(
        vertices = stats.vertices,
        edges = stats.edges,
        skipped = stats.skipped_references,
        "dependency graph built"
    );

    Ok(graph)
}

/// Add an edge to `name` if it is in the known universe; count it as
/// skipped otherwise.
fn add_reference_edge(graph: &mut DependencyGraph, from: NameKey, name: &str) {
    match graph.key_of(name) {
        Some(to) => {
            graph.add_edge(from, to);
        }
        None => {
            graph.skipped_references += 1;
        }
    }
}
