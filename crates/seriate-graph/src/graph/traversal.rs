//! Topological traversal with cycle detection.
//!
//! Depth-first from each vertex in insertion order, visiting all
//! outgoing-edge targets before appending the vertex itself. The
//! traversal is iterative with an explicit work stack, so recursion
//! depth never bounds the longest dependency chain, while the visit
//! order is identical to the recursive formulation.

use lasso::Key;
use seriate_core::errors::TraversalError;

use super::types::{DependencyGraph, NameKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Visiting,
    Visited,
}

/// Produce a topological order of every vertex in the graph.
///
/// For every edge `A -> B`, B appears at or before A in the output.
/// Vertices on independent subgraphs are ordered by traversal-start
/// order, so identical graphs always yield identical output. A cycle
/// aborts the sort with the offending path; no partial order is
/// returned.
pub fn topological_sort(graph: &DependencyGraph) -> Result<Vec<NameKey>, TraversalError> {
    let mut state = vec![VisitState::Unvisited; graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut path: Vec<NameKey> = Vec::new();
    let mut stack: Vec<NameKey> = Vec::new();

    for root in graph.vertices() {
        if state[root.into_usize()] != VisitState::Unvisited {
            continue;
        }
        stack.push(root);

        while let Some(vertex) = stack.pop() {
            let idx = vertex.into_usize();
            match state[idx] {
                VisitState::Unvisited => {
                    // First encounter: keep the vertex on the stack
                    // beneath its targets; it is appended to the output
                    // when it surfaces again.
                    state[idx] = VisitState::Visiting;
                    path.push(vertex);
                    stack.push(vertex);

                    let edges = graph.edges_of(vertex);
                    for &target in edges {
                        if state[target.into_usize()] == VisitState::Visiting {
                            return Err(cycle_error(graph, &path, target));
                        }
                    }
                    // Push in reverse so targets are visited in
                    // edge-list order.
                    for &target in edges.iter().rev() {
                        if state[target.into_usize()] == VisitState::Unvisited {
                            stack.push(target);
                        }
                    }
                }
                VisitState::Visiting => {
                    state[idx] = VisitState::Visited;
                    path.pop();
                    order.push(vertex);
                }
                VisitState::Visited => {}
            }
        }
    }

    tracing::debug!(vertices = order.len(), "topological sort complete");
    Ok(order)
}

/// Build the cycle error from the active path and the vertex that
/// closed the cycle.
fn cycle_error(graph: &DependencyGraph, path: &[NameKey], target: NameKey) -> TraversalError {
    // A Visiting vertex is always on the active path.
    let start = path.iter().position(|&k| k == target).unwrap_or(0);
    let mut cycle: Vec<String> = path[start..]
        .iter()
        .map(|&k| graph.resolve(k).to_string())
        .collect();
    cycle.push(graph.resolve(target).to_string());
    TraversalError::CycleDetected { path: cycle }
}
