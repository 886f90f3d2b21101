//! Public ordering entry point.
//!
//! Composes graph construction and topological traversal, then maps the
//! ordered name sequence back to the caller's declarations. Input
//! declarations are borrowed and never mutated; on any failure the call
//! returns no ordering at all.

use seriate_core::config::GraphConfig;
use seriate_core::errors::{GraphError, OrderingError};
use seriate_core::types::collections::FxHashMap;
use seriate_core::types::Declaration;

use crate::graph::{build_graph, topological_sort};

/// Order `declarations` so that every declaration appears after its
/// dependencies.
///
/// `auxiliary_reference_names` are treated as referenced by every
/// declaration in the batch (the shape using-style directives arrive
/// in). Names that match no declaration are ignored.
pub fn sort_by_dependency<'a>(
    declarations: &'a [Declaration],
    auxiliary_reference_names: &[String],
    config: &GraphConfig,
) -> Result<Vec<&'a Declaration>, OrderingError> {
    let mut by_name: FxHashMap<&str, &Declaration> =
        FxHashMap::with_capacity_and_hasher(declarations.len(), Default::default());
    for decl in declarations {
        if by_name.insert(decl.name.as_str(), decl).is_some() {
            return Err(GraphError::DuplicateDeclaration {
                name: decl.name.clone(),
            }
            .into());
        }
    }

    let graph = build_graph(declarations, auxiliary_reference_names, config)?;
    let order = topological_sort(&graph)?;

    let mut ordered = Vec::with_capacity(order.len());
    for key in order {
        // Every vertex was interned from exactly one input declaration.
        if let Some(decl) = by_name.get(graph.resolve(key)) {
            ordered.push(*decl);
        }
    }

    tracing::debug!(declarations = ordered.len(), "declarations ordered");
    Ok(ordered)
}

/// Order `declarations` with no auxiliary names and default
/// configuration.
pub fn sort_declarations(
    declarations: &[Declaration],
) -> Result<Vec<&Declaration>, OrderingError> {
    sort_by_dependency(declarations, &[], &GraphConfig::default())
}
