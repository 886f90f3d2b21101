//! End-to-end ordering tests for the public entry point.

use seriate_core::config::GraphConfig;
use seriate_core::errors::{OrderingError, SeriateErrorCode, TraversalError};
use seriate_core::types::Declaration;
use seriate_graph::{sort_by_dependency, sort_declarations};

fn names<'a>(ordered: &[&'a Declaration]) -> Vec<&'a str> {
    ordered.iter().map(|d| d.name.as_str()).collect()
}

fn position(ordered: &[&Declaration], name: &str) -> usize {
    ordered
        .iter()
        .position(|d| d.name == name)
        .unwrap_or_else(|| panic!("{name} missing from output"))
}

#[test]
fn test_base_mid_top_orders_dependencies_first() {
    let decls = vec![
        Declaration::new("Top")
            .with_base_types(["Mid"])
            .with_references(["Base"]),
        Declaration::new("Mid").with_base_types(["Base"]),
        Declaration::new("Base"),
    ];
    let ordered = sort_declarations(&decls).unwrap();

    assert_eq!(names(&ordered), vec!["Base", "Mid", "Top"]);
}

#[test]
fn test_reference_edge_orders_target_first() {
    let decls = vec![
        Declaration::new("X").with_references(["Y"]),
        Declaration::new("Y"),
        Declaration::new("Z"),
    ];
    let ordered = sort_declarations(&decls).unwrap();

    assert_eq!(ordered.len(), 3);
    assert!(position(&ordered, "Y") < position(&ordered, "X"));
    // Z is unconstrained but appears exactly once.
    assert_eq!(names(&ordered).iter().filter(|n| **n == "Z").count(), 1);
}

#[test]
fn test_every_declaration_appears_exactly_once() {
    let decls: Vec<Declaration> = (0..50)
        .map(|i| {
            let mut d = Declaration::new(format!("Class{i}"));
            if i % 3 == 0 && i > 0 {
                d = d.with_base_types([format!("Class{}", i - 1)]);
            }
            d
        })
        .collect();
    let ordered = sort_declarations(&decls).unwrap();

    let mut seen = names(&ordered);
    assert_eq!(seen.len(), 50);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 50);
}

#[test]
fn test_unknown_names_do_not_constrain_or_drop_declarations() {
    let decls = vec![
        Declaration::new("Controller")
            .with_base_types(["ControllerBase"])
            .with_references(["ILogger"]),
        Declaration::new("Model"),
    ];
    let ordered = sort_declarations(&decls).unwrap();

    assert_eq!(names(&ordered), vec!["Controller", "Model"]);
}

#[test]
fn test_self_reference_terminates_and_keeps_declaration() {
    let decls = vec![Declaration::new("Singleton")
        .with_base_types(["Singleton"])
        .with_body_references(["Singleton"])];
    let ordered = sort_declarations(&decls).unwrap();

    assert_eq!(names(&ordered), vec!["Singleton"]);
}

#[test]
fn test_two_declaration_cycle_fails_with_path() {
    let decls = vec![
        Declaration::new("A").with_references(["B"]),
        Declaration::new("B").with_references(["A"]),
    ];
    let err = sort_declarations(&decls).unwrap_err();

    assert_eq!(err.error_code(), "SER_TRAVERSAL_CYCLE");
    match err {
        OrderingError::Traversal(TraversalError::CycleDetected { path }) => {
            assert_eq!(path.first().map(String::as_str), path.last().map(String::as_str));
            assert!(path.contains(&"A".to_string()));
            assert!(path.contains(&"B".to_string()));
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_transitive_cycle_is_detected() {
    let decls = vec![
        Declaration::new("A").with_base_types(["B"]),
        Declaration::new("B").with_references(["C"]),
        Declaration::new("C").with_body_references(["A"]),
    ];
    let err = sort_declarations(&decls).unwrap_err();

    match err {
        OrderingError::Traversal(TraversalError::CycleDetected { path }) => {
            assert_eq!(path.len(), 4);
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_duplicate_names_fail_before_ordering() {
    let decls = vec![
        Declaration::new("Widget"),
        Declaration::new("Widget").with_base_types(["Gadget"]),
        Declaration::new("Gadget"),
    ];
    let err = sort_declarations(&decls).unwrap_err();

    assert_eq!(err.error_code(), "SER_GRAPH_DUPLICATE_NAME");
}

#[test]
fn test_disabling_reference_edges_breaks_a_reference_cycle() {
    // A references B while B inherits from A: the caller keeps the
    // inheritance constraint and retries without reference edges.
    let decls = vec![
        Declaration::new("A").with_references(["B"]),
        Declaration::new("B").with_base_types(["A"]),
    ];
    assert!(sort_declarations(&decls).is_err());

    let config = GraphConfig {
        reference_edges: Some(false),
        ..Default::default()
    };
    let ordered = sort_by_dependency(&decls, &[], &config).unwrap();
    assert_eq!(names(&ordered), vec!["A", "B"]);
}

#[test]
fn test_all_sources_disabled_yields_input_order() {
    let decls = vec![
        Declaration::new("C").with_base_types(["B"]),
        Declaration::new("B").with_base_types(["A"]),
        Declaration::new("A"),
    ];
    let config = GraphConfig {
        base_type_edges: Some(false),
        reference_edges: Some(false),
        body_reference_edges: Some(false),
    };
    let ordered = sort_by_dependency(&decls, &[], &config).unwrap();

    assert_eq!(names(&ordered), vec!["C", "B", "A"]);
}

#[test]
fn test_auxiliary_names_order_shared_dependency_first() {
    let decls = vec![
        Declaration::new("OrderService"),
        Declaration::new("UserService"),
        Declaration::new("CommonTypes"),
    ];
    let aux = vec!["CommonTypes".to_string()];
    let ordered = sort_by_dependency(&decls, &aux, &GraphConfig::default()).unwrap();

    assert_eq!(position(&ordered, "CommonTypes"), 0);
}

#[test]
fn test_body_references_constrain_order() {
    let decls = vec![
        Declaration::new("Consumer").with_body_references(["Producer"]),
        Declaration::new("Producer"),
    ];
    let ordered = sort_declarations(&decls).unwrap();

    assert_eq!(names(&ordered), vec!["Producer", "Consumer"]);
}

#[test]
fn test_reruns_are_byte_identical() {
    let decls = vec![
        Declaration::new("D").with_references(["B", "C"]),
        Declaration::new("C").with_base_types(["A"]),
        Declaration::new("B").with_base_types(["A"]),
        Declaration::new("A"),
        Declaration::new("E"),
    ];
    let first = names(&sort_declarations(&decls).unwrap());
    let second = names(&sort_declarations(&decls).unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let ordered = sort_declarations(&[]).unwrap();
    assert!(ordered.is_empty());
}

#[test]
fn test_deep_chain_does_not_exhaust_the_stack() {
    let n = 10_000;
    let mut decls = Vec::with_capacity(n);
    decls.push(Declaration::new("Class00000"));
    for i in 1..n {
        decls.push(
            Declaration::new(format!("Class{i:05}"))
                .with_base_types([format!("Class{:05}", i - 1)]),
        );
    }
    // Dependents first, so the traversal has to descend the full chain.
    decls.reverse();

    let ordered = sort_declarations(&decls).unwrap();
    assert_eq!(ordered.len(), n);
    assert_eq!(ordered[0].name, "Class00000");
    assert_eq!(ordered[n - 1].name, format!("Class{:05}", n - 1));
}

#[test]
fn test_ordering_borrows_declarations_unchanged() {
    let decls = vec![
        Declaration::new("Derived")
            .with_base_types(["Base"])
            .with_namespace("App.Domain")
            .with_modifiers("public sealed"),
        Declaration::new("Base"),
    ];
    let ordered = sort_declarations(&decls).unwrap();

    assert_eq!(ordered[1].namespace.as_deref(), Some("App.Domain"));
    assert_eq!(ordered[1].modifiers.as_deref(), Some("public sealed"));
    assert_eq!(decls[0].base_type_names, vec!["Base"]);
}
