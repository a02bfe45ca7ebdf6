use intgraph::prelude::*;

#[test]
fn test_reduction_removes_implied_edge() {
    let graph = Digraph::from_iter([(1, 2), (1, 3), (3, 2)]);
    let expected_reduction = Digraph::from_iter([(1, 3), (3, 2)]);

    let ReductionAndClosure { reduction, closure } =
        graph.transitive_reduction_and_closure_of_dag().unwrap();

    assert_eq!(closure.compare(&graph), Relation::Equal);
    assert_eq!(reduction.compare(&expected_reduction), Relation::Equal);
}

#[test]
fn test_reduction_of_five_vertex_dag() {
    let graph = Digraph::from_iter([
        (1, 2),
        (1, 3),
        (1, 4),
        (1, 5),
        (2, 4),
        (3, 4),
        (3, 5),
        (4, 5),
    ]);
    let expected_reduction = Digraph::from_iter([(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);

    let ReductionAndClosure { reduction, closure } =
        graph.transitive_reduction_and_closure_of_dag().unwrap();

    assert_eq!(closure.compare(&graph), Relation::Greater);
    assert_eq!(reduction.compare(&expected_reduction), Relation::Equal);
    assert!(closure.has_edge(2, 5));
    assert_eq!(closure.edge_count(), 9);
}

#[test]
fn test_reduction_of_isolated_vertices() {
    let mut graph = Digraph::new();
    graph.insert(1);
    graph.insert(2);

    let ReductionAndClosure { reduction, closure } =
        graph.transitive_reduction_and_closure_of_dag().unwrap();

    for result in [&reduction, &closure] {
        assert_eq!(result.vertex_count(), 2);
        assert_eq!(result.edge_count(), 0);
    }
}

#[test]
fn test_reduction_rejects_cycle() {
    let graph = Digraph::from_iter([(1, 2), (2, 1)]);
    let result = graph.transitive_reduction_and_closure_of_dag();
    assert!(matches!(result, Err(GraphError::Cycle { .. })));
}

#[test]
fn test_reduction_can_be_retried_after_breaking_cycle() {
    let mut graph = Digraph::from_iter([(1, 2), (2, 3), (3, 1), (1, 3)]);
    assert!(graph.transitive_reduction_of_dag().is_err());

    let kahn = graph.kahn_topological_sort();
    assert!(kahn.has_cycles());
    graph.disconnect(3, 1);

    let reduction = graph.transitive_reduction_of_dag().unwrap();
    assert_eq!(reduction, Digraph::from_iter([(1, 2), (2, 3)]));
}

#[test]
fn test_transpose_round_trip() {
    let mut graph = Digraph::from_iter([(1, 2), (2, 3), (3, 1), (4, 4), (5, 1)]);
    graph.insert(6);
    let round_trip = graph.transpose().transpose();
    assert_eq!(round_trip.compare(&graph), Relation::Equal);
}

#[test]
fn test_dag_closure_matches_naive_closure() {
    let graph = Digraph::from_iter([(1, 2), (2, 3), (3, 4), (1, 5), (5, 4), (6, 1)]);
    let closure = graph.transitive_closure_of_dag().unwrap();
    assert_eq!(closure, graph.transitive_closure());
}
