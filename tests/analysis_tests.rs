use weightgraph::{
    GraphProperties, WeightedGraph,
    algo::{
        analyze, check_connectivity, components, has_negative_cycle, is_directed,
        nodes_by_degree,
    },
};

fn build_graph(node_count: i64, edges: &[(i64, i64, i64, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for id in 1..=node_count {
        graph
            .add_node(id, format!("node_{id}"), 0.0)
            .expect("node");
    }
    for &(id, from, to, weight) in edges {
        graph.add_edge(id, from, to, weight).expect("edge");
    }
    graph
}

#[test]
fn test_empty_graph_properties() {
    let graph = WeightedGraph::new();
    assert_eq!(*graph.properties(), GraphProperties::default());
    assert_eq!(check_connectivity(&graph), (true, 1));
    assert!(graph.properties().directed);
    assert!(!graph.properties().negative_cycles);
}

#[test]
fn test_reciprocal_pair_with_equal_weight_is_undirected() {
    let mut graph = build_graph(3, &[(1, 1, 2, 1.0), (2, 2, 3, 2.0)]);
    assert!(graph.properties().directed);
    graph.add_edge(3, 2, 1, 1.0).expect("edge");
    assert!(!graph.properties().directed);
    graph.remove_edge(3).expect("removed");
    assert!(graph.properties().directed);
}

#[test]
fn test_reciprocal_pair_with_different_weight_stays_directed() {
    let mut graph = build_graph(3, &[(1, 1, 2, 1.0), (2, 2, 3, 2.0)]);
    graph.add_edge(3, 2, 1, 1.5).expect("edge");
    assert!(graph.properties().directed);
    graph.add_edge(4, 3, 2, 2.0).expect("edge");
    assert!(!graph.properties().directed);
}

#[test]
fn test_single_self_loop_does_not_count_as_reciprocal() {
    let graph = build_graph(1, &[(1, 1, 1, 2.0)]);
    assert!(is_directed(&graph));
    let twin = build_graph(1, &[(1, 1, 1, 2.0), (2, 1, 1, 2.0)]);
    assert!(!is_directed(&twin));
}

#[test]
fn test_self_loop_detection() {
    let mut graph = build_graph(1, &[]);
    graph.add_edge(5, 1, 1, 3.0).expect("edge");
    assert!(graph.properties().self_looping);
    graph.remove_edge(5).expect("removed");
    assert!(!graph.properties().self_looping);
}

#[test]
fn test_negative_node_weight_counts_as_negative() {
    let mut graph = build_graph(2, &[(1, 1, 2, 1.0)]);
    assert!(!graph.properties().negative_weights);
    graph.add_node(3, "neg", -0.5).expect("node");
    assert!(graph.properties().negative_weights);
    assert!(graph.properties().weighted);
}

#[test]
fn test_weighted_flag() {
    let unit = build_graph(2, &[(1, 1, 2, 1.0)]);
    assert!(!unit.properties().weighted);
    let weighted = build_graph(2, &[(1, 1, 2, 4.0)]);
    assert!(weighted.properties().weighted);
}

#[test]
fn test_negative_triangle_detected() {
    let graph = build_graph(3, &[(1, 1, 2, 1.0), (2, 2, 3, -5.0), (3, 3, 1, 1.0)]);
    assert!(graph.properties().negative_cycles);
    assert!(graph.properties().negative_weights);
}

#[test]
fn test_removing_cycle_edge_clears_negative_cycle() {
    let mut graph = build_graph(3, &[(1, 1, 2, 1.0), (2, 2, 3, -5.0), (3, 3, 1, 1.0)]);
    graph.remove_edge(3).expect("removed");
    assert!(!graph.properties().negative_cycles);
    assert!(graph.properties().negative_weights);
}

#[test]
fn test_negative_edge_without_cycle() {
    let graph = build_graph(3, &[(1, 1, 2, -4.0), (2, 2, 3, -1.0), (3, 1, 3, 2.0)]);
    assert!(!has_negative_cycle(&graph));
}

#[test]
fn test_negative_self_loop_is_a_cycle() {
    let graph = build_graph(1, &[(1, 1, 1, -1.0)]);
    assert!(graph.properties().negative_cycles);
}

#[test]
fn test_negative_cycle_unreachable_from_first_node_still_found() {
    let graph = build_graph(4, &[(1, 1, 2, 1.0), (2, 3, 4, -2.0), (3, 4, 3, 1.0)]);
    assert!(graph.properties().negative_cycles);
}

#[test]
fn test_disjoint_pairs_are_two_components() {
    let graph = build_graph(4, &[(1, 1, 2, 1.0), (2, 3, 4, 1.0)]);
    assert!(!graph.properties().connected);
    assert_eq!(graph.properties().connection_degree, 2);
    assert_eq!(components(&graph), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_connectivity_follows_outgoing_edges_only() {
    let forward = build_graph(2, &[(1, 1, 2, 1.0)]);
    assert_eq!(check_connectivity(&forward), (true, 1));
    let backward = build_graph(2, &[(1, 2, 1, 1.0)]);
    assert_eq!(check_connectivity(&backward), (false, 2));
}

#[test]
fn test_analyze_matches_stored_properties() {
    let graph = build_graph(4, &[(1, 1, 2, 2.0), (2, 2, 1, 2.0), (3, 3, 3, 1.0)]);
    let props = analyze(&graph);
    assert_eq!(props, *graph.properties());
    assert!(!props.directed);
    assert!(props.self_looping);
    assert_eq!(props.connection_degree, 3);
}

#[test]
fn test_nodes_by_degree_orders_with_id_tiebreak() {
    let graph = build_graph(4, &[(1, 1, 2, 1.0), (2, 1, 3, 1.0), (3, 4, 2, 1.0)]);
    let ranked = nodes_by_degree(&graph, true);
    assert_eq!(ranked, vec![(1, 2), (2, 2), (3, 1), (4, 1)]);
    let ascending = nodes_by_degree(&graph, false);
    assert_eq!(ascending.first(), Some(&(3, 1)));
}
