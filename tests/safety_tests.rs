use rand::{Rng, SeedableRng, rngs::StdRng};
use weightgraph::{
    WeightedGraph, bellman_ford,
    bench_utils::{GraphShape, generate_graph},
    dijkstra,
    safety::{
        run_integrity_checks, run_strict_integrity_checks, validate_adjacency,
        validate_endpoints, validate_properties,
    },
};

#[test]
fn report_for_clean_graph_no_issues() {
    let graph = generate_graph(GraphShape::Line, 5, 1.0..4.0, 7).materialize();
    let report = run_integrity_checks(&graph);
    assert_eq!(report.total_nodes, 5);
    assert_eq!(report.total_edges, 4);
    assert_eq!(report.dangling_endpoints, 0);
    assert_eq!(report.adjacency_mismatches, 0);
    assert_eq!(report.degree_mismatches, 0);
    assert!(!report.stale_properties);
}

#[test]
fn stale_properties_detected_after_verbatim_load() {
    let mut graph = WeightedGraph::new();
    let bytes = br#"{
        "nodes": [{ "id": 1, "name": "A", "weight": 0.0 }, { "id": 2, "name": "B", "weight": 0.0 }],
        "edges": [],
        "directed": true, "weighted": false, "selfLooping": false, "connected": true,
        "connectionDegree": 1, "negativeWeights": false, "negativeCycles": false
    }"#;
    graph.load(bytes).expect("load");
    assert!(validate_properties(&graph).stale_properties);
    let err = run_strict_integrity_checks(&graph).expect_err("stale");
    assert!(err.report.stale_properties);
    graph.refresh_properties();
    run_strict_integrity_checks(&graph).expect("fresh");
}

#[test]
fn random_mutation_sequences_preserve_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut graph = WeightedGraph::new();
    for step in 0..400 {
        match rng.gen_range(0..4) {
            0 => {
                let id = rng.gen_range(1..20);
                let _ = graph.add_node(id, format!("n{id}"), rng.gen_range(-1.0..3.0));
            }
            1 => {
                let id = rng.gen_range(1..40);
                let from = rng.gen_range(1..20);
                let to = rng.gen_range(1..20);
                let _ = graph.add_edge(id, from, to, rng.gen_range(-2.0..6.0));
            }
            2 => {
                let id = rng.gen_range(1..20);
                let had: Vec<i64> = graph
                    .edges()
                    .filter(|edge| edge.from != id && edge.to != id)
                    .map(|edge| edge.id)
                    .collect();
                graph.remove_node(id);
                let kept: Vec<i64> = graph.edges().map(|edge| edge.id).collect();
                assert_eq!(had, kept, "step {step}: node removal touched other edges");
            }
            _ => {
                let id = rng.gen_range(1..40);
                graph.remove_edge(id);
            }
        }
        assert!(validate_endpoints(&graph).dangling_endpoints == 0);
        assert!(!validate_adjacency(&graph).has_issues(), "step {step}");
        assert!(!validate_properties(&graph).stale_properties, "step {step}");
    }
}

#[test]
fn dijkstra_and_bellman_ford_agree_without_negative_edges() {
    for seed in 0..12u64 {
        let dataset = generate_graph(GraphShape::Random { edges: 60 }, 20, 0.0..9.0, seed);
        let graph = dataset.materialize();
        assert!(!graph.properties().negative_weights);
        for source in [1, 7, 20] {
            let dj = dijkstra(&graph, source, false).expect("dijkstra");
            let bf = bellman_ford(&graph, source, false).expect("bellman-ford");
            bf.check().expect("complete");
            assert_eq!(dj.distances, bf.distances, "seed {seed} source {source}");
        }
    }
}

#[test]
fn grid_distances_are_manhattan() {
    let graph = generate_graph(
        GraphShape::Grid2D {
            width: 4,
            height: 3,
        },
        12,
        1.0..1.0,
        3,
    )
    .materialize();
    let paths = dijkstra(&graph, 1, false).expect("dijkstra");
    assert_eq!(paths.distance_to(12), Some(5.0));
    assert_eq!(paths.distance_to(4), Some(3.0));
}

#[test]
fn generated_datasets_materialize_every_record() {
    for shape in [
        GraphShape::Line,
        GraphShape::Star,
        GraphShape::Grid2D {
            width: 5,
            height: 4,
        },
        GraphShape::Random { edges: 45 },
    ] {
        let dataset = generate_graph(shape, 20, -2.0..5.0, 11);
        let graph = dataset.materialize();
        assert_eq!(graph.node_count(), dataset.node_count());
        assert_eq!(graph.edge_count(), dataset.edge_count());
        run_strict_integrity_checks(&graph).expect("consistent");
    }
}
