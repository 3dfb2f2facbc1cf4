//! Structural checks run over a [`WeightedGraph`] after every mutation.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::graph::{GraphProperties, WeightedGraph};

pub fn analyze(graph: &WeightedGraph) -> GraphProperties {
    let (connected, connection_degree) = check_connectivity(graph);
    GraphProperties {
        directed: is_directed(graph),
        weighted: is_weighted(graph),
        self_looping: has_self_loops(graph),
        connected,
        connection_degree,
        negative_weights: has_negative_weights(graph),
        negative_cycles: has_negative_cycle(graph),
    }
}

/// Groups nodes by seeded reachability over outgoing edges.
///
/// Seeds are taken in ascending id order; every seed not yet reached starts a
/// new group. Incoming edges are never followed, so `1 -> 2` forms one group
/// while `2 -> 1` forms two.
pub fn components(graph: &WeightedGraph) -> Vec<Vec<i64>> {
    let mut components = Vec::new();
    let mut visited = AHashSet::new();
    for id in graph.node_ids() {
        if !visited.insert(id) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(id);
        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for edge in graph.outgoing(node) {
                if visited.insert(edge.to) {
                    queue.push_back(edge.to);
                }
            }
        }
        component.sort();
        components.push(component);
    }
    components
}

/// Returns `(connected, component_count)`. An empty graph counts as one
/// connected component.
pub fn check_connectivity(graph: &WeightedGraph) -> (bool, usize) {
    let count = components(graph).len().max(1);
    (count <= 1, count)
}

pub fn has_self_loops(graph: &WeightedGraph) -> bool {
    graph.edges().any(|edge| edge.is_self_loop())
}

pub fn has_negative_weights(graph: &WeightedGraph) -> bool {
    graph.edges().any(|edge| edge.weight < 0.0) || graph.nodes().any(|node| node.weight < 0.0)
}

/// Edge weights other than 1 or node weights other than 0 make a graph weighted.
pub fn is_weighted(graph: &WeightedGraph) -> bool {
    graph.edges().any(|edge| edge.weight != 1.0) || graph.nodes().any(|node| node.weight != 0.0)
}

/// A single pair of mirrored edges with equal weight anywhere in the graph
/// makes the whole graph undirected.
pub fn is_directed(graph: &WeightedGraph) -> bool {
    for edge in graph.edges() {
        if graph.edges().any(|other| edge.mirrors(other)) {
            return false;
        }
    }
    true
}

/// Runs Bellman-Ford from every node over edge weights and reports whether any
/// run still finds a relaxable edge after `V - 1` rounds.
pub fn has_negative_cycle(graph: &WeightedGraph) -> bool {
    let rounds = graph.node_count().saturating_sub(1);
    for source in graph.node_ids() {
        let mut dist: AHashMap<i64, f64> = graph
            .node_ids()
            .into_iter()
            .map(|id| (id, f64::INFINITY))
            .collect();
        dist.insert(source, 0.0);
        for _ in 0..rounds {
            if !relax_round(graph, &mut dist) {
                break;
            }
        }
        if relax_round(graph, &mut dist) {
            return true;
        }
    }
    false
}

fn relax_round(graph: &WeightedGraph, dist: &mut AHashMap<i64, f64>) -> bool {
    let mut updated = false;
    for edge in graph.edges() {
        let from = dist.get(&edge.from).copied().unwrap_or(f64::INFINITY);
        if from.is_infinite() {
            continue;
        }
        let candidate = from + edge.weight;
        if let Some(to) = dist.get_mut(&edge.to) {
            if candidate < *to {
                *to = candidate;
                updated = true;
            }
        }
    }
    updated
}

/// Ranks nodes by total degree, ties broken by ascending id.
pub fn nodes_by_degree(graph: &WeightedGraph, descending: bool) -> Vec<(i64, usize)> {
    let mut degrees: Vec<(i64, usize)> = graph
        .nodes()
        .map(|node| (node.id, node.degree()))
        .collect();
    degrees.sort_by(|a, b| {
        if descending {
            b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
        } else {
            a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0))
        }
    });
    degrees
}
