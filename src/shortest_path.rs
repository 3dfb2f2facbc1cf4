//! Single-source shortest paths: Dijkstra and Bellman-Ford.
//!
//! Both algorithms share one relaxation rule. For an edge `u -> v` the
//! candidate distance is `dist[u] + weight`, plus the weight of `u` itself
//! when node weights are enabled. A candidate replaces the current best only
//! when strictly smaller, so among equal-cost routes the first one relaxed
//! wins.

use std::{cmp::Ordering, collections::BinaryHeap};

use ahash::{AHashMap, AHashSet};
use tracing::{debug, warn};

use crate::{
    errors::GraphError,
    graph::{Edge, WeightedGraph},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Complete,
    /// The graph is flagged with a negative cycle; nothing was computed.
    Blocked,
    /// Relaxation finished but an edge could still be relaxed afterwards.
    NegativeCycleDetected,
}

#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: i64,
    pub distances: AHashMap<i64, f64>,
    pub predecessors: AHashMap<i64, Option<i64>>,
    pub status: RunStatus,
}

impl ShortestPaths {
    fn initialized(graph: &WeightedGraph, source: i64) -> Self {
        let mut distances = AHashMap::with_capacity(graph.node_count());
        let mut predecessors = AHashMap::with_capacity(graph.node_count());
        for id in graph.node_ids() {
            distances.insert(id, f64::INFINITY);
            predecessors.insert(id, None);
        }
        distances.insert(source, 0.0);
        Self {
            source,
            distances,
            predecessors,
            status: RunStatus::Complete,
        }
    }

    fn blocked(source: i64) -> Self {
        Self {
            source,
            distances: AHashMap::new(),
            predecessors: AHashMap::new(),
            status: RunStatus::Blocked,
        }
    }

    /// Turns a non-complete run into the matching error.
    pub fn check(&self) -> Result<(), GraphError> {
        match self.status {
            RunStatus::Complete => Ok(()),
            RunStatus::Blocked => Err(GraphError::NegativeCycleBlocksComputation {
                origin: self.source,
            }),
            RunStatus::NegativeCycleDetected => Err(GraphError::UnexpectedNegativeCycle {
                origin: self.source,
            }),
        }
    }

    /// Distance to `target`, or `None` when it was never reached.
    pub fn distance_to(&self, target: i64) -> Option<f64> {
        self.distances
            .get(&target)
            .copied()
            .filter(|dist| dist.is_finite())
    }

    pub fn path_to(&self, target: i64) -> Vec<i64> {
        reconstruct_path(&self.predecessors, target)
    }

    pub fn path_names(&self, graph: &WeightedGraph, target: i64) -> Result<Vec<String>, GraphError> {
        self.path_to(target)
            .into_iter()
            .map(|id| {
                graph
                    .node(id)
                    .map(|node| node.name.clone())
                    .ok_or_else(|| GraphError::not_found(format!("node {id}")))
            })
            .collect()
    }

    /// The improved distance `edge` would give its target, if any.
    fn improvement(&self, graph: &WeightedGraph, edge: &Edge, use_node_weights: bool) -> Option<f64> {
        let from = self.distances.get(&edge.from).copied()?;
        if from.is_infinite() {
            return None;
        }
        let mut candidate = from + edge.weight;
        if use_node_weights {
            if let Some(node) = graph.node(edge.from) {
                candidate += node.weight;
            }
        }
        let current = self.distances.get(&edge.to).copied()?;
        (candidate < current).then_some(candidate)
    }

    /// Applies `edge` if it improves its target and returns the new distance.
    fn relax(&mut self, graph: &WeightedGraph, edge: &Edge, use_node_weights: bool) -> Option<f64> {
        let candidate = self.improvement(graph, edge, use_node_weights)?;
        self.distances.insert(edge.to, candidate);
        self.predecessors.insert(edge.to, Some(edge.from));
        Some(candidate)
    }
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: i64,
}

impl Eq for State {}

// BinaryHeap is a max-heap; reverse on cost, then on id so equal costs pop
// lowest id first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra with a lazily pruned frontier. Only correct when no relaxed edge
/// has a negative weight; choosing the algorithm is up to the caller.
pub fn dijkstra(
    graph: &WeightedGraph,
    source: i64,
    use_node_weights: bool,
) -> Result<ShortestPaths, GraphError> {
    if !graph.contains_node(source) {
        return Err(GraphError::not_found(format!("node {source}")));
    }
    let mut paths = ShortestPaths::initialized(graph, source);
    let mut visited = AHashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { node, .. }) = heap.pop() {
        if !visited.insert(node) {
            continue;
        }
        for edge in graph.outgoing(node) {
            if let Some(cost) = paths.relax(graph, edge, use_node_weights) {
                heap.push(State { cost, node: edge.to });
            }
        }
    }
    debug!(source, settled = visited.len(), "dijkstra finished");
    Ok(paths)
}

/// Bellman-Ford over all edges in ascending edge id order.
///
/// Refuses to run when the graph is flagged with negative cycles and returns
/// empty maps with [`RunStatus::Blocked`]. A cycle that shows up anyway is
/// reported through [`RunStatus::NegativeCycleDetected`]; the distances are
/// left as the last pass produced them.
pub fn bellman_ford(
    graph: &WeightedGraph,
    source: i64,
    use_node_weights: bool,
) -> Result<ShortestPaths, GraphError> {
    if !graph.contains_node(source) {
        return Err(GraphError::not_found(format!("node {source}")));
    }
    if graph.properties().negative_cycles {
        warn!(source, "bellman-ford blocked by negative cycle");
        return Ok(ShortestPaths::blocked(source));
    }
    let mut paths = ShortestPaths::initialized(graph, source);
    let rounds = graph.node_count().saturating_sub(1);
    let mut passes = 0;
    for _ in 0..rounds {
        passes += 1;
        if !relax_all(&mut paths, graph, use_node_weights) {
            break;
        }
    }
    let still_relaxable = graph
        .edges()
        .any(|edge| paths.improvement(graph, edge, use_node_weights).is_some());
    if still_relaxable {
        warn!(source, "negative cycle detected after bellman-ford passes");
        paths.status = RunStatus::NegativeCycleDetected;
    }
    debug!(source, passes, "bellman-ford finished");
    Ok(paths)
}

fn relax_all(paths: &mut ShortestPaths, graph: &WeightedGraph, use_node_weights: bool) -> bool {
    let mut updated = false;
    for edge in graph.edges() {
        if paths.relax(graph, edge, use_node_weights).is_some() {
            updated = true;
        }
    }
    updated
}

/// Walks predecessor links back from `target` and returns the ids in
/// source-to-target order. An unreached target yields just itself.
pub fn reconstruct_path(predecessors: &AHashMap<i64, Option<i64>>, target: i64) -> Vec<i64> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&Some(parent)) = predecessors.get(&current) {
        // predecessor links only loop after a negative cycle
        if path.len() > predecessors.len() {
            break;
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

pub fn format_path(names: &[String]) -> String {
    names.join(" -> ")
}
