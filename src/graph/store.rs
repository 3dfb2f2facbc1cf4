use std::collections::BTreeMap;

use tracing::debug;

use super::types::{Edge, GraphProperties, Node};
use crate::{algo, errors::GraphError};

/// Owns every node and edge of one graph.
///
/// Nodes and edges live in id-keyed maps and refer to each other only by id,
/// so removing either side never leaves a dangling owner. Every successful
/// mutation re-runs [`algo::analyze`] over the whole graph before returning.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    nodes: BTreeMap<i64, Node>,
    edges: BTreeMap<i64, Edge>,
    properties: GraphProperties,
    next_node_id: i64,
    next_edge_id: i64,
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            properties: GraphProperties::default(),
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    pub fn add_node(
        &mut self,
        id: i64,
        name: impl Into<String>,
        weight: f64,
    ) -> Result<(), GraphError> {
        if !weight.is_finite() {
            debug!(node = id, weight, "rejected node add: non-finite weight");
            return Err(GraphError::invalid_input(format!(
                "node {id} weight must be finite, got {weight}"
            )));
        }
        if self.nodes.contains_key(&id) {
            debug!(node = id, "rejected node add: id conflict");
            return Err(GraphError::node_conflict(id));
        }
        self.nodes.insert(id, Node::new(id, name, weight));
        self.next_node_id = self.next_node_id.max(id.saturating_add(1));
        debug!(node = id, "node added");
        self.refresh_properties();
        Ok(())
    }

    /// Adds a node under the next free id of this graph and returns that id.
    pub fn insert_node(&mut self, name: impl Into<String>, weight: f64) -> Result<i64, GraphError> {
        let id = self.next_node_id;
        self.add_node(id, name, weight)?;
        Ok(id)
    }

    pub fn remove_node(&mut self, id: i64) -> Option<Node> {
        let node = self.nodes.get(&id)?;
        let incident: Vec<i64> = node
            .outgoing
            .iter()
            .chain(node.incoming.iter())
            .copied()
            .collect();
        for edge_id in incident {
            self.detach_edge(edge_id);
        }
        let removed = self.nodes.remove(&id);
        debug!(node = id, "node removed");
        self.refresh_properties();
        removed
    }

    pub fn add_edge(&mut self, id: i64, from: i64, to: i64, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() {
            debug!(edge = id, weight, "rejected edge add: non-finite weight");
            return Err(GraphError::invalid_input(format!(
                "edge {id} weight must be finite, got {weight}"
            )));
        }
        for endpoint in [from, to] {
            if !self.nodes.contains_key(&endpoint) {
                debug!(edge = id, node = endpoint, "rejected edge add: endpoint missing");
                return Err(GraphError::unresolved(id, endpoint));
            }
        }
        if self.edges.contains_key(&id) {
            debug!(edge = id, "rejected edge add: id conflict");
            return Err(GraphError::edge_conflict(id));
        }
        self.attach_edge(Edge {
            id,
            from,
            to,
            weight,
        });
        debug!(edge = id, from, to, weight, "edge added");
        self.refresh_properties();
        Ok(())
    }

    /// Adds an edge under the next free edge id of this graph and returns that id.
    pub fn insert_edge(&mut self, from: i64, to: i64, weight: f64) -> Result<i64, GraphError> {
        let id = self.next_edge_id;
        self.add_edge(id, from, to, weight)?;
        Ok(id)
    }

    pub fn remove_edge(&mut self, id: i64) -> Option<Edge> {
        let removed = self.detach_edge(id)?;
        debug!(edge = id, "edge removed");
        self.refresh_properties();
        Some(removed)
    }

    /// Recomputes every derived property from the current nodes and edges.
    pub fn refresh_properties(&mut self) {
        self.properties = algo::analyze(self);
    }

    pub fn properties(&self) -> &GraphProperties {
        &self.properties
    }

    pub fn node(&self, id: i64) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: i64) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn contains_node(&self, id: i64) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, id: i64) -> bool {
        self.edges.contains_key(&id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Edges in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    pub fn node_ids(&self) -> Vec<i64> {
        self.nodes.keys().copied().collect()
    }

    /// Edges leaving `id` in the order they were added. Empty for unknown ids.
    pub fn outgoing(&self, id: i64) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.outgoing.iter())
            .filter_map(|edge_id| self.edges.get(edge_id))
    }

    /// Edges entering `id` in the order they were added. Empty for unknown ids.
    pub fn incoming(&self, id: i64) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.incoming.iter())
            .filter_map(|edge_id| self.edges.get(edge_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Builds a graph from pre-validated parts: node ids unique, edge ids
    /// unique, every edge endpoint present. Properties are taken as given.
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        properties: GraphProperties,
    ) -> Self {
        let mut graph = Self::new();
        for mut node in nodes {
            node.incoming.clear();
            node.outgoing.clear();
            graph.next_node_id = graph.next_node_id.max(node.id.saturating_add(1));
            graph.nodes.insert(node.id, node);
        }
        for edge in edges {
            graph.attach_edge(edge);
        }
        graph.properties = properties;
        graph
    }

    fn attach_edge(&mut self, edge: Edge) {
        if let Some(node) = self.nodes.get_mut(&edge.from) {
            node.outgoing.push(edge.id);
        }
        if let Some(node) = self.nodes.get_mut(&edge.to) {
            node.incoming.push(edge.id);
        }
        self.next_edge_id = self.next_edge_id.max(edge.id.saturating_add(1));
        self.edges.insert(edge.id, edge);
    }

    fn detach_edge(&mut self, id: i64) -> Option<Edge> {
        let edge = self.edges.remove(&id)?;
        if let Some(node) = self.nodes.get_mut(&edge.from) {
            node.outgoing.retain(|&edge_id| edge_id != id);
        }
        if let Some(node) = self.nodes.get_mut(&edge.to) {
            node.incoming.retain(|&edge_id| edge_id != id);
        }
        Some(edge)
    }
}
