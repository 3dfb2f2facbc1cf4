//! JSON document load/save for [`WeightedGraph`].

use std::{fs, io, path::Path};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::GraphError,
    graph::{Edge, GraphProperties, Node, WeightedGraph},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: i64,
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub id: i64,
    pub from_id: i64,
    pub to_id: i64,
    pub weight: f64,
}

/// The persisted shape of a graph: entities plus the derived properties at
/// save time, flattened to top-level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    #[serde(flatten)]
    pub properties: GraphProperties,
}

impl GraphDocument {
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .map(|node| NodeRecord {
                    id: node.id,
                    name: node.name.clone(),
                    weight: node.weight,
                })
                .collect(),
            edges: graph
                .edges()
                .map(|edge| EdgeRecord {
                    id: edge.id,
                    from_id: edge.from,
                    to_id: edge.to,
                    weight: edge.weight,
                })
                .collect(),
            properties: *graph.properties(),
        }
    }

    /// Builds a graph from this document. Edges whose endpoints are not among
    /// the document's nodes are dropped; duplicate ids are rejected.
    pub fn into_graph(self) -> Result<WeightedGraph, GraphError> {
        let mut node_ids = AHashSet::with_capacity(self.nodes.len());
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for record in self.nodes {
            if !node_ids.insert(record.id) {
                return Err(GraphError::malformed(format!(
                    "duplicate node id {}",
                    record.id
                )));
            }
            nodes.push(Node::new(record.id, record.name, record.weight));
        }

        let mut edge_ids = AHashSet::with_capacity(self.edges.len());
        let mut edges = Vec::with_capacity(self.edges.len());
        for record in self.edges {
            if !edge_ids.insert(record.id) {
                return Err(GraphError::malformed(format!(
                    "duplicate edge id {}",
                    record.id
                )));
            }
            if !node_ids.contains(&record.from_id) || !node_ids.contains(&record.to_id) {
                warn!(
                    edge = record.id,
                    from = record.from_id,
                    to = record.to_id,
                    "dropping edge with unresolved endpoint"
                );
                continue;
            }
            edges.push(Edge {
                id: record.id,
                from: record.from_id,
                to: record.to_id,
                weight: record.weight,
            });
        }
        Ok(WeightedGraph::from_parts(nodes, edges, self.properties))
    }
}

impl WeightedGraph {
    /// Replaces this graph with the one described by `bytes`.
    ///
    /// Derived properties are taken from the document as written; call
    /// [`refresh_properties`](Self::refresh_properties) to recompute them. On
    /// error the graph is left untouched.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), GraphError> {
        let document: GraphDocument =
            serde_json::from_slice(bytes).map_err(|e| GraphError::malformed(e.to_string()))?;
        let graph = document.into_graph()?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        *self = graph;
        Ok(())
    }

    /// Re-derives properties, then serializes the whole graph.
    pub fn save(&mut self) -> Result<Vec<u8>, GraphError> {
        self.refresh_properties();
        serde_json::to_vec_pretty(&GraphDocument::from_graph(self))
            .map_err(|e| GraphError::invalid_input(e.to_string()))
    }

    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GraphError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GraphError::DocumentNotFound(path.to_path_buf()),
            _ => GraphError::io(e.to_string()),
        })?;
        self.load(&bytes)
    }

    pub fn save_to_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GraphError> {
        let bytes = self.save()?;
        fs::write(path.as_ref(), bytes).map_err(|e| GraphError::io(e.to_string()))
    }

    /// Reads a graph from `path` into a fresh instance.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.load_from_path(path)?;
        Ok(graph)
    }
}
