use serde::{Deserialize, Serialize};

/// A vertex. Adjacency lists hold edge ids, resolved through the owning
/// [`WeightedGraph`](super::WeightedGraph).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: i64,
    pub name: String,
    pub weight: f64,
    pub(crate) incoming: Vec<i64>,
    pub(crate) outgoing: Vec<i64>,
}

impl Node {
    pub fn new(id: i64, name: impl Into<String>, weight: f64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Ids of edges ending at this node, in insertion order.
    pub fn incoming(&self) -> &[i64] {
        &self.incoming
    }

    /// Ids of edges starting at this node, in insertion order.
    pub fn outgoing(&self) -> &[i64] {
        &self.outgoing
    }

    pub fn degree_in(&self) -> usize {
        self.incoming.len()
    }

    pub fn degree_out(&self) -> usize {
        self.outgoing.len()
    }

    pub fn degree(&self) -> usize {
        self.degree_in() + self.degree_out()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub id: i64,
    pub from: i64,
    pub to: i64,
    pub weight: f64,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// True when `other` is a distinct edge running the opposite way with the
    /// exact same weight.
    pub fn mirrors(&self, other: &Edge) -> bool {
        self.id != other.id
            && self.from == other.to
            && self.to == other.from
            && self.weight == other.weight
    }
}

/// Structural facts re-derived after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphProperties {
    pub directed: bool,
    pub weighted: bool,
    pub self_looping: bool,
    pub connected: bool,
    pub connection_degree: usize,
    pub negative_weights: bool,
    pub negative_cycles: bool,
}

impl Default for GraphProperties {
    /// The properties of an empty graph.
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
            self_looping: false,
            connected: true,
            connection_degree: 1,
            negative_weights: false,
            negative_cycles: false,
        }
    }
}
