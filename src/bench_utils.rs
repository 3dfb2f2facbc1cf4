use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    document::{EdgeRecord, GraphDocument, NodeRecord},
    graph::{GraphProperties, WeightedGraph},
};

/// A generated graph kept as plain records so it can be materialized many times.
#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphDataset {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the graph in one pass and derives its properties once.
    pub fn materialize(&self) -> WeightedGraph {
        let document = GraphDocument {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            properties: GraphProperties::default(),
        };
        let mut graph = document.into_graph().expect("generated dataset is valid");
        graph.refresh_properties();
        graph
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    Random { edges: usize },
}

/// Generates a dataset with node ids `1..=node_count` and edge weights drawn
/// uniformly from `weights`. The same seed always yields the same dataset.
pub fn generate_graph(
    shape: GraphShape,
    node_count: usize,
    weights: Range<f64>,
    seed: u64,
) -> GraphDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let nodes = (1..=node_count)
        .map(|idx| NodeRecord {
            id: idx as i64,
            name: format!("N{idx}"),
            weight: 0.0,
        })
        .collect();
    let pairs = match shape {
        GraphShape::Line => (1..node_count).map(|idx| (idx, idx + 1)).collect(),
        GraphShape::Star => (2..=node_count).map(|leaf| (1, leaf)).collect(),
        GraphShape::Grid2D { width, height } => grid_pairs(width, height, node_count),
        GraphShape::Random { edges } => random_pairs(&mut rng, node_count, edges),
    };
    let edges = pairs
        .into_iter()
        .enumerate()
        .map(|(idx, (from, to))| EdgeRecord {
            id: idx as i64 + 1,
            from_id: from as i64,
            to_id: to as i64,
            weight: sample_weight(&mut rng, &weights),
        })
        .collect();
    GraphDataset { nodes, edges }
}

fn grid_pairs(width: usize, height: usize, node_count: usize) -> Vec<(usize, usize)> {
    assert_eq!(
        width * height,
        node_count,
        "grid dimensions must match node count"
    );
    let mut pairs = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = y * width + x + 1;
            if x + 1 < width {
                pairs.push((base, base + 1));
            }
            if y + 1 < height {
                pairs.push((base, base + width));
            }
        }
    }
    pairs
}

fn random_pairs(rng: &mut StdRng, node_count: usize, edges: usize) -> Vec<(usize, usize)> {
    (0..edges)
        .map(|_| {
            let from = rng.gen_range(1..=node_count);
            let mut to = rng.gen_range(1..node_count);
            if to >= from {
                to += 1;
            }
            (from, to)
        })
        .collect()
}

fn sample_weight(rng: &mut StdRng, weights: &Range<f64>) -> f64 {
    if weights.is_empty() {
        weights.start
    } else {
        // whole numbers keep sums exact when distances are compared
        rng.gen_range(weights.clone()).round()
    }
}
