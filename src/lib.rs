//! In-memory weighted graph with eagerly derived structural properties.
//!
//! Every mutation of a [`WeightedGraph`] re-runs the checks in [`algo`], so
//! [`GraphProperties`] never lags behind the nodes and edges. Shortest paths
//! come from [`shortest_path::dijkstra`] and [`shortest_path::bellman_ford`];
//! the latter refuses to run on graphs flagged with negative cycles.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod algo;
pub mod bench_utils;
pub mod client;
pub mod document;
pub mod errors;
pub mod graph;
pub mod safety;
pub mod shared;
pub mod shortest_path;

pub use crate::document::{EdgeRecord, GraphDocument, NodeRecord};
pub use crate::errors::GraphError;
pub use crate::graph::{Edge, GraphProperties, Node, WeightedGraph};
pub use crate::shared::SharedGraph;
pub use crate::shortest_path::{
    RunStatus, ShortestPaths, bellman_ford, dijkstra, format_path, reconstruct_path,
};
