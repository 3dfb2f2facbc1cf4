use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    errors::GraphError,
    graph::WeightedGraph,
    shortest_path::{self, ShortestPaths},
};

/// Cloneable handle that puts a [`WeightedGraph`] behind a reader-writer lock.
///
/// The graph itself has no internal synchronization. Path queries take the
/// read side, so they may overlap each other but never a mutation.
#[derive(Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<WeightedGraph>>,
}

impl SharedGraph {
    pub fn new(graph: WeightedGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, WeightedGraph> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, WeightedGraph> {
        self.inner.write()
    }

    pub fn dijkstra(&self, source: i64, use_node_weights: bool) -> Result<ShortestPaths, GraphError> {
        shortest_path::dijkstra(&self.inner.read(), source, use_node_weights)
    }

    pub fn bellman_ford(
        &self,
        source: i64,
        use_node_weights: bool,
    ) -> Result<ShortestPaths, GraphError> {
        shortest_path::bellman_ford(&self.inner.read(), source, use_node_weights)
    }

    /// Unwraps the graph if this is the last handle.
    pub fn try_into_inner(self) -> Result<WeightedGraph, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
