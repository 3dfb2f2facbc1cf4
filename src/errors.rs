use std::path::PathBuf;

use thiserror::Error;

/// Error type for weighted graph operations.
///
/// Every variant is recoverable: the operation that produced it leaves the
/// graph in the state it had before the call.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{kind} id {id} already exists")]
    IdentifierConflict { kind: &'static str, id: i64 },
    #[error("edge {edge} references missing node {node}")]
    UnresolvedEndpoint { edge: i64, node: i64 },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),
    #[error("malformed document: {0}")]
    DocumentMalformed(String),
    #[error("negative cycle present, refusing to compute paths from node {origin}")]
    NegativeCycleBlocksComputation { origin: i64 },
    #[error("negative cycle detected after relaxing from node {origin}")]
    UnexpectedNegativeCycle { origin: i64 },
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub fn node_conflict(id: i64) -> Self {
        GraphError::IdentifierConflict { kind: "node", id }
    }

    pub fn edge_conflict(id: i64) -> Self {
        GraphError::IdentifierConflict { kind: "edge", id }
    }

    pub fn unresolved(edge: i64, node: i64) -> Self {
        GraphError::UnresolvedEndpoint { edge, node }
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GraphError::NotFound(msg.into())
    }

    pub fn malformed<T: Into<String>>(msg: T) -> Self {
        GraphError::DocumentMalformed(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        GraphError::Io(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}
