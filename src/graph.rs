//! Graph entities and the store that owns them.

mod store;
mod types;

pub use store::WeightedGraph;
pub use types::{Edge, GraphProperties, Node};
