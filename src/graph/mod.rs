//! Co-actor graph implementation
//!
//! This module implements the accumulating co-appearance graph:
//! - Nodes identified by provider-assigned person ids, deduplicated on insert
//! - Append-only edge list; parallel edges are kept and collapsed into
//!   weighted links only at export time
//! - Degree analytics over the raw edge list
//! - Deterministic CSV and weighted-JSON export

pub mod edge;
pub mod export;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{MovieId, PersonId};
