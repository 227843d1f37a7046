//! Costar — co-actor network builder
//!
//! Builds a co-appearance graph from a movie-metadata provider: starting
//! from one seed person, a bounded breadth-first expansion follows
//! "acted together in a highly-rated movie" relationships, accumulating a
//! deduplicated node/edge graph that is then exported as flat CSV files
//! and a weighted JSON document for visualization.
//!
//! # Architecture
//!
//! - [`graph`] — in-memory graph store: node dedup, append-only edges,
//!   degree analytics, CSV/JSON export.
//! - [`provider`] — the credit provider seam: typed records and the async
//!   trait the expansion engine drives. Implemented over HTTP by the
//!   `costar-tmdb` crate.
//! - [`expand`] — the frontier expansion engine: iterative widening over
//!   the store for a fixed number of rounds.
//!
//! # Example Usage
//!
//! ```rust
//! use costar::graph::{GraphStore, PersonId};
//!
//! let mut graph = GraphStore::new();
//! graph.add_node(PersonId::new("5064"), "Meryl Streep", 2);
//! graph.add_node(PersonId::new("504"), "Tilda Swinton", 1);
//! graph.add_edge(PersonId::new("5064"), PersonId::new("504"));
//!
//! assert_eq!(graph.total_nodes(), 2);
//! assert_eq!(graph.total_edges(), 1);
//! ```

#![warn(clippy::all)]

pub mod expand;
pub mod graph;
pub mod provider;

// Re-export main types for convenience
pub use expand::{sanitize_name, Expander, ExpansionConfig};
pub use graph::{Edge, GraphError, GraphResult, GraphStore, MovieId, Node, PersonId};
pub use provider::{CastMember, Credit, CreditProvider, ProviderError, ProviderResult};

/// Crate version string
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
