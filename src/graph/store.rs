//! In-memory co-actor graph storage
//!
//! Accumulation semantics, not a general mutable graph: nodes are inserted
//! once and never updated or removed, edges are appended unconditionally.
//! The store is populated by one expansion run and read-only afterwards.

use super::edge::Edge;
use super::node::Node;
use super::types::PersonId;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// Degree analytics were requested on a graph with no edges. Distinct
    /// from a successful empty result so callers can branch on it.
    #[error("graph has no edges")]
    NoEdges,

    #[error("invalid total_movies value: {0:?}")]
    InvalidMovieCount(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory co-actor graph
///
/// - `nodes`: insertion-ordered map keyed by person id. The map gives O(1)
///   dedup while preserving the exact first-insertion order that CSV export
///   exposes.
/// - `edges`: raw append-only list. Parallel and reversed insertions are
///   kept; they become link weights at export time.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: IndexMap<PersonId, Node>,
    edges: Vec<Edge>,
}

impl GraphStore {
    /// Create a new empty graph
    pub fn new() -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Hydrate a graph from previously exported nodes and edges CSV files
    ///
    /// Header rows are skipped. The `total_movies` column is optional so
    /// both the two-column and three-column node schemas load; when absent
    /// it defaults to 0.
    pub fn from_files(
        nodes_path: impl AsRef<Path>,
        edges_path: impl AsRef<Path>,
    ) -> GraphResult<Self> {
        let mut graph = GraphStore::new();

        let mut nodes = csv::Reader::from_path(nodes_path)?;
        for record in nodes.records() {
            let record = record?;
            let id = record.get(0).unwrap_or_default();
            let name = record.get(1).unwrap_or_default();
            let total_movies = match record.get(2).map(str::trim) {
                Some(raw) if !raw.is_empty() => raw
                    .parse()
                    .map_err(|_| GraphError::InvalidMovieCount(raw.to_string()))?,
                _ => 0,
            };
            graph.add_node(PersonId::new(id), name, total_movies);
        }

        let mut edges = csv::Reader::from_path(edges_path)?;
        for record in edges.records() {
            let record = record?;
            let source = PersonId::new(record.get(0).unwrap_or_default());
            let target = PersonId::new(record.get(1).unwrap_or_default());
            graph.add_edge(source, target);
        }

        Ok(graph)
    }

    /// Insert a node unless one with the same id already exists
    ///
    /// First writer wins: a duplicate id is a no-op even when the name or
    /// credit count differs. Never fails.
    pub fn add_node(&mut self, id: PersonId, name: impl Into<String>, total_movies: u32) {
        if self.nodes.contains_key(&id) {
            return;
        }
        let node = Node::new(id.clone(), name, total_movies);
        self.nodes.insert(id, node);
    }

    /// Append a co-appearance edge
    ///
    /// Unconditional: the store keeps duplicates and reversed pairs.
    /// Dedup/weighting happens only in the JSON export.
    pub fn add_edge(&mut self, source: PersonId, target: PersonId) {
        self.edges.push(Edge::new(source, target));
    }

    /// Whether a node with this id exists
    pub fn contains(&self, id: &PersonId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a node by id
    pub fn get_node(&self, id: &PersonId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Total number of nodes
    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of raw edge insertions
    pub fn total_edges(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Raw edge list in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every node at the maximum degree, with its degree
    ///
    /// Degree is the raw endpoint-occurrence count over the stored edge
    /// list: each edge contributes 1 to both endpoints, parallel edges
    /// count each time, and a self-loop contributes 2 to the same id.
    /// Ties all included.
    pub fn max_degree_nodes(&self) -> GraphResult<FxHashMap<PersonId, usize>> {
        if self.edges.is_empty() {
            return Err(GraphError::NoEdges);
        }

        let mut degrees: FxHashMap<PersonId, usize> = FxHashMap::default();
        for edge in &self.edges {
            *degrees.entry(edge.source.clone()).or_default() += 1;
            *degrees.entry(edge.target.clone()).or_default() += 1;
        }

        let max = degrees.values().copied().max().unwrap_or(0);
        degrees.retain(|_, degree| *degree == max);
        Ok(degrees)
    }
}
