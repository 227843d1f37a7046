//! Deterministic export of the co-actor graph
//!
//! Two flat CSV files (nodes, edges) mirroring the store as-is, and one
//! weighted JSON document for visualization where parallel edges collapse
//! into links with a multiplicity weight.
//!
//! Exports are pure functions of store state: calling them before an
//! expansion finishes yields a partial but structurally valid file.

use super::store::{GraphResult, GraphStore};
use super::types::PersonId;
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

#[derive(Serialize)]
struct JsonNode<'a> {
    id: &'a PersonId,
    name: &'a str,
    movies: u32,
}

#[derive(Serialize)]
struct JsonLink<'a> {
    source: &'a PersonId,
    target: &'a PersonId,
    weight: usize,
}

/// Key order is observable in the output: `nodes` before `links`.
#[derive(Serialize)]
struct JsonGraph<'a> {
    nodes: Vec<JsonNode<'a>>,
    links: Vec<JsonLink<'a>>,
}

fn csv_writer(path: impl AsRef<Path>) -> GraphResult<csv::Writer<File>> {
    // Rows are raw comma-joined fields, never quoted or escaped: an
    // embedded delimiter is written as-is. Well-formed output relies on
    // names being sanitized before they reach the store.
    let writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)?;
    Ok(writer)
}

impl GraphStore {
    /// Write all nodes as CSV: header `id,name,total_movies`, one row per
    /// node in insertion order.
    pub fn write_nodes_file(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let mut writer = csv_writer(path)?;
        writer.write_record(["id", "name", "total_movies"])?;
        for node in self.nodes() {
            writer.write_record([
                node.id.as_str(),
                &node.name,
                &node.total_movies.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write all edges as CSV: header `source,target`, one row per raw
    /// insertion in insertion order, not deduplicated.
    pub fn write_edges_file(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let mut writer = csv_writer(path)?;
        writer.write_record(["source", "target"])?;
        for edge in self.edges() {
            writer.write_record([edge.source.as_str(), edge.target.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the full graph as pretty-printed JSON
    ///
    /// Nodes serialize as `{id, name, movies}`. Edges are grouped by their
    /// canonical (sorted) pair in first-seen order, and each link's weight
    /// is the number of raw insertions that mapped to that pair.
    pub fn write_graph_to_json(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let nodes = self
            .nodes()
            .map(|node| JsonNode {
                id: &node.id,
                name: &node.name,
                movies: node.total_movies,
            })
            .collect();

        let mut weights: IndexMap<(&PersonId, &PersonId), usize> = IndexMap::new();
        for edge in self.edges() {
            *weights.entry(edge.canonical()).or_default() += 1;
        }
        let links = weights
            .into_iter()
            .map(|((source, target), weight)| JsonLink {
                source,
                target,
                weight,
            })
            .collect();

        let graph = JsonGraph { nodes, links };
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &graph)?;
        Ok(())
    }
}
