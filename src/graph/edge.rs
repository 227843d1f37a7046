//! Edge implementation for the co-actor graph
//!
//! An edge records one observed co-appearance event. The store keeps every
//! insertion as-is, including repeats and reversed pairs; the canonical
//! (sorted) pair is only used when collapsing the list into weighted links
//! at export time.

use super::types::PersonId;
use serde::{Deserialize, Serialize};

/// One co-appearance event between two people
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: PersonId,
    pub target: PersonId,
}

impl Edge {
    pub fn new(source: PersonId, target: PersonId) -> Self {
        Edge { source, target }
    }

    /// The unordered pair, normalized by lexicographic sort
    ///
    /// `(a, b)` and `(b, a)` canonicalize to the same pair, which is the
    /// grouping key for export-time weighting.
    pub fn canonical(&self) -> (&PersonId, &PersonId) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }
}
