//! Core identifier types for the co-actor graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-assigned identifier for a person
///
/// Opaque and globally unique within one provider; kept as a string because
/// the provider's id space is not ours to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        PersonId(id)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        PersonId(id.to_string())
    }
}

/// Provider-assigned identifier for a movie credit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        MovieId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        MovieId(id)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId(id.to_string())
    }
}
