//! Node implementation for the co-actor graph
//!
//! A node is one person. Identity is the provider-assigned id alone; the
//! display name and credit count ride along but never participate in
//! equality or hashing.

use super::types::PersonId;
use serde::{Deserialize, Serialize};

/// A person in the co-actor graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Provider-assigned identifier, the dedup key
    pub id: PersonId,

    /// Display name, sanitized of field delimiters before insertion
    pub name: String,

    /// Number of qualifying credits at insertion time; never refreshed
    pub total_movies: u32,
}

impl Node {
    pub fn new(id: PersonId, name: impl Into<String>, total_movies: u32) -> Self {
        Node {
            id,
            name: name.into(),
            total_movies,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = Node::new(PersonId::new("5064"), "Meryl Streep", 2);
        assert_eq!(node.id, PersonId::new("5064"));
        assert_eq!(node.name, "Meryl Streep");
        assert_eq!(node.total_movies, 2);
    }

    #[test]
    fn test_node_identity_is_id_only() {
        let a = Node::new(PersonId::new("5064"), "Meryl Streep", 2);
        let b = Node::new(PersonId::new("5064"), "M. Streep", 9);
        let c = Node::new(PersonId::new("504"), "Meryl Streep", 2);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
