//! Frontier expansion engine
//!
//! Drives the bounded breadth-first widening of the co-actor graph: seed
//! one person, then for a fixed number of rounds follow every frontier
//! member's qualifying credits to their top billed co-actors, adding nodes
//! and edges as they are discovered. Newly added node ids form the next
//! round's frontier.
//!
//! Execution is strictly sequential: one provider call at a time, frontier
//! processed in order. Insertion order is observable downstream (CSV row
//! order, first-writer-wins node dedup), so this is a semantic guarantee
//! and not just an implementation convenience.

use crate::graph::{GraphStore, PersonId};
use crate::provider::{CreditProvider, ProviderResult};
use tracing::{debug, info};

/// Tunables for one expansion run
#[derive(Debug, Clone)]
pub struct ExpansionConfig {
    /// Minimum vote average for a credit to qualify
    pub min_rating: f64,
    /// How many top billed cast members to take per movie
    pub cast_limit: usize,
    /// Number of widening rounds from the seed
    pub rounds: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        ExpansionConfig {
            min_rating: 8.0,
            cast_limit: 3,
            rounds: 3,
        }
    }
}

/// Strip characters that would corrupt row-based export from a display
/// name: the CSV field delimiter and line breaks.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ',' | '\n' | '\r'))
        .collect()
}

/// Frontier expansion engine over a credit provider
///
/// Owns nothing but a borrow of the provider; each [`run`](Self::run)
/// builds and returns a fresh graph.
pub struct Expander<'a, P: CreditProvider + ?Sized> {
    provider: &'a P,
    config: ExpansionConfig,
}

impl<'a, P: CreditProvider + ?Sized> Expander<'a, P> {
    pub fn new(provider: &'a P, config: ExpansionConfig) -> Self {
        Expander { provider, config }
    }

    /// Build a co-actor graph expanding outwards from the seed person
    ///
    /// The seed node's `total_movies` is its qualifying-credit count at
    /// seeding time. Expansion stops after the configured number of rounds
    /// or as soon as a round discovers no new people. Provider errors
    /// propagate out unrecovered; the caller decides whether to retry the
    /// whole run.
    pub async fn run(&self, seed: PersonId, seed_name: &str) -> ProviderResult<GraphStore> {
        let min_rating = Some(self.config.min_rating);
        let mut graph = GraphStore::new();

        let seed_credits = self
            .provider
            .credits_for_person(&seed, min_rating)
            .await?;
        graph.add_node(seed.clone(), sanitize_name(seed_name), seed_credits.len() as u32);

        let mut frontier = vec![seed];
        for round in 0..self.config.rounds {
            if frontier.is_empty() {
                break;
            }
            info!(round, frontier_size = frontier.len(), "expanding frontier");

            let mut next = Vec::new();
            for person in &frontier {
                let credits = self
                    .provider
                    .credits_for_person(person, min_rating)
                    .await?;
                debug!(person = %person, credits = credits.len(), "qualifying credits");

                for credit in &credits {
                    // A credit that is really a collection comes back with
                    // no cast and contributes nothing.
                    let cast = self
                        .provider
                        .cast_for_movie(
                            &credit.id,
                            Some(self.config.cast_limit),
                            std::slice::from_ref(person),
                        )
                        .await?;
                    debug!(movie = %credit.id, cast = cast.len(), "billed cast");

                    for member in cast {
                        if !graph.contains(&member.id) {
                            let qualifying = self
                                .provider
                                .credits_for_person(&member.id, min_rating)
                                .await?
                                .len();
                            graph.add_node(
                                member.id.clone(),
                                sanitize_name(&member.name),
                                qualifying as u32,
                            );
                            next.push(member.id.clone());
                        }
                        // Always: repeated co-appearances become parallel
                        // edges here and link weights at export.
                        graph.add_edge(person.clone(), member.id.clone());
                    }
                }
            }
            frontier = next;
        }

        info!(
            nodes = graph.total_nodes(),
            edges = graph.total_edges(),
            "expansion finished"
        );
        Ok(graph)
    }
}
