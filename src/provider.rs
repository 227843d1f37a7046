//! Credit provider seam
//!
//! The expansion engine only needs two queries from the outside world:
//! "qualifying movie credits for a person" and "top billed cast for a
//! movie". This module defines the typed records and the async trait for
//! that seam; transports (HTTP, fixtures) live behind it.

use crate::graph::{MovieId, PersonId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One qualifying movie credit for a person
///
/// Transient: filtered against the rating threshold by the provider and
/// consumed by the engine, never stored in the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credit {
    /// Movie identifier
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Average vote for the movie
    pub vote_avg: f64,
}

/// One billed cast member of a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    /// Person identifier
    pub id: PersonId,
    /// Display name, unsanitized as returned by the provider
    pub name: String,
    /// Character played, when the provider reports one
    pub character: Option<String>,
    /// Provider-side credit identifier
    pub credit_id: Option<String>,
    /// Billing order; lower is more prominent
    pub order: u32,
}

/// Errors surfaced by a credit provider
///
/// Both variants are retryable by the caller; the engine propagates them
/// unrecovered.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The upstream call could not be completed (transport failure or
    /// non-success HTTP status)
    #[error("connection error: {0}")]
    Connection(String),

    /// The upstream response could not be decoded into the expected shape
    #[error("malformed payload: {0}")]
    Payload(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Query interface over a movie-metadata source
///
/// Implementations are pure queries with no state shared with the engine.
#[async_trait]
pub trait CreditProvider: Send + Sync {
    /// Movie credits for a person in a cast role
    ///
    /// When `min_rating` is given, only credits whose vote average meets
    /// the threshold are returned. Credits that are actually collections
    /// (no cast-bearing data) are skipped, not an error.
    async fn credits_for_person(
        &self,
        person: &PersonId,
        min_rating: Option<f64>,
    ) -> ProviderResult<Vec<Credit>>;

    /// Top billed cast of a movie
    ///
    /// `exclude` is applied before `limit`, and ordering respects the
    /// provider's native billing order. A movie without cast data yields
    /// an empty list.
    async fn cast_for_movie(
        &self,
        movie: &MovieId,
        limit: Option<usize>,
        exclude: &[PersonId],
    ) -> ProviderResult<Vec<CastMember>>;
}
