//! TMDB credit provider for costar
//!
//! Implements the core [`CreditProvider`](costar::CreditProvider) trait
//! over the themoviedb.org v3 HTTP API:
//!
//! - `GET /person/{id}/movie_credits` — a person's movie credits, filtered
//!   to a rating threshold
//! - `GET /movie/{id}/credits` — a movie's billed cast, exclusion applied
//!   before limiting
//!
//! The credential is an explicit constructor argument; there is no
//! process-global configuration.
//!
//! # Example
//! ```no_run
//! use costar_tmdb::TmdbClient;
//!
//! let client = TmdbClient::new("my-api-key");
//! ```

pub mod client;
pub mod models;

pub use client::{TmdbClient, DEFAULT_BASE_URL};
