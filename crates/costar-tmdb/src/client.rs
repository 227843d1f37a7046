//! TmdbClient — HTTP client for the TMDB v3 API
//!
//! Transport and mapping are split: `get_json` does one request and one
//! decode, the pure functions below turn raw payloads into core records.
//! No retry or rate-limit policy lives here; failures map to
//! [`ProviderError`] and the caller decides.

use async_trait::async_trait;
use costar::graph::{MovieId, PersonId};
use costar::provider::{CastMember, Credit, CreditProvider, ProviderError, ProviderResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{MovieCreditsResponse, PersonCreditsResponse};

/// Public TMDB v3 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// HTTP credit provider backed by themoviedb.org
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl TmdbClient {
    /// Create a client against the public TMDB endpoint.
    ///
    /// # Example
    /// ```no_run
    /// # use costar_tmdb::TmdbClient;
    /// let client = TmdbClient::new("my-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a different base URL (tests, mirrors).
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        TmdbClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Execute one GET and decode the JSON body.
    ///
    /// `language=en-US` goes on every call; it keeps upstream strings in
    /// one encoding for the row-based exports.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ProviderResult<T> {
        let url = format!(
            "{}{}?api_key={}&language=en-US",
            self.base_url, path, self.api_key
        );
        debug!(path, "tmdb request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response
                .json()
                .await
                .unwrap_or_else(|_| serde_json::json!({}));
            let msg = body
                .get("status_message")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown error");
            return Err(ProviderError::Connection(format!(
                "{} returned {}: {}",
                path, status, msg
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Payload(e.to_string()))
    }
}

/// Filter a raw credits payload down to qualifying credits.
///
/// Collection entries (no title or vote average) are dropped; with a
/// threshold, only credits whose vote average meets it survive. The
/// threshold is inclusive.
pub(crate) fn qualifying_credits(
    response: PersonCreditsResponse,
    min_rating: Option<f64>,
) -> Vec<Credit> {
    response
        .cast
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| {
            let title = raw.title?;
            let vote_avg = raw.vote_average?;
            if let Some(threshold) = min_rating {
                if vote_avg < threshold {
                    return None;
                }
            }
            Some(Credit {
                id: MovieId::new(raw.id.to_string()),
                title,
                vote_avg,
            })
        })
        .collect()
}

/// Reduce a raw cast payload to the billed cast the engine consumes.
///
/// Exclusion is applied before limiting, so an excluded prominent member
/// does not shrink the result below the limit. The payload's own billing
/// order is preserved, never re-sorted.
pub(crate) fn billed_cast(
    response: MovieCreditsResponse,
    limit: Option<usize>,
    exclude: &[PersonId],
) -> Vec<CastMember> {
    let mut cast: Vec<CastMember> = response
        .cast
        .unwrap_or_default()
        .into_iter()
        .map(|raw| CastMember {
            id: PersonId::new(raw.id.to_string()),
            name: raw.name,
            character: raw.character,
            credit_id: raw.credit_id,
            order: raw.order,
        })
        .filter(|member| !exclude.contains(&member.id))
        .collect();

    if let Some(limit) = limit {
        cast.truncate(limit);
    }
    cast
}

#[async_trait]
impl CreditProvider for TmdbClient {
    async fn credits_for_person(
        &self,
        person: &PersonId,
        min_rating: Option<f64>,
    ) -> ProviderResult<Vec<Credit>> {
        let response: PersonCreditsResponse = self
            .get_json(&format!("/person/{}/movie_credits", person))
            .await?;
        Ok(qualifying_credits(response, min_rating))
    }

    async fn cast_for_movie(
        &self,
        movie: &MovieId,
        limit: Option<usize>,
        exclude: &[PersonId],
    ) -> ProviderResult<Vec<CastMember>> {
        let response: MovieCreditsResponse = self
            .get_json(&format!("/movie/{}/credits", movie))
            .await?;
        Ok(billed_cast(response, limit, exclude))
    }
}
