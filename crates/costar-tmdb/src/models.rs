//! Raw TMDB response models
//!
//! These mirror the upstream payload shapes and are validated at this
//! boundary: fields the core requires are mandatory here, so a malformed
//! payload fails decoding with a clear error instead of propagating
//! missing data into graph logic. Fields that are legitimately absent
//! upstream (collections mixed into a credits list, movies without cast
//! data) stay optional and are resolved by the mapping layer.

use serde::Deserialize;

/// Response of `GET /person/{id}/movie_credits`
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCreditsResponse {
    /// Credits held in a cast role. Absent for some malformed upstream
    /// records; treated as empty.
    #[serde(default)]
    pub cast: Option<Vec<RawPersonCredit>>,
}

/// One entry of a person's credit list
///
/// Collections appear in this list without `title`/`vote_average`; they
/// carry no cast data and are dropped during mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPersonCredit {
    pub id: u64,
    pub title: Option<String>,
    pub vote_average: Option<f64>,
}

/// Response of `GET /movie/{id}/credits`
#[derive(Debug, Clone, Deserialize)]
pub struct MovieCreditsResponse {
    /// Billed cast in the provider's native billing order. Absent when the
    /// id refers to a collection; treated as empty.
    #[serde(default)]
    pub cast: Option<Vec<RawCastMember>>,
}

/// One billed cast member
#[derive(Debug, Clone, Deserialize)]
pub struct RawCastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub credit_id: Option<String>,
    pub order: u32,
}
