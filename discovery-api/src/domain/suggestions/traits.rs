//! Trait definitions for the suggestion domain.
//!
//! These traits enable dependency injection and easy testing through mocking.

use async_trait::async_trait;

/// Error type for suggestion operations.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    /// The storage backend misbehaved. Not retried here; whether the
    /// triggering request may fail on a lost log entry is the caller's call.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Malformed input, rejected before any storage work happens.
    #[error("Invalid suggestion request: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for SuggestionError {
    fn from(e: sqlx::Error) -> Self {
        SuggestionError::Persistence(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SuggestionError>;

/// Store of every query users have searched with, plus the text-search
/// index over it.
///
/// Abstracts database operations for testing without a real database.
#[async_trait]
pub trait SearchQueryRepository: Send + Sync {
    /// Create the query table if it is missing and rebuild the text-search
    /// index for the language the store was constructed with.
    ///
    /// Idempotent. Always leaves exactly one index, dropping any previous
    /// one of the same name so a language change takes effect.
    async fn initialize(&self) -> Result<()>;

    /// Append one query record and make it durable immediately.
    ///
    /// Duplicates are expected; repeated texts are the frequency signal the
    /// ranking tie-break feeds on. Empty or whitespace-only text is rejected.
    ///
    /// Returns the id of the new record.
    async fn append(&self, text: &str) -> Result<i32>;

    /// Distinct stored query texts matching at least one of `terms`,
    /// ordered by descending relevance rank with occurrence count as the
    /// tie-break, thresholded at `min_rank` and truncated to `limit`.
    ///
    /// `terms` are plain tokens; implementations neutralize any characters
    /// their match syntax assigns meaning to. `limit` has already been
    /// validated as non-negative by the caller.
    async fn suggest(&self, terms: &[String], limit: i64, min_rank: f32) -> Result<Vec<String>>;
}
