//! Suggestion service: log performed searches, suggest them back.

use super::traits::{Result, SearchQueryRepository, SuggestionError};

/// Configuration for the suggestion service.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Number of suggestions returned when the caller does not say.
    pub default_limit: i32,
    /// Minimum relevance rank for a suggestion; 0 keeps every match.
    pub default_min_score: f32,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            default_min_score: 0.0,
        }
    }
}

/// Records the queries of performed searches and suggests them back for
/// new, partially typed input.
///
/// # Type Parameters
///
/// * `R` - SearchQueryRepository implementation for storage operations
///
/// # Examples
///
/// ```ignore
/// let service = SuggestionService::with_defaults(repository);
/// service.log("cat dog").await?;
/// let suggestions = service.suggest(&terms, None, None).await?;
/// ```
pub struct SuggestionService<R>
where
    R: SearchQueryRepository,
{
    repository: R,
    config: SuggestionConfig,
}

impl<R> SuggestionService<R>
where
    R: SearchQueryRepository,
{
    /// Create a new suggestion service.
    pub fn new(repository: R, config: SuggestionConfig) -> Self {
        Self { repository, config }
    }

    /// Create a suggestion service with default configuration.
    pub fn with_defaults(repository: R) -> Self {
        Self::new(repository, SuggestionConfig::default())
    }

    /// Record the query string of a search the host just served.
    ///
    /// Append-only: no dedup, no rate limiting. Repeats of the same text
    /// are exactly the popularity signal ranking feeds on later.
    pub async fn log(&self, text: &str) -> Result<()> {
        let id = self.repository.append(text).await?;
        tracing::debug!(id, "recorded search query");
        Ok(())
    }

    /// Suggest previously searched queries matching any of `terms`.
    ///
    /// Results come back ordered by relevance rank, ties broken by how
    /// often the exact query was searched before.
    ///
    /// # Arguments
    ///
    /// * `terms` - Tokens of the partial input; blank ones are dropped
    /// * `limit` - Maximum number of suggestions (None uses the default;
    ///   negative values are rejected, zero short-circuits to empty)
    /// * `min_score` - Rank threshold (None uses the default)
    pub async fn suggest(
        &self,
        terms: &[String],
        limit: Option<i32>,
        min_score: Option<f32>,
    ) -> Result<Vec<String>> {
        let limit = limit.unwrap_or(self.config.default_limit);
        if limit < 0 {
            return Err(SuggestionError::Validation(format!(
                "limit must not be negative (got {limit})"
            )));
        }
        let min_score = min_score.unwrap_or(self.config.default_min_score);

        let terms: Vec<String> = terms
            .iter()
            .map(|term| term.trim())
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect();
        if terms.is_empty() || limit == 0 {
            return Ok(vec![]);
        }

        self.repository
            .suggest(&terms, i64::from(limit), min_score)
            .await
    }
}
