//! Mock repository implementation for testing.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::suggestions::traits::{Result, SearchQueryRepository, SuggestionError};

/// Mock search query store backed by an in-memory append log.
///
/// Ranking approximates the database ranker deterministically: every
/// distinct matched term contributes 0.1 rank, ties break on occurrence
/// count and then on the text itself so assertions stay stable.
#[derive(Clone, Default)]
pub struct MockSearchQueryRepository {
    queries: Arc<RwLock<Vec<String>>>,
}

#[allow(dead_code)]
impl MockSearchQueryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the log with initial queries.
    pub fn with_queries(self, queries: Vec<&str>) -> Self {
        {
            let mut log = self.queries.write().unwrap();
            log.extend(queries.into_iter().map(str::to_string));
        }
        self
    }

    /// Number of logged queries, duplicates included.
    pub fn len(&self) -> usize {
        self.queries.read().unwrap().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.queries.read().unwrap().is_empty()
    }

    /// All logged queries in append order (for test assertions).
    pub fn all_queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

/// 0.1 per distinct matched term, case-insensitive whole-token matches.
fn rank_against(text: &str, terms: &[String]) -> f32 {
    let tokens: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    let matched = terms
        .iter()
        .filter(|term| tokens.contains(&term.to_lowercase()))
        .count();
    matched as f32 * 0.1
}

#[async_trait]
impl SearchQueryRepository for MockSearchQueryRepository {
    async fn initialize(&self) -> Result<()> {
        // Nothing to build; repeated calls stay harmless like the real one.
        Ok(())
    }

    async fn append(&self, text: &str) -> Result<i32> {
        if text.trim().is_empty() {
            return Err(SuggestionError::Validation(
                "query text must not be empty".to_string(),
            ));
        }

        let mut log = self.queries.write().unwrap();
        log.push(text.to_string());
        Ok(log.len() as i32)
    }

    async fn suggest(&self, terms: &[String], limit: i64, min_rank: f32) -> Result<Vec<String>> {
        let log = self.queries.read().unwrap();

        let mut occurrences: HashMap<&str, i64> = HashMap::new();
        for q in log.iter() {
            *occurrences.entry(q.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, f32, i64)> = occurrences
            .into_iter()
            .map(|(q, count)| (q, rank_against(q, terms), count))
            .filter(|(_, rank, _)| *rank > 0.0 && *rank >= min_rank)
            .collect();

        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.2.cmp(&a.2))
                .then(a.0.cmp(b.0))
        });

        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .map(|(q, _, _)| q.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_keeps_duplicates() {
        let repo = MockSearchQueryRepository::new();

        repo.append("cat dog").await.unwrap();
        repo.append("cat dog").await.unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.all_queries(), vec!["cat dog", "cat dog"]);
    }

    #[tokio::test]
    async fn append_rejects_blank_text() {
        let repo = MockSearchQueryRepository::new();

        let err = repo.append("   ").await.unwrap_err();
        assert!(matches!(err, SuggestionError::Validation(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn suggest_ranks_by_matched_terms_then_popularity() {
        let repo = MockSearchQueryRepository::new().with_queries(vec![
            "cat dog", "cat fish", "cat fish", "bird",
        ]);

        let terms = vec!["cat".to_string(), "dog".to_string()];
        let suggestions = repo.suggest(&terms, 10, 0.0).await.unwrap();

        // "cat dog" matches both terms, "cat fish" one, "bird" none.
        assert_eq!(suggestions, vec!["cat dog", "cat fish"]);
    }

    #[tokio::test]
    async fn suggest_applies_min_rank_and_limit() {
        let repo = MockSearchQueryRepository::new().with_queries(vec![
            "cat dog", "cat fish", "cat mouse",
        ]);

        let terms = vec!["cat".to_string(), "dog".to_string()];
        let above_threshold = repo.suggest(&terms, 10, 0.15).await.unwrap();
        assert_eq!(above_threshold, vec!["cat dog"]);

        let truncated = repo.suggest(&terms, 2, 0.0).await.unwrap();
        assert_eq!(truncated.len(), 2);
        assert_eq!(truncated[0], "cat dog");
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let repo = MockSearchQueryRepository::new().with_queries(vec!["cat"]);

        repo.initialize().await.unwrap();
        repo.initialize().await.unwrap();

        assert_eq!(repo.len(), 1);
    }
}
