//! PostgreSQL repository implementation for logged search queries.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::suggestions::language::TextSearchLanguage;
use crate::domain::suggestions::traits::{Result, SearchQueryRepository, SuggestionError};

/// Table holding one row per performed search.
const TABLE: &str = "discovery_search_queries";
/// Full-text index over the logged query texts.
const TS_INDEX: &str = "discovery_search_queries_ts_idx";

/// PostgreSQL-backed search query store.
///
/// Matches and ranks suggestions with a GIN-indexed `to_tsvector` /
/// `to_tsquery` pair. The text-search language is fixed at construction so
/// the index expression and every ranking expression stay identical; the
/// planner only uses the index when they do.
#[derive(Clone)]
pub struct PgSearchQueryRepository {
    pool: PgPool,
    language: TextSearchLanguage,
}

impl PgSearchQueryRepository {
    pub fn new(pool: PgPool, language: TextSearchLanguage) -> Self {
        Self { pool, language }
    }
}

/// Strip everything `to_tsquery` assigns meaning to (`&`, `|`, `!`, `:`,
/// parens, quotes), keeping letters and digits only. `None` when nothing
/// survives.
fn sanitize_term(term: &str) -> Option<String> {
    let cleaned: String = term.chars().filter(|c| c.is_alphanumeric()).collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// OR-combined `to_tsquery` input built from the raw terms, or `None` when
/// no term survives sanitation.
fn tsquery_input(terms: &[String]) -> Option<String> {
    let sanitized: Vec<String> = terms.iter().filter_map(|term| sanitize_term(term)).collect();
    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized.join(" | "))
    }
}

fn create_table_sql() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {TABLE} (
            id SERIAL PRIMARY KEY,
            q TEXT NOT NULL
        )
        "#
    )
}

fn create_index_sql(language: &TextSearchLanguage) -> String {
    format!("CREATE INDEX {TS_INDEX} ON {TABLE} USING GIN (to_tsvector('{language}', q))")
}

/// Three stages: the inner query collects matching texts with their
/// occurrence counts, so `ts_rank` only runs on rows that already matched;
/// the middle one ranks and orders them; the outer one applies the rank
/// threshold without recomputing `ts_rank`.
fn suggest_sql(language: &TextSearchLanguage) -> String {
    format!(
        r#"
        SELECT q FROM (
            SELECT
                matched.q,
                ts_rank(to_tsvector('{language}', matched.q), to_tsquery('{language}', $1)) AS rank,
                matched.occurrences
            FROM (
                SELECT q, COUNT(q) AS occurrences
                FROM {TABLE}
                WHERE to_tsvector('{language}', q) @@ to_tsquery('{language}', $1)
                GROUP BY q
            ) AS matched
            ORDER BY rank DESC, occurrences DESC
        ) AS ranked
        WHERE rank >= $2
        LIMIT $3
        "#
    )
}

#[async_trait]
impl SearchQueryRepository for PgSearchQueryRepository {
    async fn initialize(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(&create_table_sql()).execute(&mut *tx).await?;

        // Recreated from scratch so a language change takes effect.
        sqlx::query(&format!("DROP INDEX IF EXISTS {TS_INDEX}"))
            .execute(&mut *tx)
            .await?;
        sqlx::query(&create_index_sql(&self.language))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(language = %self.language, "initialized search query store");
        Ok(())
    }

    async fn append(&self, text: &str) -> Result<i32> {
        if text.trim().is_empty() {
            return Err(SuggestionError::Validation(
                "query text must not be empty".to_string(),
            ));
        }

        let id: i32 =
            sqlx::query_scalar(&format!("INSERT INTO {TABLE} (q) VALUES ($1) RETURNING id"))
                .bind(text)
                .fetch_one(&self.pool)
                .await?;

        Ok(id)
    }

    async fn suggest(&self, terms: &[String], limit: i64, min_rank: f32) -> Result<Vec<String>> {
        let input = match tsquery_input(terms) {
            Some(input) => input,
            // Nothing matchable survived sanitation; skip the round-trip.
            None => return Ok(Vec::new()),
        };

        let suggestions = sqlx::query_scalar(&suggest_sql(&self.language))
            .bind(&input)
            .bind(min_rank)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(suggestions)
    }
}
