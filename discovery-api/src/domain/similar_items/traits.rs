//! Outbound ports for the host catalog the similar-items feature runs against.

use async_trait::async_trait;

use super::types::{CatalogItem, SimilarHit};

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog similarity search failed: {0}")]
    Search(String),

    #[error("Catalog item lookup failed: {0}")]
    Lookup(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Outbound port for the catalog's similar-text search capability.
///
/// The engine behind it (whatever search index the deployment runs) is not
/// ours; adapters wrap it. Hits come back best-first and unfiltered - they
/// may include the reference item itself, other sites' items, drafts and
/// private items. Filtering is the finder's job.
#[async_trait]
pub trait SimilaritySearch: Send + Sync {
    /// Up to `candidate_hint` hits whose text resembles `reference_text`.
    async fn find_similar(
        &self,
        reference_text: &str,
        candidate_hint: usize,
    ) -> Result<Vec<SimilarHit>>;
}

/// Outbound port for item lookup by identifier.
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    /// The item record, or `None` when the id is unknown.
    async fn get_item(&self, item_id: &str) -> Result<Option<CatalogItem>>;
}
