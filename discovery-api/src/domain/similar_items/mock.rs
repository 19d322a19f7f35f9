//! Mock catalog implementation for testing.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::traits::{ItemCatalog, Result, SimilaritySearch};
use super::types::{CatalogItem, SimilarHit};

/// Mock catalog backed by an in-memory HashMap, with token-overlap
/// similarity.
///
/// Deliberately unfiltered, like a real engine: hits include the reference
/// item itself and items of any site, type, state or visibility. Keeping
/// those out of results is the finder's job, and these tests rely on the
/// mock not doing it for them.
#[derive(Clone, Default)]
pub struct MockCatalog {
    items: Arc<RwLock<HashMap<String, CatalogItem>>>,
}

#[allow(dead_code)]
impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add initial items to the catalog.
    pub fn with_items(self, items: Vec<CatalogItem>) -> Self {
        {
            let mut map = self.items.write().unwrap();
            for item in items {
                map.insert(item.id.clone(), item);
            }
        }
        self
    }

    pub fn insert(&self, item: CatalogItem) {
        self.items.write().unwrap().insert(item.id.clone(), item);
    }

    /// Get the current number of items.
    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[async_trait]
impl ItemCatalog for MockCatalog {
    async fn get_item(&self, item_id: &str) -> Result<Option<CatalogItem>> {
        Ok(self.items.read().unwrap().get(item_id).cloned())
    }
}

#[async_trait]
impl SimilaritySearch for MockCatalog {
    async fn find_similar(
        &self,
        reference_text: &str,
        candidate_hint: usize,
    ) -> Result<Vec<SimilarHit>> {
        let reference_tokens = tokenize(reference_text);

        let items = self.items.read().unwrap();
        let mut hits: Vec<SimilarHit> = items
            .values()
            .filter_map(|item| {
                let overlap = tokenize(&item.search_text())
                    .intersection(&reference_tokens)
                    .count();
                (overlap > 0).then(|| SimilarHit {
                    item_id: item.id.clone(),
                    relevance: overlap as f64,
                })
            })
            .collect();

        // Best first, id as tie-break so assertions stay stable.
        hits.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
        hits.truncate(candidate_hint);

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::similar_items::types::ItemState;

    fn make_item(id: &str, title: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            site_id: "site-a".to_string(),
            item_type: "dataset".to_string(),
            state: ItemState::Active,
            private: false,
            owner_org: None,
            title: title.to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn get_item_returns_inserted_items() {
        let catalog = MockCatalog::new().with_items(vec![make_item("d1", "cat dog")]);

        let item = catalog.get_item("d1").await.unwrap();
        assert_eq!(item.unwrap().title, "cat dog");

        assert!(catalog.get_item("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_similar_orders_by_overlap_and_includes_everything() {
        let catalog = MockCatalog::new().with_items(vec![
            make_item("d1", "cat dog wolf"),
            make_item("d2", "cat dog"),
            make_item("d3", "cat"),
            make_item("d4", "dolphin"),
        ]);

        let hits = catalog.find_similar("cat dog wolf", 10).await.unwrap();

        let ids: Vec<&str> = hits.iter().map(|h| h.item_id.as_str()).collect();
        // The reference's own record is a hit too; "dolphin" shares nothing.
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
    }

    #[tokio::test]
    async fn find_similar_respects_candidate_hint() {
        let catalog = MockCatalog::new().with_items(vec![
            make_item("d1", "cat dog wolf"),
            make_item("d2", "cat dog"),
            make_item("d3", "cat"),
        ]);

        let hits = catalog.find_similar("cat dog wolf", 2).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].item_id, "d1");
    }
}
