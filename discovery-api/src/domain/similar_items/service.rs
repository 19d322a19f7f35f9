//! Similar-item lookup with tenancy and visibility post-filtering.

use std::sync::Arc;

use super::traits::{ItemCatalog, Result, SimilaritySearch};
use super::types::ItemState;

/// Result cap applied when the caller does not pass one.
const DEFAULT_MAX_NUM: usize = 5;

/// How many candidates to request from the engine: headroom for the
/// reference item's own record plus candidates the post-filters drop.
fn candidate_hint(max_num: usize) -> usize {
    max_num.saturating_mul(2).saturating_add(1)
}

/// Finds catalog items whose text resembles a reference item's.
///
/// Delegates the actual matching to the host catalog's search engine via
/// [`SimilaritySearch`] and owns everything the engine does not: resolving
/// the reference item, dropping the reference from its own results, and
/// filtering hits down to items the host may show next to it.
#[derive(Clone)]
pub struct SimilarItemsService {
    catalog: Arc<dyn ItemCatalog>,
    search: Arc<dyn SimilaritySearch>,
}

impl SimilarItemsService {
    pub fn new(catalog: Arc<dyn ItemCatalog>, search: Arc<dyn SimilaritySearch>) -> Self {
        Self { catalog, search }
    }

    /// Ids of up to `max_num` items similar to `item_id`, best match first.
    ///
    /// Regardless of textual similarity, a result never contains: the
    /// reference item itself, items of another site or another type than
    /// the reference, items outside the active state, or private items.
    /// An unknown `item_id` yields an empty list, not an error.
    ///
    /// Candidates are fetched in a single round; when the filters drop more
    /// than the headroom covers, fewer than `max_num` ids come back.
    pub async fn get_similar(
        &self,
        item_id: &str,
        max_num: Option<usize>,
    ) -> Result<Vec<String>> {
        let max_num = max_num.unwrap_or(DEFAULT_MAX_NUM);
        if max_num == 0 {
            return Ok(vec![]);
        }

        let reference = match self.catalog.get_item(item_id).await? {
            Some(item) => item,
            None => return Ok(vec![]),
        };

        let hits = self
            .search
            .find_similar(&reference.search_text(), candidate_hint(max_num))
            .await?;

        let mut similar = Vec::with_capacity(max_num);
        for hit in hits {
            if hit.item_id == reference.id {
                continue;
            }

            // A hit the catalog no longer resolves is skipped, not an error;
            // engines lag behind deletions.
            let item = match self.catalog.get_item(&hit.item_id).await? {
                Some(item) => item,
                None => continue,
            };

            let visible = item.site_id == reference.site_id
                && item.item_type == reference.item_type
                && item.state == ItemState::Active
                && !item.private;
            if !visible {
                continue;
            }

            similar.push(item.id);
            if similar.len() == max_num {
                break;
            }
        }

        Ok(similar)
    }
}
