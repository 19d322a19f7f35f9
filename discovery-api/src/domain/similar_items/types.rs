//! Core types for the similar-items domain.

/// Lifecycle state of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Published and usable; the only state similar-item results may show.
    Active,
    Draft,
    Deleted,
}

/// Catalog item record as exposed by the host's item-lookup capability.
///
/// Carries the fields the post-filters need plus the free text the
/// similarity search runs over.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub id: String,
    /// Tenant boundary. Catalogs sharing one storage keep their sites
    /// invisible to each other.
    pub site_id: String,
    /// Type tag (e.g. `dataset`); only same-type items are comparable.
    pub item_type: String,
    pub state: ItemState,
    /// Private items never show up in similarity results, even for callers
    /// who could read them directly.
    pub private: bool,
    /// Owning organization, when the item belongs to one.
    pub owner_org: Option<String>,
    pub title: String,
    pub notes: Option<String>,
}

impl CatalogItem {
    /// Free text the similarity search compares items by.
    pub fn search_text(&self) -> String {
        match &self.notes {
            Some(notes) => format!("{} {}", self.title, notes),
            None => self.title.clone(),
        }
    }
}

/// One hit from the catalog's similar-text search.
#[derive(Debug, Clone)]
pub struct SimilarHit {
    pub item_id: String,
    /// Engine-specific relevance, larger means more similar.
    pub relevance: f64,
}
