use std::sync::Arc;

use crate::domain::similar_items::SimilarItemsService;
use crate::domain::suggestions::repository::PgSearchQueryRepository;
use crate::domain::suggestions::SuggestionService;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub suggestions: Arc<SuggestionService<PgSearchQueryRepository>>,
    similar_items: Option<SimilarItemsService>,
}

impl AppState {
    pub fn new(suggestions: SuggestionService<PgSearchQueryRepository>) -> Self {
        Self {
            suggestions: Arc::new(suggestions),
            similar_items: None,
        }
    }

    /// Wire up the similar-items feature. The catalog adapters behind the
    /// service belong to the embedding host; without them the similar-items
    /// route answers 503.
    pub fn with_similar_items(mut self, similar_items: SimilarItemsService) -> Self {
        self.similar_items = Some(similar_items);
        self
    }

    pub fn similar_items(&self) -> Option<&SimilarItemsService> {
        self.similar_items.as_ref()
    }
}
