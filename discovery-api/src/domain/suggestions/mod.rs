//! Search suggestions - completing new searches from queries users already ran.
//!
//! Every search the host serves gets its query string appended to a log
//! table; suggestion requests run a full-text match over that log and
//! return the best previously-searched queries for the typed prefix:
//!
//! - **Matching** via a GIN-indexed PostgreSQL `to_tsvector` / `to_tsquery`
//!   pair, OR-combining the input terms
//! - **Ranking** via `ts_rank`, with the occurrence count of the exact
//!   query text as tie-break
//! - **Thresholding** on a minimum rank, applied after ranking
//!
//! # Architecture
//!
//! The feature is built around a trait abstraction for testability:
//!
//! - [`SearchQueryRepository`] - query log storage and ranking
//!   (PostgreSQL, mocks)
//!
//! # Example
//!
//! ```ignore
//! use discovery_api::domain::suggestions::{SuggestionService, TextSearchLanguage};
//! use discovery_api::domain::suggestions::repository::PgSearchQueryRepository;
//!
//! let language = TextSearchLanguage::resolve(settings.suggestions.language.as_deref())?;
//! let repository = PgSearchQueryRepository::new(pool, language);
//! repository.initialize().await?;
//!
//! let service = SuggestionService::with_defaults(repository);
//! service.log("cat dog").await?;
//! let suggestions = service.suggest(&terms, Some(10), None).await?;
//! ```

mod language;
mod service;
mod traits;

pub mod repository;

// Re-export main types
pub use language::{InvalidLanguage, TextSearchLanguage};
pub use service::{SuggestionConfig, SuggestionService};
pub use traits::{SearchQueryRepository, SuggestionError};
