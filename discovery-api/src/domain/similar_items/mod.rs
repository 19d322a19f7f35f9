//! Similar items - "more like this" over the host catalog's search engine.
//!
//! The textual matching itself belongs to whatever search engine the host
//! catalog runs; this module wraps it behind outbound ports and owns the
//! policy around it: resolving the reference item, dropping the reference
//! from its own results, and filtering hits down to same-site, same-type,
//! active, public items.
//!
//! # Architecture
//!
//! - [`SimilaritySearch`] - the engine's "find items with similar text"
//!   capability (adapters, mocks)
//! - [`ItemCatalog`] - item lookup by id (adapters, mocks)
//! - [`SimilarItemsService`] - the filtering policy on top of both

#[cfg(test)]
mod mock;
mod service;
mod traits;
mod types;

// Re-export main types
#[cfg(test)]
pub use mock::MockCatalog;
pub use service::SimilarItemsService;
pub use traits::{CatalogError, ItemCatalog, SimilaritySearch};
pub use types::{CatalogItem, ItemState, SimilarHit};
