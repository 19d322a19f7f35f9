//! Discovery features for a content-search host: suggestions completed from
//! previously searched queries, backed by a PostgreSQL full-text index, and
//! similar-item lookup over the host catalog's search engine.

pub mod app_state;
pub mod config;
pub mod domain;
pub mod router;
mod routes;

pub use app_state::AppState;
