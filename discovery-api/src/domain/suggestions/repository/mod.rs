//! Search query store implementations.

#[cfg(test)]
mod mock;
mod postgres;

#[cfg(test)]
pub use mock::MockSearchQueryRepository;
pub use postgres::PgSearchQueryRepository;
