pub(crate) mod error;
pub(crate) mod queries;
pub(crate) mod similar;
pub(crate) mod suggestions;

pub(crate) use error::ApiError;
