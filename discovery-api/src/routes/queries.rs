use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use tracing::instrument;

use crate::{app_state::AppState, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(log_query))
}

#[derive(Debug, Deserialize)]
struct LogQueryPayload {
    q: String,
}

/// Record the query string of a search the host just served.
///
/// Hosts should treat failures here as non-fatal: a lost log entry must
/// never fail the search that triggered it.
#[instrument(name = "POST /queries", skip(app_state))]
async fn log_query(
    State(app_state): State<AppState>,
    Json(payload): Json<LogQueryPayload>,
) -> Result<StatusCode, ApiError> {
    app_state.suggestions.log(&payload.q).await?;

    Ok(StatusCode::NO_CONTENT)
}
