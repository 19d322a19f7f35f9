use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{app_state::AppState, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(suggest))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestParams {
    /// Partial query as typed so far; split on whitespace into terms.
    q: String,
    limit: Option<i32>,
    min_score: Option<f32>,
}

#[instrument(name = "GET /suggestions", skip(app_state))]
async fn suggest(
    State(app_state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let terms: Vec<String> = params.q.split_whitespace().map(str::to_string).collect();

    let suggestions = app_state
        .suggestions
        .suggest(&terms, params.limit, params.min_score)
        .await?;

    Ok(Json(suggestions))
}
