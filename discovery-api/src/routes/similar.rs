use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{app_state::AppState, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/:item_id", get(similar_items))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimilarParams {
    max_num: Option<usize>,
}

#[instrument(name = "GET /similar-items/:item_id", skip(app_state))]
async fn similar_items(
    State(app_state): State<AppState>,
    Path(item_id): Path<String>,
    Query(params): Query<SimilarParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let service = app_state
        .similar_items()
        .ok_or_else(|| ApiError::service_unavailable("No catalog search backend configured"))?;

    let similar = service.get_similar(&item_id, params.max_num).await?;

    Ok(Json(similar))
}
