use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

/// Assemble the service router: one sub-router per feature, wrapped with
/// CORS and request tracing.
pub fn create(app_state: AppState) -> Router {
    // Suggestion boxes call these endpoints straight from host pages, which
    // may live on another origin.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(|| async { "discovery-api" }))
        .nest("/suggestions", routes::suggestions::router())
        .nest("/queries", routes::queries::router())
        .nest("/similar-items", routes::similar::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
