use axum::{
    Router, http::StatusCode, middleware::from_fn, response::IntoResponse, routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{cors::create_cors_layer, request_id::request_id_middleware},
    state::ApiState,
    topic,
};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", topic::routes())
        .fallback(handler_404)
}

/// Router with state and the standard middleware stack applied
pub fn app(state: ApiState, allowed_origins: &[String]) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_id_middleware))
        .layer(create_cors_layer(allowed_origins))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
