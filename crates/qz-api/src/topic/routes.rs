use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{ApiState, error::ApiError};

use super::model::{Topic, TopicPayload};

/// Create the topic routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/topics", get(get_all_topics).post(create_topic))
        .route(
            "/topics/{id}",
            get(get_topic_by_id).put(update_topic).delete(delete_topic),
        )
}

/// Get all topics
async fn get_all_topics(State(state): State<ApiState>) -> Json<Vec<Topic>> {
    Json(state.store.list().await)
}

/// Get topic by ID
async fn get_topic_by_id(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Topic>, ApiError> {
    state.store.get(id).await.map(Json).ok_or(ApiError::NotFound(id))
}

/// Create a new topic
async fn create_topic(
    State(state): State<ApiState>,
    Json(payload): Json<TopicPayload>,
) -> Result<Json<Topic>, ApiError> {
    let payload = payload.normalized();
    payload.validate()?;

    let topic = state.store.create(payload).await?;
    tracing::info!(id = topic.id, code = %topic.code, "Topic created");

    Ok(Json(topic))
}

/// Update an existing topic
async fn update_topic(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<TopicPayload>,
) -> Result<Json<Topic>, ApiError> {
    let payload = payload.normalized();
    payload.validate()?;

    let topic = state.store.update(id, payload).await?;
    tracing::info!(id, code = %topic.code, "Topic updated");

    Ok(Json(topic))
}

/// Delete a topic
async fn delete_topic(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    tracing::info!(id, "Topic deleted");

    Ok(StatusCode::NO_CONTENT)
}
