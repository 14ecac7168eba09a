use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use contracts::ping::PingResponse;

/// GET /
pub async fn root() {}

/// GET /ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

/// GET /surveys
pub async fn list_surveys(State(surveys): State<Arc<Vec<String>>>) -> Json<Vec<String>> {
    Json(surveys.as_ref().clone())
}
