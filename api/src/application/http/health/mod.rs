use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use krishiseer_core::domain::health::ports::HealthCheckService;
use serde_json::json;

use super::server::app_state::AppState;

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.health().await {
        Ok(latency_ms) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "database_latency_ms": latency_ms,
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unhealthy" })),
        ),
    }
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.readness().await {
        Ok(status) if status.reachable => (StatusCode::OK, Json(json!(status))).into_response(),
        Ok(status) => (StatusCode::SERVICE_UNAVAILABLE, Json(json!(status))).into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{root_path}/health"), get(health))
        .route(&format!("{root_path}/health/ready"), get(ready))
}
