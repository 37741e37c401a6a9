use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::repository::PacmanRepository;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    pacman_exists: bool,
    timestamp: i64,
}

// GET /health - Liveness probe with the current store state
pub async fn health_check(
    State(repo): State<PacmanRepository>,
) -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Mapped GET /health");

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pacman_exists: repo.get_player().is_some(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
