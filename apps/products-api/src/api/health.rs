//! Health check endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::ServiceUnavailableResponse, health_router, run_health_checks,
    HealthCheckFuture, ReadyResponse,
};
use database::postgres::check_health;

use crate::state::AppState;

/// `503` while PostgreSQL does not answer `SELECT 1`
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "All dependencies are up", body = ReadyResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    let app_info = state.config.app;

    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(health_router(app_info))
}
