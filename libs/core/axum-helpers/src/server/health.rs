use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use utoipa::ToSchema;

/// Liveness payload of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Up,
    Down,
}

/// Readiness payload of `GET /ready`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub ready: bool,
    /// Outcome per dependency, keyed by check name
    pub checks: BTreeMap<String, CheckStatus>,
}

/// A boxed dependency check; the error string is logged, never returned.
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs all `checks` concurrently.
///
/// Returns `200` when every check passes and `503` otherwise, with the
/// per-check status in the body either way.
///
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture)> = vec![(
///     "database",
///     Box::pin(async { check_health(&db).await.map_err(|e| e.to_string()) }),
/// )];
/// run_health_checks(checks).await
/// ```
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> (StatusCode, Json<ReadyResponse>) {
    let (names, futures): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(futures).await;

    let checks: BTreeMap<String, CheckStatus> = names
        .into_iter()
        .zip(results)
        .map(|(name, result)| {
            let status = match result {
                Ok(()) => CheckStatus::Up,
                Err(e) => {
                    tracing::error!(check = name, error = %e, "Readiness check failed");
                    CheckStatus::Down
                }
            };
            (name.to_string(), status)
        })
        .collect();

    let ready = checks.values().all(|status| *status == CheckStatus::Up);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadyResponse { ready, checks }))
}

async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// `GET /health`: always `200` while the process is serving requests.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_app_info() {
        let app = health_router(AppInfo {
            name: "products_api",
            version: "1.2.3",
        });

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "products_api");
        assert_eq!(body["version"], "1.2.3");
    }

    #[tokio::test]
    async fn test_all_checks_up_is_ready() {
        let checks: Vec<(&str, HealthCheckFuture)> = vec![("database", Box::pin(async { Ok(()) }))];

        let (status, Json(body)) = run_health_checks(checks).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ready);
        assert_eq!(body.checks["database"], CheckStatus::Up);
    }

    #[tokio::test]
    async fn test_failing_check_is_unavailable() {
        let checks: Vec<(&str, HealthCheckFuture)> = vec![
            ("database", Box::pin(async { Err("timeout".to_string()) })),
            ("disk", Box::pin(async { Ok(()) })),
        ];

        let (status, Json(body)) = run_health_checks(checks).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body.ready);
        assert_eq!(body.checks["database"], CheckStatus::Down);
        assert_eq!(body.checks["disk"], CheckStatus::Up);
    }
}
