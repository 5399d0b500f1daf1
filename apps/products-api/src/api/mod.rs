//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(db: MockDatabase) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgres://localhost/products"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: db.into_connection(),
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_is_always_ok() {
        let state = state(MockDatabase::new(DatabaseBackend::Postgres));

        let (status, body) = get(routes(&state), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "products_api");
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let row = BTreeMap::from([("?column?", Value::Int(Some(1)))]);
        let state = state(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row]]),
        );

        let (status, body) = get(routes(&state), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"]["database"], "up");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let state = state(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("connection refused".to_string())]),
        );

        let (status, body) = get(routes(&state), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["ready"], false);
        assert_eq!(body["checks"]["database"], "down");
    }
}
