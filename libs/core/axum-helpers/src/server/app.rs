use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// The resulting router serves:
/// - `apis` at the root (routes keep their own paths, e.g. `/products`)
/// - OpenAPI JSON at `/api-docs/openapi.json`
/// - Swagger UI, ReDoc, RapiDoc and Scalar at `/swagger-ui`, `/redoc`, `/rapidoc`, `/scalar`
/// - a JSON `404` for anything else
///
/// Every response goes through request tracing, security headers and
/// compression. CORS is added only when `server.cors_allowed_origins` is
/// non-empty.
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
pub fn create_router<T>(apis: Router, server: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match create_cors_layer(&server.cors_allowed_origins)? {
        Some(cors) => {
            info!(origins = ?server.cors_allowed_origins, "CORS enabled");
            router.layer(cors)
        }
        None => router,
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Binds `server.address()` and serves `router` until SIGINT or SIGTERM.
///
/// After in-flight requests drain, `cleanup` runs with at most
/// `shutdown_timeout` to finish.
pub async fn serve<F>(
    router: Router,
    server: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server encountered an error"));

    info!(timeout = ?shutdown_timeout, "Running shutdown cleanup");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup timed out, exiting anyway"),
    }

    serve_result
}
