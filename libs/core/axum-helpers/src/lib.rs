//! # Axum Helpers
//!
//! Shared HTTP plumbing for the product service.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security-header middleware
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body with stable error codes
//! - **[`extractors`]**: [`IdPath`] and [`ValidatedJson`]

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use http::{create_cors_layer, security_headers};
pub use server::{
    CheckStatus, HealthCheckFuture, HealthResponse, ReadyResponse, create_router, health_router,
    run_health_checks, serve, shutdown_signal,
};
