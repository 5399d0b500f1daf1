//! Router assembly, health endpoints and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_router, health_router, serve};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(api_routes, &server_config)?
//!     .merge(health_router(app_info!()));
//! serve(app, &server_config, Duration::from_secs(30), async { db.close().await.ok(); }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_router, serve};
pub use health::{
    CheckStatus, HealthCheckFuture, HealthResponse, ReadyResponse, health_router,
    run_health_checks,
};
pub use shutdown::shutdown_signal;
