//! Products API - REST server over PostgreSQL

use axum_helpers::server::{create_router, serve};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{check_health_detailed, connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Connecting to PostgreSQL"
    );

    let db = connect_from_config_with_retry(config.database.clone(), None).await?;

    let health = check_health_detailed(&db).await;
    if health.healthy {
        info!(response_time_ms = health.response_time_ms, "PostgreSQL is reachable");
    } else {
        warn!(message = ?health.message, "PostgreSQL health check failed at startup");
    }

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("Skipping migrations (RUN_MIGRATIONS=false)");
    }

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &config.server)?;

    info!("Starting Products API on port {}", config.server.port);

    let db = state.db.clone();
    serve(router, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL pool");
        if let Err(e) = db.close().await {
            warn!(error = %e, "Failed to close PostgreSQL pool");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
