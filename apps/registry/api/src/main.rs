use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::{Migrator, MigratorTrait};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // color-eyre before anything fallible, tracing before anything noisy
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Record store: PostgreSQL when DATABASE_URL is set, in-memory otherwise
    let db = match &config.database {
        Some(database) => {
            info!("Connecting to PostgreSQL");
            let db = sea_orm::Database::connect(database.url.as_str()).await?;

            info!("Running pending migrations");
            Migrator::up(&db, None).await?;

            Some(db)
        }
        None => {
            info!("DATABASE_URL not set, using the in-memory record store");
            None
        }
    };

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // /health answers whenever the process is up; /ready pings the store
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting registry API (minimum registration age: {})",
        state.config.registration.minimum_age
    );

    let server_config = state.config.server.clone();

    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            if let Some(db) = state.db {
                info!("Shutting down: closing database connection");
                match db.close().await {
                    Ok(_) => info!("PostgreSQL connection closed"),
                    Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Registry API shutdown complete");
    Ok(())
}
