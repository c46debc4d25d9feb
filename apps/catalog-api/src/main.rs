//! Catalog API - product catalog with image uploads

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{self, DatabaseConnection};
use migration::Migrator;
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
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.database {
        Some(db_config) => {
            info!("Connecting to PostgreSQL at {}", db_config.redacted_url());
            let db = postgres::connect_from_config_with_retry(db_config.clone(), None).await?;
            postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
            Some(db)
        }
        None => None,
    };

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
    };

    let api_routes = api::routes(&state)?;
    let app = create_router::<openapi::ApiDoc>(api_routes, &config.server)?
        .merge(health_router(config.app));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), cleanup(db))
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}

async fn cleanup(db: Option<DatabaseConnection>) {
    if let Some(db) = db {
        info!("Shutting down: closing database connections");
        if let Err(e) = db.close().await {
            tracing::warn!("Error closing database connection: {}", e);
        }
    }
}
