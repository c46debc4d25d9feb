//! API routes module

pub mod health;
pub mod pages;
pub mod products;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create all application routes
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    let uploads = &state.config.uploads;

    Ok(Router::new()
        .nest("/products", products::router(state)?)
        .nest_service(&uploads.mount_path(), ServeDir::new(&uploads.dir))
        .merge(pages::router())
        .merge(health::router(state.clone())))
}
