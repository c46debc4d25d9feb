//! Products API routes

use axum::Router;
use domain_products::{
    ImageStore, InMemoryProductRepository, PgProductRepository, ProductMapper, ProductService,
    handlers,
};

use crate::state::AppState;

/// Wires repository, mapper and image store into the products router.
///
/// Fails when the upload directory cannot be created.
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let uploads = &state.config.uploads;
    let mapper = ProductMapper::new(uploads.public_prefix());
    let images = ImageStore::new(&uploads.dir)?;
    let body_limit = uploads.max_request_bytes;

    let router = match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository, mapper, images), body_limit)
        }
        None => {
            tracing::warn!("No database configured, products are kept in memory");
            let repository = InMemoryProductRepository::new();
            handlers::router(ProductService::new(repository, mapper, images), body_limit)
        }
    };

    Ok(router)
}
