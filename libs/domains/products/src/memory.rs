//! Process-local product store, used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

/// Keeps products in a `BTreeMap` so listing follows id order, like the
/// PostgreSQL implementation.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Inner>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: NewProduct) -> ProductResult<Product> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let saved = Product {
            id: inner.next_id,
            name: product.name,
            brand: product.brand,
            category: product.category,
            price: product.price,
            description: product.description,
            image_file_name: product.image_file_name,
            created_at: now,
            updated_at: now,
        };
        inner.products.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.inner.read().await.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.inner.read().await.products.get(&id).cloned())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        self.inner.write().await.products.remove(&product.id);
        Ok(())
    }
}
