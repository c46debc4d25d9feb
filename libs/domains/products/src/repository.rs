use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// Implementations assign the id and both timestamps on save, and return
/// products from `find_all` in id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn save(&self, product: NewProduct) -> ProductResult<Product>;

    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Remove a product. Deleting a row that is already gone is not an error.
    async fn delete(&self, product: &Product) -> ProductResult<()>;
}
