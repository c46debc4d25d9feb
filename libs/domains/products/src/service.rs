//! Product Service - orchestrates mapping, image storage and persistence

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::{ProductError, ProductResult};
use crate::mapper::ProductMapper;
use crate::models::ProductDto;
use crate::repository::ProductRepository;
use crate::storage::ImageStore;

/// Product service providing business logic operations
///
/// Request validation happens at the HTTP boundary, so every DTO reaching the
/// service is taken as is.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    mapper: ProductMapper,
    images: ImageStore,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R, mapper: ProductMapper, images: ImageStore) -> Self {
        Self {
            repository: Arc::new(repository),
            mapper,
            images,
        }
    }

    /// Create a product, storing its image first when one is attached.
    ///
    /// If the save fails after the image was written, the file stays on disk.
    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    pub async fn create_product(&self, dto: ProductDto) -> ProductResult<ProductDto> {
        let image_base64 = dto.image_base64.clone();
        let entity = self.mapper.to_entity(dto);

        let entity = match self
            .images
            .store(image_base64.as_deref(), entity.image_file_name.as_deref())
            .await?
        {
            Some(stored) => entity.with_image_file_name(Some(stored)),
            None => entity,
        };

        let saved = self.repository.save(entity).await?;
        tracing::info!(product_id = saved.id, "Created product");
        Ok(self.mapper.to_dto(saved))
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<ProductDto>> {
        let products = self.repository.find_all().await?;
        Ok(products
            .into_iter()
            .map(|product| self.mapper.to_dto(product))
            .collect())
    }

    /// Delete a product and, best effort, its image file.
    ///
    /// The file is kept while another product still points at it, which happens
    /// when a client creates a product with an existing `imageFileName`.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if let Some(image) = product.image_file_name.as_deref() {
            let shared = self
                .repository
                .find_all()
                .await?
                .iter()
                .any(|other| {
                    other.id != id && other.image_file_name.as_deref() == Some(image)
                });
            if shared {
                debug!(product_id = id, image, "Image still referenced, keeping file");
            } else {
                self.images.delete(Some(image)).await;
            }
        }
        self.repository.delete(&product).await?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }
}
