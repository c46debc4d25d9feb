//! Translation between [`ProductDto`] and the stored product.

use crate::models::{NewProduct, Product, ProductDto};

/// Adds and strips the public image prefix.
///
/// The prefix comes from the upload configuration so it always matches the
/// route the image directory is served on.
#[derive(Debug, Clone)]
pub struct ProductMapper {
    public_prefix: String,
}

impl ProductMapper {
    /// `public_prefix` is e.g. `/uploads/`
    pub fn new(public_prefix: impl Into<String>) -> Self {
        Self {
            public_prefix: public_prefix.into(),
        }
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    /// Builds an unsaved product. Any client supplied id is dropped.
    pub fn to_entity(&self, dto: ProductDto) -> NewProduct {
        NewProduct {
            name: dto.name,
            brand: dto.brand,
            category: dto.category,
            price: dto.price,
            description: dto.description,
            image_file_name: dto
                .image_file_name
                .as_deref()
                .and_then(|name| self.stored_name(name)),
        }
    }

    pub fn to_dto(&self, product: Product) -> ProductDto {
        ProductDto {
            id: Some(product.id),
            name: product.name,
            brand: product.brand,
            category: product.category,
            price: product.price,
            description: product.description,
            created_at: Some(product.created_at),
            updated_at: Some(product.updated_at),
            image_file_name: product
                .image_file_name
                .as_deref()
                .and_then(|name| self.public_path(name)),
            image_base64: None,
        }
    }

    /// Reduces a client path to a bare file name inside the upload directory.
    fn stored_name(&self, name: &str) -> Option<String> {
        if name.trim().is_empty() {
            return None;
        }
        let normalized = name.replace('\\', "/");
        let stripped = normalized
            .strip_prefix(self.public_prefix.as_str())
            .unwrap_or(&normalized);
        stripped
            .rsplit('/')
            .next()
            .filter(|segment| !matches!(*segment, "" | "." | ".."))
            .map(str::to_string)
    }

    fn public_path(&self, stored: &str) -> Option<String> {
        if stored.trim().is_empty() {
            None
        } else if stored.starts_with(self.public_prefix.as_str()) {
            Some(stored.to_string())
        } else {
            Some(format!("{}{}", self.public_prefix, stored))
        }
    }
}
