use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored product.
///
/// `image_file_name` is the bare name inside the upload directory. It never
/// carries a directory or the public URL prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_file_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product that has not been saved yet. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_file_name: Option<String>,
}

impl NewProduct {
    /// Returns a copy pointing at a different stored image.
    pub fn with_image_file_name(self, image_file_name: Option<String>) -> Self {
        Self {
            image_file_name,
            ..self
        }
    }
}

/// Wire representation of a product.
///
/// On read `imageFileName` is the public path of the image. On write
/// `imageBase64` carries the image, optionally behind a data URI header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Assigned by the server, ignored on create
    #[schema(example = 1)]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Espresso beans")]
    pub name: String,

    #[validate(length(min = 1, message = "Brand is required"))]
    #[schema(example = "Lavazza")]
    pub brand: String,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Coffee")]
    pub category: String,

    #[validate(range(min = 0.0, message = "Price must be positive or zero"))]
    #[schema(example = 12.5)]
    pub price: Option<f64>,

    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10 and 2000 characters"
    ))]
    pub description: Option<String>,

    #[schema(read_only)]
    pub created_at: Option<DateTime<Utc>>,

    #[schema(read_only)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Public path of the stored image, e.g. `/uploads/3f2a..._beans.jpg`
    pub image_file_name: Option<String>,

    /// Base64 image payload, optionally prefixed by `data:image/<ext>;base64,`
    #[schema(write_only)]
    pub image_base64: Option<String>,
}
