//! Products Domain
//!
//! Create, list and delete catalog products. Each product may carry one image,
//! uploaded as base64 and kept as a file in a local upload directory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, validation, audit events
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌─────────────┐
//! │   Service   │ ───▶ │ ImageStore  │  ← upload directory
//! └──────┬──────┘      └─────────────┘
//!        │   ProductMapper (DTO ⇄ entity, public image paths)
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and PostgreSQL implementations
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers, ImageStore, InMemoryProductRepository, ProductMapper, ProductService,
//! };
//!
//! # fn example() -> Result<(), domain_products::ProductError> {
//! let service = ProductService::new(
//!     InMemoryProductRepository::new(),
//!     ProductMapper::new("/uploads/"),
//!     ImageStore::new("uploads")?,
//! );
//! let router = handlers::router(service, 16 * 1024 * 1024);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod storage;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use mapper::ProductMapper;
pub use memory::InMemoryProductRepository;
pub use models::{NewProduct, Product, ProductDto};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use storage::ImageStore;
