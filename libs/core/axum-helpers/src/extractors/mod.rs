//! Custom extractors for Axum handlers.
//!
//! Both reject with the crate's standard [`ErrorResponse`](crate::ErrorResponse) body.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
