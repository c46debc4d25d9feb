//! Integer path parameter extractor.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Extractor for `i32` identifiers in the path.
///
/// Rejects anything that is not a base-10 `i32` with a structured 400
/// instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn delete_product(IdPath(id): IdPath) -> StatusCode { .. }
///
/// let app = Router::new().route("/products/{id}", delete(delete_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.trim().parse::<i32>().map(IdPath).map_err(|_| {
            ErrorResponse::new(ErrorCode::InvalidId, format!("Invalid identifier: {}", raw))
                .into_response_with(StatusCode::BAD_REQUEST)
        })
    }
}
