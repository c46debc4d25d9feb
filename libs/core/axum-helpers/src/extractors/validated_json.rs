//! JSON extractor with validation through the `validator` crate.

use crate::errors::{AppError, ErrorCode, ErrorResponse, validation_details};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs `Validate::validate` before the handler sees the payload.
///
/// Malformed JSON is rejected through [`AppError::JsonExtractorRejection`];
/// validation failures become a 400 with per-field details.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct NewItem {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(item): ValidatedJson<NewItem>) -> String {
///     item.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate().map_err(|e| {
            tracing::debug!(error_code = ErrorCode::ValidationError.code(), "Rejected request body: {}", e);
            ErrorResponse::new(
                ErrorCode::ValidationError,
                ErrorCode::ValidationError.default_message(),
            )
            .with_details(validation_details(&e))
            .into_response_with(StatusCode::BAD_REQUEST)
        })?;

        Ok(ValidatedJson(data))
    }
}
