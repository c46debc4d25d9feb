//! HTTP handlers for the products API

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::ProductDto;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, delete_product),
    components(
        schemas(ProductDto),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Routes relative to the mount point, usually `/products`.
///
/// `max_body_bytes` caps the create request, which carries the base64 image.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    max_body_bytes: usize,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route(
            "/create",
            post(create_product).layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .route("/{id}", delete(delete_product))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products in id order", body = Vec<ProductDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = service.get_all_products().await?;
    Ok(Json(products))
}

/// Create a product, optionally with a base64 image
#[utoipa::path(
    post,
    path = "/create",
    tag = "Products",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    let name = input.name.clone();
    let result = service.create_product(input).await;

    let event = match &result {
        Ok(product) => AuditEvent::new(
            "product.create",
            product.id.map(|id| format!("product:{}", id)),
            AuditOutcome::Success,
        ),
        Err(e) => AuditEvent::new("product.create", None, AuditOutcome::Failure)
            .with_details(serde_json::json!({ "name": name, "error": e.to_string() })),
    };
    event.with_request_headers(&headers).log();

    Ok((StatusCode::CREATED, Json(result?)))
}

/// Delete a product and its image
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    let result = service.delete_product(id).await;

    let outcome = if result.is_ok() {
        AuditOutcome::Success
    } else {
        AuditOutcome::Failure
    };
    AuditEvent::new("product.delete", Some(format!("product:{}", id)), outcome)
        .with_request_headers(&headers)
        .log();

    result?;
    Ok(StatusCode::NO_CONTENT)
}
