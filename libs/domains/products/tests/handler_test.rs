//! Handler tests for the products domain
//!
//! Drives the products router with the in-memory repository and a temporary
//! upload directory:
//! - Request deserialization and validation
//! - Status codes and JSON bodies
//! - Image files written and removed on disk

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use test_utils::TestDataBuilder;
use test_utils::assertions::*;
use tower::ServiceExt; // For oneshot()

const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

struct TestApp {
    _tmp: TempDir,
    uploads: std::path::PathBuf,
    router: Router,
}

fn test_app() -> TestApp {
    let tmp = TempDir::new().unwrap();
    let uploads = tmp.path().join("uploads");
    let service = ProductService::new(
        InMemoryProductRepository::new(),
        ProductMapper::new("/uploads/"),
        ImageStore::new(&uploads).unwrap(),
    );
    TestApp {
        _tmp: tmp,
        uploads,
        router: handlers::router(service, MAX_BODY_BYTES),
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/create")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn product_json(builder: &TestDataBuilder, suffix: &str) -> Value {
    json!({
        "name": builder.name("product", suffix),
        "brand": "Acme",
        "category": "Tools",
        "price": builder.price(),
        "description": builder.description()
    })
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let response = app
        .router
        .oneshot(create_request(product_json(&builder, "main")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: ProductDto = json_body(response.into_body()).await;
    assert_eq!(product.id, Some(1));
    assert_eq!(product.name, builder.name("product", "main"));
    assert_eq!(product.image_file_name, None);
    assert!(product.created_at.is_some());
    assert_dir_empty(&app.uploads);
}

#[tokio::test]
async fn test_create_product_ignores_client_id() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_client_id");

    let mut body = product_json(&builder, "main");
    body["id"] = json!(500);

    let response = app.router.oneshot(create_request(body)).await.unwrap();
    let product: ProductDto = json_body(response.into_body()).await;
    assert_eq!(product.id, Some(1));
}

#[tokio::test]
async fn test_create_product_with_image_stores_file() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_image");

    let mut body = product_json(&builder, "img");
    body["imageBase64"] = json!(PNG);
    body["imageFileName"] = json!("front view.png");

    let response = app.router.oneshot(create_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let raw: Value = json_body(response.into_body()).await;
    assert!(raw["imageBase64"].is_null());

    let path = raw["imageFileName"].as_str().unwrap();
    assert!(path.starts_with("/uploads/"));
    assert!(path.ends_with("_front_view.png"));
    assert_file_exists(&app.uploads, path.trim_start_matches("/uploads/"));
}

#[tokio::test]
async fn test_create_product_validates_input() {
    let app = test_app();

    let response = app
        .router
        .oneshot(create_request(json!({
            "name": "",
            "brand": "Acme",
            "category": "Tools",
            "price": -3.0,
            "description": "short"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
    assert!(body["details"]["price"].is_array());
    assert!(body["details"]["description"].is_array());
}

#[tokio::test]
async fn test_create_product_with_broken_image_returns_500() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_broken_image");

    let mut body = product_json(&builder, "broken");
    body["imageBase64"] = json!("data:image/png;base64,%%%");

    let response = app.router.clone().oneshot(create_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let list = app
        .router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let products: Vec<ProductDto> = json_body(list.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_products_in_creation_order() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_list");

    for suffix in ["first", "second", "third"] {
        let response = app
            .router
            .clone()
            .oneshot(create_request(product_json(&builder, suffix)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<ProductDto> = json_body(response.into_body()).await;
    let names: Vec<String> = products.into_iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            builder.name("product", "first"),
            builder.name("product", "second"),
            builder.name("product", "third"),
        ]
    );
}

#[tokio::test]
async fn test_delete_product_removes_record_and_image() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_delete");

    let mut body = product_json(&builder, "doomed");
    body["imageBase64"] = json!(PNG);
    let response = app
        .router
        .clone()
        .oneshot(create_request(body))
        .await
        .unwrap();
    let created: ProductDto = json_body(response.into_body()).await;
    let id = assert_some(created.id, "created product id");

    let response = app
        .router
        .clone()
        .oneshot(
            Request::delete(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_dir_empty(&app.uploads);

    let response = app
        .router
        .oneshot(
            Request::delete(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_product_returns_404() {
    let app = test_app();

    let response = app
        .router
        .oneshot(Request::delete("/999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Product 999 not found");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/create")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

fn jpeg_data_uri(size: usize) -> String {
    use base64::Engine;
    let bytes: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
    format!(
        "data:image/jpeg;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[tokio::test]
async fn test_create_product_accepts_multi_megabyte_image() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_large_image");

    let mut body = product_json(&builder, "photo");
    body["imageBase64"] = json!(jpeg_data_uri(3 * 1024 * 1024));
    body["imageFileName"] = json!("phone.jpg");

    let response = app.router.oneshot(create_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let product: ProductDto = json_body(response.into_body()).await;
    let path = product.image_file_name.unwrap();
    let stored = app.uploads.join(path.trim_start_matches("/uploads/"));
    assert_eq!(std::fs::metadata(stored).unwrap().len(), 3 * 1024 * 1024);
}

#[tokio::test]
async fn test_create_product_over_body_limit_is_413() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_too_large");

    let mut body = product_json(&builder, "photo");
    body["imageBase64"] = json!(jpeg_data_uri(MAX_BODY_BYTES));

    let response = app.router.oneshot(create_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "JSON_EXTRACTION");
    assert_dir_empty(&app.uploads);
}

#[tokio::test]
async fn test_client_image_path_is_reduced_to_file_name() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_image_path");

    let mut body = product_json(&builder, "path");
    body["imageFileName"] = json!("x/y/../z.png");

    let response = app.router.oneshot(create_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let product: ProductDto = json_body(response.into_body()).await;
    assert_eq!(product.image_file_name.as_deref(), Some("/uploads/z.png"));
}

#[tokio::test]
async fn test_deleting_product_keeps_image_used_by_another() {
    let app = test_app();
    let builder = TestDataBuilder::from_test_name("handler_shared_image");

    let mut first = product_json(&builder, "first");
    first["imageBase64"] = json!(PNG);
    let response = app
        .router
        .clone()
        .oneshot(create_request(first))
        .await
        .unwrap();
    let original: ProductDto = json_body(response.into_body()).await;
    let public_path = original.image_file_name.unwrap();

    let mut second = product_json(&builder, "second");
    second["imageFileName"] = json!(public_path.as_str());
    let response = app
        .router
        .clone()
        .oneshot(create_request(second))
        .await
        .unwrap();
    let copy: ProductDto = json_body(response.into_body()).await;
    assert_eq!(copy.image_file_name.as_deref(), Some(public_path.as_str()));

    let response = app
        .router
        .oneshot(
            Request::delete(format!("/{}", copy.id.unwrap()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_file_exists(&app.uploads, public_path.trim_start_matches("/uploads/"));
}
