//! Handler tests for the Products domain
//!
//! Drive the domain router end to end over the in-memory repository:
//! JSON in and out, status codes and the shared error body.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    Router::new().nest("/products", handlers::router(service))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn product_json(name: &str, category: &str, quantity: i64, price: &str) -> Value {
    json!({
        "name": name,
        "description": format!("Description of {name}"),
        "category": category,
        "quantity": quantity,
        "price": price,
    })
}

/// Seeds P1..P3 and returns them in creation order.
async fn seed(app: &Router) -> Vec<Product> {
    let mut created = Vec::new();
    for (name, category, quantity, price) in [
        ("Product 001", "AUTOMOTIVE", 10, "100"),
        ("Product 002", "HEALTH", 20, "200"),
        ("Product 003", "SPORT", 30, "300"),
    ] {
        let response = app
            .clone()
            .oneshot(post_json(product_json(name, category, quantity, price)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        created.push(json_body(response.into_body()).await);
    }
    created
}

#[tokio::test]
async fn test_create_product_returns_201_with_id() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(product_json("Product 001", "AUTOMOTIVE", 10, "100")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Product 001");
    assert_eq!(body["category"], "AUTOMOTIVE");
    assert_eq!(body["price"], "100.00");

    let response = app.oneshot(get("/products/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = json_body(response.into_body()).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_create_accepts_numeric_price() {
    let response = app()
        .oneshot(post_json(json!({
            "name": "Lamp",
            "description": "Desk lamp",
            "category": "HOME",
            "quantity": 3,
            "price": 19.999
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["price"], "20.00");
}

#[tokio::test]
async fn test_create_empty_fields_returns_422() {
    let response = app()
        .oneshot(post_json(product_json("", "SPORT", 10, "11")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_missing_field_returns_422() {
    let response = app()
        .oneshot(post_json(json!({
            "name": "Lamp",
            "description": "Desk lamp",
            "category": "HOME",
            "quantity": 3
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_name_returns_409() {
    let app = app();
    let body = product_json("Desk", "HOME", 1, "50");

    let first = app.clone().oneshot(post_json(body.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post_json(body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let error: Value = json_body(second.into_body()).await;
    assert_eq!(error["code"], 1008);
    assert_eq!(error["error"], "CONFLICT");
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = app().oneshot(get("/products/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_non_integer_id_returns_400() {
    let response = app().oneshot(get("/products/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_get_by_name() {
    let app = app();
    seed(&app).await;

    let response = app
        .clone()
        .oneshot(get("/products/name/Product%20002"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.category, Category::Health);

    let response = app
        .oneshot(get("/products/name/product%20002"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_scenario() {
    let app = app();
    let seeded = seed(&app).await;

    let response = app.clone().oneshot(get("/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(all, seeded);

    let response = app
        .clone()
        .oneshot(get("/products?name=product%20001&category=AUTOMOTIVE"))
        .await
        .unwrap();
    let matched: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(matched, vec![seeded[0].clone()]);

    let response = app
        .clone()
        .oneshot(get("/products?name=nonexistent"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let none: Vec<Product> = json_body(response.into_body()).await;
    assert!(none.is_empty());

    let response = app.clone().oneshot(get("/products?name=")).await.unwrap();
    let blank: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(blank.len(), 3);

    // A space is a name like any other, not an absent filter
    let response = app.oneshot(get("/products?name=%20")).await.unwrap();
    let spaced: Vec<Product> = json_body(response.into_body()).await;
    assert!(spaced.is_empty());
}

#[tokio::test]
async fn test_list_unknown_category_returns_400() {
    let response = app()
        .oneshot(get("/products?category=GARDEN"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_delete_product() {
    let app = app();
    seed(&app).await;

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/products/2")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/products/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
