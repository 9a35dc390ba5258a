use axum::{
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use storefront::{config::Settings, routes, AppState};
use tower::ServiceExt;

fn test_app() -> Router {
    routes::app(AppState::new(Settings::default()).expect("templates"))
}

async fn send(app: &Router, req: Request<axum::body::Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    send(app, req).await
}

async fn post_order(app: &Router, payload: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(payload.to_string()))
        .unwrap();
    send(app, req).await
}

fn order_payload(product_id: Value, quantity: Value) -> Value {
    json!({
        "productId": product_id,
        "quantity": quantity,
        "customerName": "Test User",
        "customerEmail": "test@example.com"
    })
}

async fn stock_of(app: &Router, id: u32) -> u64 {
    let (_, body) = get(app, &format!("/api/products/{id}")).await;
    body["data"]["stock"].as_u64().unwrap()
}

#[tokio::test]
async fn post_order_creates_order_and_takes_stock() {
    let app = test_app();

    let (status, body) = post_order(&app, order_payload(json!(2), json!(1))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order created successfully");

    let order = &body["data"];
    assert_eq!(order["id"], 1);
    assert_eq!(order["productId"], 2);
    assert_eq!(order["productName"], "iPhone 15");
    assert_eq!(order["quantity"], 1);
    assert_eq!(order["totalPrice"], 799.99);
    assert_eq!(order["customerName"], "Test User");
    assert_eq!(order["customerEmail"], "test@example.com");
    assert_eq!(order["status"], "confirmed");
    assert!(order["createdAt"].as_str().is_some_and(|t| t.ends_with('Z')));

    assert_eq!(stock_of(&app, 2).await, 29);
}

#[tokio::test]
async fn post_order_accepts_numeric_strings() {
    let app = test_app();

    let (status, body) = post_order(&app, order_payload(json!("4"), json!("3"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["productId"], 4);
    assert_eq!(body["data"]["quantity"], 3);
    assert_eq!(stock_of(&app, 4).await, 47);
}

#[tokio::test]
async fn post_order_over_stock_is_rejected_without_mutation() {
    let app = test_app();

    let (status, body) = post_order(&app, order_payload(json!(1), json!(16))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "message": "Insufficient stock" }));
    assert_eq!(stock_of(&app, 1).await, 15);

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders["count"], 0);
}

#[tokio::test]
async fn post_order_unknown_product_returns_404() {
    let app = test_app();

    let (status, body) = post_order(&app, order_payload(json!(99), json!(1))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "Product not found" }));
}

#[tokio::test]
async fn post_order_missing_fields_returns_400() {
    let app = test_app();
    let full = order_payload(json!(1), json!(1));

    for field in ["productId", "quantity", "customerName", "customerEmail"] {
        let mut payload = full.clone();
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = post_order(&app, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required");
    }

    assert_eq!(stock_of(&app, 1).await, 15);
    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders["count"], 0);
}

#[tokio::test]
async fn post_order_non_numeric_quantity_returns_400() {
    let app = test_app();

    let (status, body) = post_order(&app, order_payload(json!(1), json!("many"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "quantity must be a positive integer");
    assert_eq!(stock_of(&app, 1).await, 15);
}

#[tokio::test]
async fn post_order_malformed_json_returns_envelope() {
    let app = test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn order_ids_stay_dense_across_failures() {
    let app = test_app();

    let (_, first) = post_order(&app, order_payload(json!(3), json!(1))).await;
    post_order(&app, order_payload(json!(3), json!(1000))).await;
    post_order(&app, order_payload(json!(77), json!(1))).await;
    post_order(&app, json!({ "productId": 3 })).await;
    let (_, second) = post_order(&app, order_payload(json!(1), json!(2))).await;

    assert_eq!(first["data"]["id"], 1);
    assert_eq!(second["data"]["id"], 2);

    let (status, orders) = get(&app, "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders["success"], true);
    assert_eq!(orders["count"], 2);

    let ids: Vec<u64> = orders["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn each_app_state_starts_fresh() {
    let first = test_app();
    post_order(&first, order_payload(json!(2), json!(5))).await;

    let second = test_app();
    assert_eq!(stock_of(&second, 2).await, 30);

    let (_, orders) = get(&second, "/api/orders").await;
    assert_eq!(orders["count"], 0);
    assert_eq!(orders["data"], json!([]));
}
