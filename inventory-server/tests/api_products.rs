//! Black-box API tests
//!
//! 通过 tower 的 `oneshot` 在进程内驱动完整路由，
//! 校验每条路由的状态码和响应结构。

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use inventory_server::core::{Config, ServerState, build_app};

/// Fresh router with an empty store
fn test_app() -> axum::Router {
    let config = Config {
        http_port: 0,
        environment: "test".to_string(),
        log_dir: None,
    };
    build_app().with_state(ServerState::initialize(&config))
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn widget_payload() -> Value {
    json!({
        "name": "Widget",
        "quantity": 10,
        "price": 2.50,
        "reorderLevel": 5,
        "leadTime": 3,
        "category": "Electronics"
    })
}

#[tokio::test]
async fn full_crud_lifecycle() {
    let app = test_app();

    // Create
    let (status, body) = send(&app, "POST", "/api/products", Some(widget_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Product added successfully"));
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["data"]["quantity"], json!(10));
    assert_eq!(body["data"]["category"], json!("Electronics"));
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"].get("updatedAt").is_none());

    // List
    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["name"], json!("Widget"));

    // Get one
    let (status, body) = send(&app, "GET", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!(1));

    // Partial update: explicit zero must be applied, omitted fields kept
    let (status, body) = send(
        &app,
        "PUT",
        "/api/products/1",
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Product updated successfully"));
    assert_eq!(body["data"]["quantity"], json!(0));
    assert_eq!(body["data"]["name"], json!("Widget"));
    assert!(body["data"]["updatedAt"].is_string());

    // Delete
    let (status, body) = send(&app, "DELETE", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Product deleted successfully"));
    assert!(body.get("data").is_none());

    // Gone
    let (status, body) = send(&app, "GET", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Product not found"));
}

#[tokio::test]
async fn create_rejects_invalid_input() {
    let app = test_app();

    let mut missing_name = widget_payload();
    missing_name.as_object_mut().unwrap().remove("name");
    let (status, body) = send(&app, "POST", "/api/products", Some(missing_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].is_string());

    let mut negative_price = widget_payload();
    negative_price["price"] = json!(-2.5);
    let (status, _) = send(&app, "POST", "/api/products", Some(negative_price)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_quantity = widget_payload();
    bad_quantity["quantity"] = json!("lots");
    let (status, _) = send(&app, "POST", "/api/products", Some(bad_quantity)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was created
    let (_, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(body["count"], json!(0));
}

#[tokio::test]
async fn create_coerces_numeric_strings() {
    let app = test_app();

    let payload = json!({
        "name": "Cable",
        "quantity": "10",
        "price": "2.50",
        "reorderLevel": "5",
        "leadTime": "3"
    });
    let (status, body) = send(&app, "POST", "/api/products", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["quantity"], json!(10));
    assert_eq!(body["data"]["price"], json!(2.5));
    // Omitted category falls back to the default
    assert_eq!(body["data"]["category"], json!("Other"));
}

#[tokio::test]
async fn unknown_and_malformed_ids_return_not_found() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/api/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Product not found"));

    let (status, _) = send(
        &app,
        "PUT",
        "/api/products/42",
        Some(json!({ "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stock_adjustment_scenario() {
    let app = test_app();
    send(&app, "POST", "/api/products", Some(widget_payload())).await;

    // Remove 7 -> quantity 3, at/below reorder level 5
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/1/stock",
        Some(json!({ "operation": "remove", "amount": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Stock removed successfully"));
    assert_eq!(body["data"]["quantity"], json!(3));

    // Now on the low-stock list
    let (status, body) = send(&app, "GET", "/api/products/alerts/low-stock", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["id"], json!(1));

    // Removing 10 more fails and quantity stays 3
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/1/stock",
        Some(json!({ "operation": "remove", "amount": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Insufficient stock"));

    let (_, body) = send(&app, "GET", "/api/products/1", None).await;
    assert_eq!(body["data"]["quantity"], json!(3));

    // Add restocks
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/1/stock",
        Some(json!({ "operation": "add", "amount": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Stock added successfully"));
    assert_eq!(body["data"]["quantity"], json!(10));
}

#[tokio::test]
async fn stock_adjustment_rejects_invalid_operation() {
    let app = test_app();
    send(&app, "POST", "/api/products", Some(widget_payload())).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/1/stock",
        Some(json!({ "operation": "set", "amount": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid operation"));

    // Unknown id wins over the operation check
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/42/stock",
        Some(json!({ "operation": "set", "amount": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Product not found"));
}

#[tokio::test]
async fn category_filter_is_case_insensitive() {
    let app = test_app();
    send(&app, "POST", "/api/products", Some(widget_payload())).await;

    let (status, body) = send(&app, "GET", "/api/products/category/electronics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["category"], json!("Electronics"));

    // Unknown categories are an empty result, not an error
    let (status, body) = send(&app, "GET", "/api/products/category/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(0));
}

#[tokio::test]
async fn statistics_and_categories() {
    let app = test_app();
    send(&app, "POST", "/api/products", Some(widget_payload())).await;
    send(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Monitor",
            "quantity": 0,
            "price": 100.00,
            "reorderLevel": 0,
            "leadTime": 1
        })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalProducts"], json!(2));
    assert_eq!(body["data"]["totalItems"], json!(10));
    assert_eq!(body["data"]["totalValue"], json!("25.00"));
    assert_eq!(body["data"]["lowStockCount"], json!(1));
    assert_eq!(
        body["data"]["categories"],
        json!(["Electronics", "Clothing", "Food", "Furniture", "Books", "Other"])
    );

    let (status, body) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["data"],
        json!(["Electronics", "Clothing", "Food", "Furniture", "Books", "Other"])
    );
}

#[tokio::test]
async fn delete_twice_returns_not_found() {
    let app = test_app();
    send(&app, "POST", "/api/products", Some(widget_payload())).await;

    let (status, _) = send(&app, "DELETE", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Product not found"));
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert!(body["version"].is_string());
}
