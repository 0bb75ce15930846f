use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ecomm_data::{CatalogStore, ExecContext, Product};
use ecomm_test::{count_rows, execute, memory_store, resolve_path, TestApp};
use serde_json::{json, Value};

fn echo_app() -> TestApp {
    let router = Router::new()
        .route("/echo", post(|Json(body): Json<Value>| async move { (StatusCode::CREATED, Json(body)) }))
        .route("/gone", get(|| async { StatusCode::NO_CONTENT }));
    TestApp::new(router)
}

#[test]
fn test_resolve_nested_array_field() {
    let v = json!({"orders": [{"items": [{"name": "Widget"}]}]});
    assert_eq!(resolve_path(&v, "orders[0].items[0].name"), json!("Widget"));
    assert_eq!(resolve_path(&v, "orders[0].items.len()"), json!(1));
}

#[test]
fn test_resolve_missing_is_null() {
    let v = json!({"name": "Widget"});
    assert_eq!(resolve_path(&v, "price"), Value::Null);
    assert_eq!(resolve_path(&v, "name[3]"), Value::Null);
}

#[tokio::test]
async fn test_json_round_trip_through_router() {
    let app = echo_app();
    let resp = app
        .post("/echo")
        .json(&json!({"items": [1, 2]}))
        .send()
        .await
        .assert_created()
        .assert_json_path("items.len()", 2);
    let second: i64 = resp.json_path("items[1]");
    assert_eq!(second, 2);
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    echo_app()
        .post("/echo")
        .raw_json("{not json")
        .send()
        .await
        .assert_client_error();
}

#[tokio::test]
async fn test_no_content() {
    echo_app().get("/gone").send().await.assert_no_content();
}

#[tokio::test]
async fn test_memory_stores_are_isolated() {
    let ctx = ExecContext::background();
    let first = memory_store().await;
    let second = memory_store().await;

    first
        .create_product(&ctx, Product::new("Widget", 9.99, 5))
        .await
        .unwrap();

    assert_eq!(count_rows(&first, "products").await, 1);
    assert_eq!(count_rows(&second, "products").await, 0);
}

#[tokio::test]
async fn test_execute_runs_raw_sql() {
    let store = memory_store().await;
    execute(&store, "INSERT INTO orders (payment_method, tax_price, shipping_price, total_price, created_at) VALUES ('cash', 0, 0, 0, '2024-01-01 00:00:00')").await;
    assert_eq!(count_rows(&store, "orders").await, 1);
}
