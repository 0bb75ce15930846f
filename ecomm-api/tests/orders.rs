mod common;

use axum::http::StatusCode;
use ecomm_test::{count_rows, execute};
use serde_json::json;

use common::harness;

fn two_items() -> serde_json::Value {
    json!({
        "paymentMethod": "card",
        "taxPrice": 1.5,
        "shippingPrice": 4.0,
        "totalPrice": 25.5,
        "items": [
            { "name": "Widget", "quantity": 2, "price": 5.0, "productId": 1 },
            { "name": "Gadget", "quantity": 1, "price": 10.0, "productId": 2 }
        ]
    })
}

#[tokio::test]
async fn test_create_order_assigns_ids() {
    let h = harness().await;
    let resp = h
        .app
        .post("/orders")
        .json(&two_items())
        .send()
        .await
        .assert_created()
        .assert_json_path("items.len()", 2)
        .assert_json_path("payment_method", "card");

    let id: i64 = resp.json_path("id");
    assert!(id > 0);
    for i in 0..2 {
        let item_id: i64 = resp.json_path(&format!("items[{i}].id"));
        let order_id: i64 = resp.json_path(&format!("items[{i}].order_id"));
        assert!(item_id > 0);
        assert_eq!(order_id, id);
    }

    h.app
        .get(&format!("/orders/{id}"))
        .send()
        .await
        .assert_ok()
        .assert_json_path("items.len()", 2)
        .assert_json_path("items[1].name", "Gadget");
}

#[tokio::test]
async fn test_failed_item_leaves_no_trace() {
    let h = harness().await;
    execute(
        &h.store,
        "CREATE TRIGGER poison_items BEFORE INSERT ON order_items \
         WHEN NEW.name = 'poison' \
         BEGIN SELECT RAISE(ABORT, 'poisoned item'); END",
    )
    .await;

    let body = json!({
        "payment_method": "card",
        "total_price": 6.0,
        "items": [
            { "name": "Widget", "quantity": 1, "price": 5.0, "product_id": 1 },
            { "name": "poison", "quantity": 1, "price": 1.0, "product_id": 2 }
        ]
    });
    h.app
        .post("/orders")
        .json(&body)
        .send()
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_json_path("error", "Internal server error");

    h.app.get("/orders").send().await.assert_ok().assert_json_path("len()", 0);
    assert_eq!(count_rows(&h.store, "orders").await, 0);
    assert_eq!(count_rows(&h.store, "order_items").await, 0);
}

#[tokio::test]
async fn test_zero_quantity_is_rejected_before_storage() {
    let h = harness().await;
    let body = json!({
        "payment_method": "card",
        "total_price": 1.0,
        "items": [{ "name": "Widget", "quantity": 0, "price": 1.0, "product_id": 1 }]
    });
    h.app
        .post("/orders")
        .json(&body)
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&h.store, "orders").await, 0);
}

#[tokio::test]
async fn test_list_orders_includes_items() {
    let h = harness().await;
    h.app.post("/orders").json(&two_items()).send().await.assert_created();
    h.app
        .post("/orders")
        .json(&json!({ "payment_method": "cash", "total_price": 0.0 }))
        .send()
        .await
        .assert_created();

    h.app
        .get("/orders")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 2)
        .assert_json_path("[0].items.len()", 2)
        .assert_json_path("[1].items.len()", 0);
}

#[tokio::test]
async fn test_delete_order() {
    let h = harness().await;
    let id: i64 = h
        .app
        .post("/orders")
        .json(&two_items())
        .send()
        .await
        .assert_created()
        .json_path("id");

    h.app.delete(&format!("/orders/{id}")).send().await.assert_no_content();
    h.app.get(&format!("/orders/{id}")).send().await.assert_not_found();
    assert_eq!(count_rows(&h.store, "order_items").await, 0);

    h.app.delete(&format!("/orders/{id}")).send().await.assert_no_content();
}
