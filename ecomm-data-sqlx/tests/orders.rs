#![cfg(all(feature = "sqlite", not(feature = "mysql")))]

mod common;

use ecomm_data::{CatalogStore, ErrorKind, ExecContext, Order, OrderItem};

fn two_item_order() -> Order {
    Order::new("card", 1.5, 4.0, 25.5)
        .with_item(OrderItem::new(1, "Widget", 2, 5.0))
        .with_item(OrderItem::new(2, "Gadget", 1, 10.0))
}

// ── Create ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_writes_generated_ids_back() {
    let store = common::memory_store().await;
    let order = store
        .create_order(&ExecContext::background(), two_item_order())
        .await
        .unwrap();

    assert!(order.id > 0);
    assert_eq!(order.items.len(), 2);
    for item in &order.items {
        assert!(item.id > 0);
        assert_eq!(item.order_id, order.id);
    }
    assert_ne!(order.items[0].id, order.items[1].id);
}

#[tokio::test]
async fn create_overrides_caller_supplied_order_id() {
    let store = common::memory_store().await;
    let mut item = OrderItem::new(1, "Widget", 1, 5.0);
    item.order_id = 999;

    let order = store
        .create_order(&ExecContext::background(), Order::new("cash", 0.0, 0.0, 5.0).with_item(item))
        .await
        .unwrap();
    assert_eq!(order.items[0].order_id, order.id);
}

#[tokio::test]
async fn failing_item_rolls_back_whole_order() {
    let store = common::memory_store().await;
    let ctx = ExecContext::background();
    let order = Order::new("card", 0.0, 0.0, 5.0)
        .with_item(OrderItem::new(1, "Widget", 1, 5.0))
        .with_item(OrderItem::new(2, "Broken", 0, 1.0));

    let err = store.create_order(&ctx, order).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert!(err.to_string().contains("inserting order item 2"), "{err}");

    assert!(store.list_orders(&ctx).await.unwrap().is_empty());
    assert_eq!(common::count(store.pool(), "orders").await, 0);
    assert_eq!(common::count(store.pool(), "order_items").await, 0);
}

#[tokio::test]
async fn failed_create_leaves_earlier_orders_intact() {
    let store = common::memory_store().await;
    let ctx = ExecContext::background();
    let kept = store.create_order(&ctx, two_item_order()).await.unwrap();

    let broken = Order::new("card", 0.0, 0.0, 0.0).with_item(OrderItem::new(3, "Broken", -1, 1.0));
    store.create_order(&ctx, broken).await.unwrap_err();

    let orders = store.list_orders(&ctx).await.unwrap();
    assert_eq!(orders, vec![kept]);
}

// ── Read ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_order_returns_its_items_only() {
    let store = common::memory_store().await;
    let ctx = ExecContext::background();
    let first = store.create_order(&ctx, two_item_order()).await.unwrap();
    let second = store
        .create_order(
            &ctx,
            Order::new("cash", 0.0, 0.0, 3.0).with_item(OrderItem::new(9, "Nut", 3, 1.0)),
        )
        .await
        .unwrap();

    let fetched = store.get_order(&ctx, first.id).await.unwrap();
    assert_eq!(fetched.items.len(), 2);
    assert_eq!(fetched, first);

    let fetched = store.get_order(&ctx, second.id).await.unwrap();
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].name, "Nut");
}

#[tokio::test]
async fn get_missing_order_is_not_found() {
    let store = common::memory_store().await;
    let err = store
        .get_order(&ExecContext::background(), 12)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_orders_groups_items_per_order() {
    let store = common::memory_store().await;
    let ctx = ExecContext::background();
    let a = store.create_order(&ctx, two_item_order()).await.unwrap();
    let b = store
        .create_order(&ctx, Order::new("cash", 0.0, 0.0, 0.0))
        .await
        .unwrap();
    let c = store.create_order(&ctx, two_item_order()).await.unwrap();

    let orders = store.list_orders(&ctx).await.unwrap();
    assert_eq!(orders, vec![a, b, c]);
    assert!(orders[1].items.is_empty());
}

// ── Delete ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_header_and_items() {
    let store = common::memory_store().await;
    let ctx = ExecContext::background();
    let order = store.create_order(&ctx, two_item_order()).await.unwrap();

    store.delete_order(&ctx, order.id).await.unwrap();
    assert!(store.get_order(&ctx, order.id).await.unwrap_err().is_not_found());
    assert_eq!(common::count(store.pool(), "order_items").await, 0);

    // missing order
    store.delete_order(&ctx, order.id).await.unwrap();
}

#[tokio::test]
async fn failing_header_delete_keeps_items() {
    let store = common::memory_store().await;
    let ctx = ExecContext::background();
    sqlx::query(
        "CREATE TRIGGER lock_orders BEFORE DELETE ON orders \
         WHEN OLD.payment_method = 'locked' \
         BEGIN SELECT RAISE(ABORT, 'order is locked'); END",
    )
    .execute(store.pool())
    .await
    .unwrap();

    let order = store
        .create_order(
            &ctx,
            Order::new("locked", 0.0, 0.0, 10.0)
                .with_item(OrderItem::new(1, "Widget", 1, 5.0))
                .with_item(OrderItem::new(2, "Gadget", 1, 5.0)),
        )
        .await
        .unwrap();

    let err = store.delete_order(&ctx, order.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert!(err.to_string().contains("order is locked"), "{err}");

    let fetched = store.get_order(&ctx, order.id).await.unwrap();
    assert_eq!(fetched.items.len(), 2);
}
