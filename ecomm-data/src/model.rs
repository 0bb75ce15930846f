//! Plain records persisted by the storage engine.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Current time at the precision every supported backend stores (microseconds),
/// so a value written and read back compares equal.
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub rating: i32,
    pub num_reviews: i32,
    pub price: f64,
    pub count_in_stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// A product that has not been persisted yet (`id == 0`).
    pub fn new(name: impl Into<String>, price: f64, count_in_stock: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            image: String::new(),
            category: String::new(),
            description: String::new(),
            rating: 0,
            num_reviews: 0,
            price,
            count_in_stock,
            created_at: now_micros(),
            updated_at: None,
        }
    }
}

impl Entity for Product {
    fn table_name() -> &'static str {
        "products"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "image",
            "category",
            "description",
            "rating",
            "num_reviews",
            "price",
            "count_in_stock",
            "created_at",
            "updated_at",
        ]
    }
}

/// Order header plus its owned line items.
///
/// `items` is not a column of `orders`; the storage engine loads and writes it
/// through `order_items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub payment_method: String,
    pub tax_price: f64,
    pub shipping_price: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(payment_method: impl Into<String>, tax_price: f64, shipping_price: f64, total_price: f64) -> Self {
        Self {
            id: 0,
            payment_method: payment_method.into(),
            tax_price,
            shipping_price,
            total_price,
            created_at: now_micros(),
            updated_at: None,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }
}

impl Entity for Order {
    fn table_name() -> &'static str {
        "orders"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "payment_method",
            "tax_price",
            "shipping_price",
            "total_price",
            "created_at",
            "updated_at",
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub image: String,
    pub price: f64,
    pub product_id: i64,
    /// Set by the transaction that creates the parent order.
    pub order_id: i64,
}

impl OrderItem {
    pub fn new(product_id: i64, name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity,
            image: String::new(),
            price,
            product_id,
            order_id: 0,
        }
    }
}

impl Entity for OrderItem {
    fn table_name() -> &'static str {
        "order_items"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "quantity", "image", "price", "product_id", "order_id"]
    }
}
