//! Request and response bodies.
//!
//! Field names are snake_case; camelCase spellings are accepted on input.

use chrono::{DateTime, Utc};
use ecomm_data::{Order, OrderItem, Product};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateProductRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(skip)]
    #[serde(default)]
    pub image: String,
    #[garde(skip)]
    #[serde(default)]
    pub category: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(range(min = 0, max = 5))]
    #[serde(default)]
    pub rating: i32,
    #[garde(range(min = 0))]
    #[serde(default, alias = "numReviews")]
    pub num_reviews: i32,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(range(min = 0))]
    #[serde(default, alias = "countInStock")]
    pub count_in_stock: i64,
}

impl CreateProductRequest {
    pub fn into_product(self) -> Product {
        let mut product = Product::new(self.name, self.price, self.count_in_stock);
        product.image = self.image;
        product.category = self.category;
        product.description = self.description;
        product.rating = self.rating;
        product.num_reviews = self.num_reviews;
        product
    }
}

/// Partial update. A present field overwrites the stored value, an absent
/// field keeps it; `"price": 0` sets the price to zero.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateProductRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[garde(skip)]
    pub image: Option<String>,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(range(min = 0, max = 5))]
    pub rating: Option<i32>,
    #[garde(range(min = 0))]
    #[serde(alias = "numReviews")]
    pub num_reviews: Option<i32>,
    #[garde(range(min = 0.0))]
    pub price: Option<f64>,
    #[garde(range(min = 0))]
    #[serde(alias = "countInStock")]
    pub count_in_stock: Option<i64>,
}

impl UpdateProductRequest {
    /// Merge the present fields into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(num_reviews) = self.num_reviews {
            product.num_reviews = num_reviews;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(count_in_stock) = self.count_in_stock {
            product.count_in_stock = count_in_stock;
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ProductResponse {
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

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            image: p.image,
            category: p.category,
            description: p.description,
            rating: p.rating,
            num_reviews: p.num_reviews,
            price: p.price,
            count_in_stock: p.count_in_stock,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateOrderItemRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(range(min = 1))]
    pub quantity: i32,
    #[garde(skip)]
    #[serde(default)]
    pub image: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(range(min = 1))]
    #[serde(alias = "productId")]
    pub product_id: i64,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateOrderRequest {
    #[garde(length(min = 1, max = 255))]
    #[serde(alias = "paymentMethod")]
    pub payment_method: String,
    #[garde(range(min = 0.0))]
    #[serde(default, alias = "taxPrice")]
    pub tax_price: f64,
    #[garde(range(min = 0.0))]
    #[serde(default, alias = "shippingPrice")]
    pub shipping_price: f64,
    #[garde(range(min = 0.0))]
    #[serde(alias = "totalPrice")]
    pub total_price: f64,
    #[garde(dive)]
    #[serde(default)]
    pub items: Vec<CreateOrderItemRequest>,
}

impl CreateOrderRequest {
    pub fn into_order(self) -> Order {
        let order = Order::new(self.payment_method, self.tax_price, self.shipping_price, self.total_price);
        self.items.into_iter().fold(order, |order, item| {
            let mut line = OrderItem::new(item.product_id, item.name, item.quantity, item.price);
            line.image = item.image;
            order.with_item(line)
        })
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OrderItemResponse {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub name: String,
    pub quantity: i32,
    pub image: String,
    pub price: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            name: item.name,
            quantity: item.quantity,
            image: item.image,
            price: item.price,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OrderResponse {
    pub id: i64,
    pub payment_method: String,
    pub tax_price: f64,
    pub shipping_price: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            payment_method: o.payment_method,
            tax_price: o.tax_price,
            shipping_price: o.shipping_price,
            total_price: o.total_price,
            created_at: o.created_at,
            updated_at: o.updated_at,
            items: o.items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Product {
        let mut p = Product::new("Widget", 9.99, 5);
        p.id = 3;
        p.category = "tools".into();
        p
    }

    #[test]
    fn absent_fields_are_kept() {
        let mut product = stored();
        let patch: UpdateProductRequest = serde_json::from_str(r#"{"name": "Gizmo"}"#).unwrap();
        patch.apply(&mut product);
        assert_eq!(product.name, "Gizmo");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.category, "tools");
    }

    #[test]
    fn present_zero_values_are_applied() {
        let mut product = stored();
        let patch: UpdateProductRequest =
            serde_json::from_str(r#"{"price": 0, "countInStock": 0, "category": ""}"#).unwrap();
        patch.apply(&mut product);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.count_in_stock, 0);
        assert_eq!(product.category, "");
    }

    #[test]
    fn camel_case_aliases_are_accepted() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"paymentMethod": "card", "totalPrice": 12.5,
                "items": [{"name": "Widget", "quantity": 2, "price": 6.25, "productId": 4}]}"#,
        )
        .unwrap();
        let order = req.into_order();
        assert_eq!(order.payment_method, "card");
        assert_eq!(order.items[0].product_id, 4);
        assert_eq!(order.items[0].order_id, 0);
    }

    #[test]
    fn non_positive_quantity_fails_validation() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"payment_method": "card", "total_price": 1,
                "items": [{"name": "Widget", "quantity": 0, "price": 1, "product_id": 1}]}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
