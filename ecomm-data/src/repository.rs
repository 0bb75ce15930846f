use crate::context::ExecContext;
use crate::error::DataError;
use crate::model::{Order, Product};
use std::future::Future;

/// Persistence contract for the catalog and order aggregates.
///
/// Uses RPITIT (return-position `impl Trait` in traits); no `async-trait` needed.
/// Implementations own the transaction boundary for the order operations:
/// `create_order` and `delete_order` are all-or-nothing.
pub trait CatalogStore: Send + Sync + 'static {
    /// Insert a product and return it with its generated `id` and `created_at`.
    fn create_product(
        &self,
        ctx: &ExecContext,
        product: Product,
    ) -> impl Future<Output = Result<Product, DataError>> + Send;

    /// Fetch one product. Zero matching rows is [`DataError::NotFound`].
    fn get_product(
        &self,
        ctx: &ExecContext,
        id: i64,
    ) -> impl Future<Output = Result<Product, DataError>> + Send;

    fn list_products(
        &self,
        ctx: &ExecContext,
    ) -> impl Future<Output = Result<Vec<Product>, DataError>> + Send;

    /// Full-row update keyed by `product.id`. Partial-update merging is the caller's job.
    fn update_product(
        &self,
        ctx: &ExecContext,
        product: Product,
    ) -> impl Future<Output = Result<Product, DataError>> + Send;

    /// Idempotent: deleting a missing product succeeds.
    fn delete_product(
        &self,
        ctx: &ExecContext,
        id: i64,
    ) -> impl Future<Output = Result<(), DataError>> + Send;

    /// Insert the header and every item atomically, writing generated ids back.
    fn create_order(
        &self,
        ctx: &ExecContext,
        order: Order,
    ) -> impl Future<Output = Result<Order, DataError>> + Send;

    fn get_order(
        &self,
        ctx: &ExecContext,
        id: i64,
    ) -> impl Future<Output = Result<Order, DataError>> + Send;

    fn list_orders(
        &self,
        ctx: &ExecContext,
    ) -> impl Future<Output = Result<Vec<Order>, DataError>> + Send;

    /// Delete the items, then the header, atomically.
    fn delete_order(
        &self,
        ctx: &ExecContext,
        id: i64,
    ) -> impl Future<Output = Result<(), DataError>> + Send;
}
