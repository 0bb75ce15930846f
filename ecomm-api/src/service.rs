use std::sync::Arc;

use ecomm_data::{CatalogStore, DataError, ExecContext, Order, Product};

/// Facade the handlers call. Every method forwards to the store unchanged.
///
/// Generic over the store so tests and alternative backends can substitute
/// their own [`CatalogStore`].
pub struct CatalogService<S> {
    store: Arc<S>,
}

impl<S> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create_product(&self, ctx: &ExecContext, product: Product) -> Result<Product, DataError> {
        tracing::debug!(name = %product.name, "create product");
        self.store.create_product(ctx, product).await
    }

    pub async fn get_product(&self, ctx: &ExecContext, id: i64) -> Result<Product, DataError> {
        tracing::debug!(id, "get product");
        self.store.get_product(ctx, id).await
    }

    pub async fn list_products(&self, ctx: &ExecContext) -> Result<Vec<Product>, DataError> {
        tracing::debug!("list products");
        self.store.list_products(ctx).await
    }

    pub async fn update_product(&self, ctx: &ExecContext, product: Product) -> Result<Product, DataError> {
        tracing::debug!(id = product.id, "update product");
        self.store.update_product(ctx, product).await
    }

    pub async fn delete_product(&self, ctx: &ExecContext, id: i64) -> Result<(), DataError> {
        tracing::debug!(id, "delete product");
        self.store.delete_product(ctx, id).await
    }

    pub async fn create_order(&self, ctx: &ExecContext, order: Order) -> Result<Order, DataError> {
        tracing::debug!(items = order.items.len(), "create order");
        self.store.create_order(ctx, order).await
    }

    pub async fn get_order(&self, ctx: &ExecContext, id: i64) -> Result<Order, DataError> {
        tracing::debug!(id, "get order");
        self.store.get_order(ctx, id).await
    }

    pub async fn list_orders(&self, ctx: &ExecContext) -> Result<Vec<Order>, DataError> {
        tracing::debug!("list orders");
        self.store.list_orders(ctx).await
    }

    pub async fn delete_order(&self, ctx: &ExecContext, id: i64) -> Result<(), DataError> {
        tracing::debug!(id, "delete order");
        self.store.delete_order(ctx, id).await
    }
}
