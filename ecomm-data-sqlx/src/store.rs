use std::collections::HashMap;

use ecomm_data::{
    now_micros, CatalogStore, DataError, Entity, ExecContext, NoRowsMatched, Order, OrderItem,
    Product,
};
use sqlx::pool::PoolOptions;
use sqlx::Database;

use crate::backend::{self, Db, DbPool};
use crate::error::SqlxErrorExt;
use crate::tx::with_transaction;

type DbQuery<'q> = sqlx::query::Query<'q, Db, <Db as Database>::Arguments<'q>>;

const UPDATE_PRODUCT: &str = "UPDATE products SET name = ?, image = ?, category = ?, \
     description = ?, rating = ?, num_reviews = ?, price = ?, count_in_stock = ?, updated_at = ? \
     WHERE id = ?";
const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = ?";
const DELETE_ORDER_ITEMS: &str = "DELETE FROM order_items WHERE order_id = ?";
const DELETE_ORDER: &str = "DELETE FROM orders WHERE id = ?";

/// SQLx implementation of [`CatalogStore`].
///
/// `create_product`, `create_order` and `delete_order` run through
/// [`with_transaction`], so an insert whose generated id cannot be read is
/// rolled back. The other product writes are single statements on the pool and
/// reads are not transactional.
///
/// # Example
///
/// ```ignore
/// let store = SqlxStore::connect("sqlite://shop.db?mode=rwc", 5).await?;
/// let product = store.create_product(&ExecContext::background(), Product::new("Widget", 9.99, 5)).await?;
/// ```
#[derive(Clone)]
pub struct SqlxStore {
    pool: DbPool,
}

impl SqlxStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a pool on `url` and wrap it.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, DataError> {
        let pool = PoolOptions::<Db>::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| DataError::read("connecting to database", e))?;
        Ok(Self::new(pool))
    }

    /// Get the underlying pool reference.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn by_id<E: Entity>() -> String {
    format!("{} WHERE {} = ?", E::select_sql(), E::id_column())
}

fn ordered<E: Entity>() -> String {
    format!("{} ORDER BY {}", E::select_sql(), E::id_column())
}

fn not_found<E: Entity>(id: i64) -> DataError {
    DataError::NotFound(
        NoRowsMatched {
            table: E::table_name(),
            id,
        }
        .to_string(),
    )
}

/// Binds every product column except `id` and `created_at`, in `UPDATE_PRODUCT` order.
fn bind_product_fields<'q>(query: DbQuery<'q>, product: &'q Product) -> DbQuery<'q> {
    query
        .bind(&product.name)
        .bind(&product.image)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.rating)
        .bind(product.num_reviews)
        .bind(product.price)
        .bind(product.count_in_stock)
}

impl CatalogStore for SqlxStore {
    #[tracing::instrument(name = "store::create_product", skip_all, fields(name = %product.name))]
    async fn create_product(&self, ctx: &ExecContext, product: Product) -> Result<Product, DataError> {
        let product = with_transaction(&self.pool, ctx, "create_product", move |tx| {
            Box::pin(async move {
                let mut product = product;
                product.created_at = now_micros();
                product.updated_at = None;

                let sql = Product::insert_sql();
                let result = bind_product_fields(sqlx::query(&sql), &product)
                    .bind(product.created_at)
                    .bind(product.updated_at)
                    .execute(&mut **tx)
                    .await
                    .map_err(|e| e.into_write_error("inserting product"))?;
                product.id = backend::generated_id(&result, "reading generated product id")?;
                Ok::<_, DataError>(product)
            })
        })
        .await?;

        tracing::debug!(id = product.id, "product created");
        Ok(product)
    }

    #[tracing::instrument(name = "store::get_product", skip(self, ctx))]
    async fn get_product(&self, ctx: &ExecContext, id: i64) -> Result<Product, DataError> {
        let sql = by_id::<Product>();
        ctx.guard("get_product", async {
            sqlx::query_as::<_, Product>(&sql)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| e.into_read_error("getting product"))?
                .ok_or_else(|| not_found::<Product>(id))
        })
        .await
    }

    #[tracing::instrument(name = "store::list_products", skip_all)]
    async fn list_products(&self, ctx: &ExecContext) -> Result<Vec<Product>, DataError> {
        let sql = ordered::<Product>();
        let products = ctx
            .guard("list_products", async {
                sqlx::query_as::<_, Product>(&sql)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| e.into_read_error("listing products"))
            })
            .await?;
        tracing::debug!(count = products.len(), "products listed");
        Ok(products)
    }

    #[tracing::instrument(name = "store::update_product", skip_all, fields(id = product.id))]
    async fn update_product(&self, ctx: &ExecContext, mut product: Product) -> Result<Product, DataError> {
        product.updated_at = Some(now_micros());

        let result = ctx
            .guard("update_product", async {
                bind_product_fields(sqlx::query(UPDATE_PRODUCT), &product)
                    .bind(product.updated_at)
                    .bind(product.id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| e.into_write_error("updating product"))
            })
            .await?;

        if result.rows_affected() == 0 {
            return Err(DataError::write(
                "updating product",
                NoRowsMatched {
                    table: Product::table_name(),
                    id: product.id,
                },
            ));
        }
        Ok(product)
    }

    #[tracing::instrument(name = "store::delete_product", skip(self, ctx))]
    async fn delete_product(&self, ctx: &ExecContext, id: i64) -> Result<(), DataError> {
        let result = ctx
            .guard("delete_product", async {
                sqlx::query(DELETE_PRODUCT)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| e.into_write_error("deleting product"))
            })
            .await?;
        tracing::debug!(rows = result.rows_affected(), "product delete executed");
        Ok(())
    }

    #[tracing::instrument(name = "store::create_order", skip_all, fields(items = order.items.len()))]
    async fn create_order(&self, ctx: &ExecContext, order: Order) -> Result<Order, DataError> {
        let order = with_transaction(&self.pool, ctx, "create_order", move |tx| {
            Box::pin(async move {
                let mut order = order;
                order.created_at = now_micros();
                order.updated_at = None;

                let header_sql = Order::insert_sql();
                let header = sqlx::query(&header_sql)
                    .bind(&order.payment_method)
                    .bind(order.tax_price)
                    .bind(order.shipping_price)
                    .bind(order.total_price)
                    .bind(order.created_at)
                    .bind(order.updated_at)
                    .execute(&mut **tx)
                    .await
                    .map_err(|e| e.into_write_error("inserting order"))?;
                let order_id = backend::generated_id(&header, "reading generated order id")?;
                order.id = order_id;

                let item_sql = OrderItem::insert_sql();
                for (index, item) in order.items.iter_mut().enumerate() {
                    let position = index + 1;
                    item.order_id = order_id;
                    let inserted = sqlx::query(&item_sql)
                        .bind(&item.name)
                        .bind(item.quantity)
                        .bind(&item.image)
                        .bind(item.price)
                        .bind(item.product_id)
                        .bind(item.order_id)
                        .execute(&mut **tx)
                        .await
                        .map_err(|e| e.into_write_error(&format!("inserting order item {position}")))?;
                    item.id = backend::generated_id(
                        &inserted,
                        format!("reading generated id of order item {position}"),
                    )?;
                }

                Ok::<_, DataError>(order)
            })
        })
        .await?;

        tracing::debug!(id = order.id, items = order.items.len(), "order created");
        Ok(order)
    }

    #[tracing::instrument(name = "store::get_order", skip(self, ctx))]
    async fn get_order(&self, ctx: &ExecContext, id: i64) -> Result<Order, DataError> {
        let header_sql = by_id::<Order>();
        let items_sql = format!(
            "{} WHERE order_id = ? ORDER BY {}",
            OrderItem::select_sql(),
            OrderItem::id_column()
        );

        ctx.guard("get_order", async {
            let mut order = sqlx::query_as::<_, Order>(&header_sql)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| e.into_read_error("getting order"))?
                .ok_or_else(|| not_found::<Order>(id))?;

            order.items = sqlx::query_as::<_, OrderItem>(&items_sql)
                .bind(id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| e.into_read_error("getting order items"))?;
            Ok::<_, DataError>(order)
        })
        .await
    }

    /// Headers and items are read with one query each and grouped in memory,
    /// which returns the same result as one item query per order.
    #[tracing::instrument(name = "store::list_orders", skip_all)]
    async fn list_orders(&self, ctx: &ExecContext) -> Result<Vec<Order>, DataError> {
        let headers_sql = ordered::<Order>();
        let items_sql = ordered::<OrderItem>();

        let orders = ctx
            .guard("list_orders", async {
                let mut orders = sqlx::query_as::<_, Order>(&headers_sql)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| e.into_read_error("listing orders"))?;
                if orders.is_empty() {
                    return Ok(orders);
                }

                let items = sqlx::query_as::<_, OrderItem>(&items_sql)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| e.into_read_error("getting order items"))?;

                let mut by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
                for item in items {
                    by_order.entry(item.order_id).or_default().push(item);
                }
                for order in &mut orders {
                    order.items = by_order.remove(&order.id).unwrap_or_default();
                }
                Ok::<_, DataError>(orders)
            })
            .await?;

        tracing::debug!(count = orders.len(), "orders listed");
        Ok(orders)
    }

    #[tracing::instrument(name = "store::delete_order", skip(self, ctx))]
    async fn delete_order(&self, ctx: &ExecContext, id: i64) -> Result<(), DataError> {
        with_transaction(&self.pool, ctx, "delete_order", move |tx| {
            Box::pin(async move {
                sqlx::query(DELETE_ORDER_ITEMS)
                    .bind(id)
                    .execute(&mut **tx)
                    .await
                    .map_err(|e| e.into_write_error("deleting order items"))?;
                sqlx::query(DELETE_ORDER)
                    .bind(id)
                    .execute(&mut **tx)
                    .await
                    .map_err(|e| e.into_write_error("deleting order"))?;
                Ok::<_, DataError>(())
            })
        })
        .await
    }
}
