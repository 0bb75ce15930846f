use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use ecomm_core::validate;
use ecomm_data::CatalogStore;

use crate::error::AppError;
use crate::models::{CreateOrderRequest, OrderResponse};
use crate::state::AppState;

pub fn routes<S: CatalogStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/orders", get(list::<S>).post(create::<S>))
        .route("/orders/{id}", get(get_by_id::<S>).delete(delete::<S>))
}

#[tracing::instrument(name = "orders::list", skip_all)]
async fn list<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let ctx = state.request_context();
    let orders = state.catalog.list_orders(&ctx).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

#[tracing::instrument(name = "orders::get", skip(state))]
async fn get_by_id<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, AppError> {
    let ctx = state.request_context();
    let order = state.catalog.get_order(&ctx, id).await?;
    Ok(Json(order.into()))
}

#[tracing::instrument(name = "orders::create", skip_all)]
async fn create<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    validate(&body)?;
    let ctx = state.request_context();
    let order = state.catalog.create_order(&ctx, body.into_order()).await?;
    tracing::info!(id = order.id, items = order.items.len(), "order created");
    Ok((StatusCode::CREATED, Json(order.into())))
}

#[tracing::instrument(name = "orders::delete", skip(state))]
async fn delete<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let ctx = state.request_context();
    state.catalog.delete_order(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
