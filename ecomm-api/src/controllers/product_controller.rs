use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use ecomm_core::validate;
use ecomm_data::CatalogStore;

use crate::error::AppError;
use crate::models::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::state::AppState;

pub fn routes<S: CatalogStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/products", get(list::<S>).post(create::<S>))
        .route(
            "/products/{id}",
            get(get_by_id::<S>).patch(update::<S>).delete(delete::<S>),
        )
}

#[tracing::instrument(name = "products::list", skip_all)]
async fn list<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let ctx = state.request_context();
    let products = state.catalog.list_products(&ctx).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

#[tracing::instrument(name = "products::get", skip(state))]
async fn get_by_id<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let ctx = state.request_context();
    let product = state.catalog.get_product(&ctx, id).await?;
    Ok(Json(product.into()))
}

#[tracing::instrument(name = "products::create", skip_all)]
async fn create<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    validate(&body)?;
    let ctx = state.request_context();
    let product = state.catalog.create_product(&ctx, body.into_product()).await?;
    tracing::info!(id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Read, merge the present fields, write back.
#[tracing::instrument(name = "products::update", skip(state, body))]
async fn update<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    validate(&body)?;
    let ctx = state.request_context();
    let mut product = state.catalog.get_product(&ctx, id).await?;
    body.apply(&mut product);
    let product = state.catalog.update_product(&ctx, product).await?;
    Ok(Json(product.into()))
}

#[tracing::instrument(name = "products::delete", skip(state))]
async fn delete<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let ctx = state.request_context();
    state.catalog.delete_product(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
