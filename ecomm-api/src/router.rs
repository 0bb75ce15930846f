use axum::Router;
use ecomm_core::health::health_routes;
use ecomm_core::{catch_panic_layer, default_trace};
use ecomm_data::CatalogStore;

use crate::controllers::{order_controller, product_controller};
use crate::state::AppState;

/// Build the application router around `state`.
///
/// The router is a plain value; callers own it and hand it to [`serve`](crate::server::serve)
/// or to a test client.
pub fn router<S: CatalogStore>(state: AppState<S>) -> Router {
    Router::<AppState<S>>::new()
        .merge(product_controller::routes::<S>())
        .merge(order_controller::routes::<S>())
        .merge(health_routes::<AppState<S>>())
        .with_state(state)
        .layer(catch_panic_layer())
        .layer(default_trace())
}
