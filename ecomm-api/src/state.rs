use std::time::Duration;

use ecomm_data::{CatalogStore, ExecContext};
use tokio_util::sync::CancellationToken;

use crate::service::CatalogService;

/// Shared handler state.
pub struct AppState<S> {
    pub catalog: CatalogService<S>,
    pub request_timeout: Duration,
    pub shutdown: CancellationToken,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            request_timeout: self.request_timeout,
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<S: CatalogStore> AppState<S> {
    pub fn new(store: S, request_timeout: Duration, shutdown: CancellationToken) -> Self {
        Self {
            catalog: CatalogService::new(store),
            request_timeout,
            shutdown,
        }
    }

    /// Context for one request: cancelled on shutdown, bounded by the request timeout.
    pub fn request_context(&self) -> ExecContext {
        ExecContext::from_token(self.shutdown.child_token()).with_timeout(self.request_timeout)
    }
}
