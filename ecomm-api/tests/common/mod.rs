use std::time::Duration;

use ecomm_api::{router, AppState};
use ecomm_data_sqlx::SqlxStore;
use ecomm_test::{memory_store, TestApp};
use tokio_util::sync::CancellationToken;

pub struct Harness {
    pub app: TestApp,
    /// Shares the pool with the router's store.
    pub store: SqlxStore,
    pub shutdown: CancellationToken,
}

pub async fn harness() -> Harness {
    let store = memory_store().await;
    let shutdown = CancellationToken::new();
    let state = AppState::new(store.clone(), Duration::from_secs(5), shutdown.clone());
    Harness {
        app: TestApp::new(router(state)),
        store,
        shutdown,
    }
}
