use ecomm_api::{router, serve, AppState, DatabaseConfig, ServerConfig};
use ecomm_core::{init_tracing, EcommConfig};
use ecomm_data_sqlx::{ensure_schema, SqlxStore};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config = EcommConfig::load("dev")?;
    let server: ServerConfig = config.section()?;
    let database: DatabaseConfig = config.section()?;
    tracing::info!(profile = config.profile(), "starting ecomm-api");

    let store = SqlxStore::connect(&database.url, database.max_connections).await?;
    if database.init_schema {
        ensure_schema(store.pool()).await?;
    }

    let shutdown = CancellationToken::new();
    ecomm_api::server::cancel_on_ctrl_c(shutdown.clone());

    let state = AppState::new(store, server.request_timeout, shutdown.clone());
    serve(router(state), server.addr()?, shutdown).await?;
    Ok(())
}
