use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Bind `addr` and serve `router` until `shutdown` is cancelled.
///
/// In-flight requests are drained before this returns. Request contexts are
/// children of `shutdown`, so their store calls observe the cancellation too.
pub async fn serve(router: Router, addr: SocketAddr, shutdown: CancellationToken) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Cancel `shutdown` on Ctrl-C.
pub fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("shutdown signal received"),
            Err(e) => tracing::warn!(error = %e, "cannot listen for ctrl-c, shutting down"),
        }
        shutdown.cancel();
    });
}
