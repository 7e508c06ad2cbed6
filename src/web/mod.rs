//! The web form: an axum server rendering the translation page.

mod page;
mod routes;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

pub use page::{PageView, escape_html, render};
pub use routes::{AppState, create_routes};

/// Serves the form on `bind` until Ctrl+C.
pub async fn serve(state: AppState, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, "starting web form");
    crate::status!("Translator form running at http://{addr} (Ctrl+C to stop)");

    axum::serve(listener, create_routes(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    tracing::info!("web form stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
