//! Graceful shutdown trigger for hosts.

use anyhow::{Context, Result};

/// Resolves once the process is asked to stop (Ctrl+C, or SIGTERM on unix).
///
/// # Errors
/// Returns an error if a signal listener cannot be installed.
pub async fn wait_for_shutdown() -> Result<()> {
    let signal = tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res.context("failed to listen for Ctrl+C")?;
            "SIGINT"
        }
        res = terminate() => {
            res?;
            "SIGTERM"
        }
    };

    tracing::info!(signal, "shutdown requested, draining connections");
    Ok(())
}

#[cfg(unix)]
async fn terminate() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    signal(SignalKind::terminate())
        .context("failed to install SIGTERM handler")?
        .recv()
        .await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> Result<()> {
    std::future::pending().await
}
