use anyhow::Result;

/// Resolves once the process receives an interrupt or terminate signal.
pub async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
            _ = tokio::signal::ctrl_c() => {},
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(())
    }
}

/// Infallible variant of [`wait_for_shutdown`] for `with_graceful_shutdown`.
/// Falls back to plain ctrl-c if the platform handlers cannot be installed.
pub async fn shutdown_signal() {
    if let Err(e) = wait_for_shutdown().await {
        tracing::warn!(error = %e, "shutdown: signal handlers unavailable, waiting for ctrl-c");
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("shutdown: signal received");
}
