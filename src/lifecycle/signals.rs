//! Signal handling.
//!
//! # Responsibilities
//! - Translate process signals into the shutdown broadcast
//!
//! # Design Decisions
//! - Ctrl-C everywhere; SIGTERM additionally on unix (container runtimes)

use crate::lifecycle::shutdown::Shutdown;

/// Wait for a termination signal, then trigger shutdown.
pub async fn shutdown_on_signal(shutdown: Shutdown) {
    wait_for_signal().await;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::error!(error = %e, "Failed to install SIGTERM handler");
            return std::future::pending().await;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
