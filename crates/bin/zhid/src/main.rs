//! # zhid — Zhi-Server admin console host
//!
//! Composition root that wires configuration, logging and the HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Load the compiled console bundle
//! - Build the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the HTTP adapter's wiring.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;
use zhi_adapter_http_axum::state::AppState;

use crate::config::Config;

/// How long in-flight connections may take to drain once shutdown starts.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let state = AppState::load(&config.dashboard.dist_dir)?;
    let app = zhi_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        dist_dir = %config.dashboard.dist_dir.display(),
        "zhid listening, console at /admin/"
    );

    let (signalled_tx, signalled_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            if signalled_tx.send(()).is_err() {
                tracing::debug!("shutdown deadline already gone");
            }
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        () = shutdown_deadline(signalled_rx) => {
            tracing::warn!(grace = ?SHUTDOWN_GRACE, "connections still open, forcing shutdown");
        }
    }

    tracing::info!("zhid stopped");
    Ok(())
}

/// Resolve [`SHUTDOWN_GRACE`] after shutdown was signalled. Never resolves
/// if the server finished without a signal.
async fn shutdown_deadline(signalled: oneshot::Receiver<()>) {
    if signalled.await.is_ok() {
        tokio::time::sleep(SHUTDOWN_GRACE).await;
    } else {
        std::future::pending::<()>().await;
    }
}

/// Resolve when SIGINT (Ctrl-C) or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn should_expire_deadline_after_grace_period() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        let started = tokio::time::Instant::now();
        shutdown_deadline(rx).await;
        assert!(started.elapsed() >= SHUTDOWN_GRACE);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_expire_deadline_without_signal() {
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);

        let result = tokio::time::timeout(Duration::from_secs(60), shutdown_deadline(rx)).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_expire_deadline_before_grace_period() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        let result = tokio::time::timeout(SHUTDOWN_GRACE / 2, shutdown_deadline(rx)).await;
        assert!(result.is_err());
    }
}
