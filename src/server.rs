//! Axum server setup, shared application state, and graceful shutdown.
//!
//! Contains [`AppState`] (the `Arc`-shared state holding the loaded
//! route table, stats, and uptime), [`build_app`] for constructing the
//! Axum router with middleware layers, and [`shutdown_signal`] for
//! SIGTERM / Ctrl+C handling. The compiled [`Router`](crate::router::Router)
//! sits behind an `RwLock` and is replaced wholesale on reload, never
//! edited in place.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::get;
use axum::Router;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::TableVersion;
use crate::health::health_handler;
use crate::resolve;

#[derive(Debug)]
pub struct LoadedTable {
    pub router: Arc<crate::router::Router>,
    pub version: TableVersion,
    pub source_name: String,
    pub loaded_at: Instant,
}

#[derive(Debug)]
pub struct Stats {
    pub matched: AtomicU64,
    pub rejected: AtomicU64,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matched: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
        }
    }
}

pub struct AppState {
    pub table: RwLock<LoadedTable>,
    pub start_time: Instant,
    pub stats: Stats,
}

pub fn build_app(state: Arc<AppState>, timeout_ms: u64) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(resolve::resolve_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_millis(timeout_ms))),
        )
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
