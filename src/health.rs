//! `GET /health` endpoint handler.
//!
//! Returns a [`HealthResponse`] JSON payload containing the server
//! version, uptime, route table source metadata, loaded route count,
//! and cumulative resolution statistics.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub table: TableHealth,
    pub stats: StatsResponse,
}

#[derive(Serialize, Deserialize)]
pub struct TableHealth {
    pub source: String,
    pub version: String,
    pub loaded_ago_seconds: u64,
    pub routes: usize,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub requests_matched: u64,
    pub requests_rejected: u64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    // Clone Arc<Router> (cheap refcount bump) to release the lock quickly
    let (router, source_name, version_str, loaded_ago) = {
        let table = state.table.read().await;
        let router = Arc::clone(&table.router);
        let version_str = match &table.version {
            crate::config::TableVersion::Hash(h) => h.get(..8).unwrap_or(h).to_string(),
        };
        (
            router,
            table.source_name.clone(),
            version_str,
            table.loaded_at.elapsed().as_secs(),
        )
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        table: TableHealth {
            source: source_name,
            version: version_str,
            loaded_ago_seconds: loaded_ago,
            routes: router.routes().len(),
        },
        stats: StatsResponse {
            requests_matched: state.stats.matched.load(Ordering::Relaxed),
            requests_rejected: state.stats.rejected.load(Ordering::Relaxed),
        },
    })
}
