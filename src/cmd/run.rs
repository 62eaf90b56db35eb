//! `wayfinder run`: serve the route table over HTTP.
//!
//! Loads the route table from a file source, compiles it into a
//! [`Router`](crate::router::Router), starts the Axum server with
//! graceful shutdown, and spawns a background refresh loop that
//! swaps in a freshly compiled table when the file changes.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::RunArgs;
use crate::config::{sources, RouteSource};
use crate::error::WayfinderError;
use crate::logging;
use crate::server::{self, AppState, LoadedTable, Stats};

pub async fn execute(args: RunArgs) -> Result<(), WayfinderError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let source = resolve_route_source(args.routes.as_deref()).await?;
    let (table, version) = source.load().await?;
    let router = Arc::new(table.compile()?);
    let route_count = router.routes().len();

    let loaded = tokio::sync::RwLock::new(LoadedTable {
        router,
        version,
        source_name: source.name().to_string(),
        loaded_at: Instant::now(),
    });

    let state = Arc::new(AppState {
        table: loaded,
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    // Shutdown signal: dropping shutdown_tx closes the channel and stops the refresh loop
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let refresh_state = state.clone();
    let poll_interval = args.poll_interval;
    let refresh_handle = tokio::spawn(async move {
        refresh_loop(refresh_state, source, poll_interval, shutdown_rx).await;
    });

    let app = server::build_app(state, args.timeout);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        routes = route_count,
        "wayfinder started"
    );

    let graceful_shutdown = async move {
        server::shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown)
        .await?;

    // Wait for the refresh task to finish (catches panics)
    if let Err(e) = refresh_handle.await {
        tracing::error!(error = %e, "route refresh task failed");
    }

    tracing::info!("wayfinder stopped");
    Ok(())
}

async fn resolve_route_source(
    explicit: Option<&std::path::Path>,
) -> Result<Box<dyn RouteSource>, WayfinderError> {
    if let Some(path) = explicit {
        return create_file_source(path);
    }

    // Auto-detect in current directory
    for name in super::TABLE_CANDIDATES {
        let path = PathBuf::from(name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::info!(path = %path.display(), "auto-detected route table");
            return create_file_source(&path);
        }
    }

    Err(WayfinderError::NoRouteSource {
        hint: "Provide --routes <file> or create one of wayfinder.{yaml,json,toml}.\n  \
               Run 'wayfinder init' to create a route table."
            .into(),
    })
}

fn create_file_source(path: &std::path::Path) -> Result<Box<dyn RouteSource>, WayfinderError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => Ok(Box::new(sources::yaml::new(path.to_path_buf()))),

        #[cfg(feature = "json")]
        "json" => Ok(Box::new(sources::json::new(path.to_path_buf()))),

        #[cfg(feature = "toml")]
        "toml" => Ok(Box::new(sources::toml_source::new(path.to_path_buf()))),

        other => Err(WayfinderError::UnsupportedFormat(other.to_string())),
    }
}

async fn refresh_loop(
    state: Arc<AppState>,
    source: Box<dyn RouteSource>,
    interval_secs: u64,
    mut shutdown: tokio::sync::watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
    interval.tick().await; // Skip first immediate tick

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = shutdown.changed() => {
                tracing::debug!("route refresh loop shutting down");
                return;
            }
        }

        let current_version = {
            let table = state.table.read().await;
            table.version.clone()
        };

        match source.has_changed(&current_version).await {
            Ok(true) => {
                tracing::info!("route table change detected, reloading");
                match reload(&*source).await {
                    Ok((router, version)) => {
                        let route_count = router.routes().len();
                        let mut loaded = state.table.write().await;
                        loaded.router = router;
                        loaded.version = version;
                        loaded.loaded_at = Instant::now();
                        drop(loaded);
                        tracing::info!(routes = route_count, "route table reloaded");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "reload failed, keeping current table");
                    }
                }
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(error = %e, "route table change check failed");
            }
        }
    }
}

/// Load and compile as one step so a table that parses but fails to
/// compile never replaces the running router.
async fn reload(
    source: &dyn RouteSource,
) -> Result<(Arc<crate::router::Router>, crate::config::TableVersion), WayfinderError> {
    let (table, version) = source.load().await?;
    let router = Arc::new(table.compile()?);
    Ok((router, version))
}
