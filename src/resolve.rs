//! HTTP resolution handler: the demo surface for the matcher.
//!
//! [`resolve_handler`] is the Axum fallback that receives every
//! non-`/health` request, matches it against the loaded route table,
//! and answers with the resolution as JSON. The two match failure kinds
//! map to their HTTP status codes: no path match is 404, a path match
//! with the wrong method is 405 with an `Allow` header listing the
//! aggregated method union.

use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::router::MatchError;
use crate::server::AppState;

/// Successful resolution payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resolution {
    pub route: String,
    pub params: HashMap<String, String>,
}

/// Failure payload; `allowed` is present only on 405.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

pub async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    req_headers: HeaderMap,
) -> Response {
    let path = uri.path();
    let correlation_id = req_headers
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

    // Clone the Arc<Router> (cheap refcount bump) to release the RwLock early
    let router = {
        let table = state.table.read().await;
        Arc::clone(&table.router)
    };

    match router.match_request(path, method.as_str()) {
        Ok(matched) => {
            state.stats.matched.fetch_add(1, Ordering::Relaxed);
            tracing::info!(
                correlation_id = %correlation_id,
                method = %method,
                path = %path,
                route = %matched.name,
                "request resolved"
            );
            (
                StatusCode::OK,
                [("x-correlation-id", correlation_id)],
                Json(Resolution {
                    route: matched.name,
                    params: matched.params,
                }),
            )
                .into_response()
        }
        Err(MatchError::NotFound { .. }) => {
            state.stats.rejected.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                correlation_id = %correlation_id,
                method = %method,
                path = %path,
                "no route matched"
            );
            (
                StatusCode::NOT_FOUND,
                [("x-correlation-id", correlation_id)],
                Json(ResolveFailure {
                    error: format!("no route matches '{path}'"),
                    allowed: None,
                }),
            )
                .into_response()
        }
        Err(MatchError::MethodNotAllowed { allowed, .. }) => {
            state.stats.rejected.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                correlation_id = %correlation_id,
                method = %method,
                path = %path,
                allowed = %allowed.join(", "),
                "method not allowed"
            );
            (
                StatusCode::METHOD_NOT_ALLOWED,
                [
                    ("allow", allowed.join(", ")),
                    ("x-correlation-id", correlation_id),
                ],
                Json(ResolveFailure {
                    error: format!("method {method} not allowed for '{path}'"),
                    allowed: Some(allowed),
                }),
            )
                .into_response()
        }
    }
}
