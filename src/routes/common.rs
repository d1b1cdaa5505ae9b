//! Service routes: liveness, store readiness, build version, OpenAPI document.

use crate::openapi::openapi_document;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl ServiceStatus {
    const LIVE: Self = Self { status: "ok", database: None };
    const READY: Self = Self { status: "ok", database: Some("ok") };
    const DEGRADED: Self = Self { status: "degraded", database: Some("unavailable") };
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ServiceStatus>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(ServiceStatus::READY)),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(ServiceStatus::DEGRADED))
        }
    }
}

/// GET /health, GET /ready (pings the store), GET /version, GET /openapi.json.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(ServiceStatus::LIVE) }))
        .route("/ready", get(ready))
        .route(
            "/version",
            get(|| async {
                Json(BuildInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                })
            }),
        )
        .route("/openapi.json", get(|| async { Json(openapi_document()) }))
        .with_state(state)
}
