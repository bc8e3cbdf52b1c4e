//! Operational routes: liveness, store readiness, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

/// GET /health: the process is up; the store is not consulted.
async fn liveness() -> Json<Probe> {
    Json(Probe { status: "ok", store: None })
}

/// GET /ready: 503 while the cinema store does not answer a ping.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.cinemas.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Probe {
                status: "ok",
                store: Some("reachable"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "cinema store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Probe {
                    status: "degraded",
                    store: Some("unreachable"),
                }),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `/health`, `/ready` and `/version`. Readiness pings the store held in `state`.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}
