//! Health check handler.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    rules_loaded: bool,
    rule_count: usize,
    snapshot_age_seconds: Option<f64>,
}

/// Reports whether a rule snapshot is loaded, how many rules it holds,
/// and how old it is.
///
/// # Endpoint
///
/// `GET /health`
///
/// Returns 200 when a snapshot is installed (even an expired one, since
/// serve-stale-on-error keeps it usable) and 503 before the first
/// successful fetch. Never triggers a refresh itself.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.rule_cache.current() {
        Some(snapshot) => (
            StatusCode::OK,
            Json(HealthBody {
                status: "ok",
                rules_loaded: true,
                rule_count: snapshot.len(),
                snapshot_age_seconds: Some(snapshot.age().as_secs_f64()),
            }),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthBody {
                status: "degraded",
                rules_loaded: false,
                rule_count: 0,
                snapshot_age_seconds: None,
            }),
        ),
    }
}
