//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Cache status: snapshot presence, rule count, age
//! - everything else - Evaluated by the redirect middleware; unmatched
//!   paths fall through to a 404 response
//!
//! # Middleware
//!
//! - **Redirect** - Rule matching in front of every route
//! - **Tracing** - Structured request/response logging
//!
//! Request paths are deliberately not normalized (no trailing-slash
//! trimming): the prefix boundary rule in the matcher is the only
//! trailing-slash handling, so rules see paths exactly as sent.

use crate::api::handlers::health_handler;
use crate::api::middleware::{redirect, tracing};
use crate::error::AppError;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use serde_json::json;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            redirect::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Standalone deployments have no inner service to pass unmatched
/// requests to, so they terminate in a 404 here.
async fn fallback_handler() -> AppError {
    AppError::not_found("No redirect rule matches this path", json!({}))
}
