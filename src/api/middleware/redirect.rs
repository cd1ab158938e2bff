//! Redirect middleware short-circuiting matched request paths.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use crate::domain::entities::RedirectStatus;
use crate::domain::matcher::{RuleMatch, find_redirect};
use crate::state::AppState;

/// Checks every request path against the current rule snapshot.
///
/// # Request Flow
///
/// 1. Ask the rule cache for a snapshot (refreshing it when stale)
/// 2. Run the matcher on the URI path
/// 3. On a match, respond with the rule's status code and a `Location`
///    header equal to the computed target
/// 4. Otherwise pass the request to the inner service unmodified
///
/// # Degradation
///
/// A cache error (cold start with a failing source) is logged and the
/// request passes through; serving no redirect is always preferred over
/// failing the request path.
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match state.rule_cache.snapshot().await {
        Ok(snapshot) => {
            if let Some(rule_match) = find_redirect(&snapshot, req.uri().path()) {
                debug!(
                    path = req.uri().path(),
                    location = %rule_match.location,
                    status = rule_match.status.as_u16(),
                    "Redirecting request"
                );
                if let Some(response) = redirect_response(&rule_match) {
                    return response;
                }
            }
        }
        Err(e) => {
            error!(
                "No redirect snapshot available, passing request through: {}",
                e.message()
            );
        }
    }

    next.run(req).await
}

/// Builds the redirect response for a matched rule.
///
/// Returns `None` when the computed target is not a valid header value;
/// such a rule is logged and treated as a non-match.
fn redirect_response(rule_match: &RuleMatch) -> Option<Response> {
    let location = match HeaderValue::from_str(&rule_match.location) {
        Ok(value) => value,
        Err(_) => {
            warn!(
                location = %rule_match.location,
                "Computed redirect target is not a valid Location header"
            );
            return None;
        }
    };

    let status = match rule_match.status {
        RedirectStatus::Permanent => StatusCode::MOVED_PERMANENTLY,
        RedirectStatus::Temporary => StatusCode::FOUND,
    };

    Some((status, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_response_sets_status_and_location() {
        let response = redirect_response(&RuleMatch {
            location: "/campaigns/targetcampaign".to_string(),
            status: RedirectStatus::Temporary,
        })
        .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/campaigns/targetcampaign"
        );
    }

    #[test]
    fn invalid_location_is_rejected() {
        assert!(
            redirect_response(&RuleMatch {
                location: "/bad\nlocation".to_string(),
                status: RedirectStatus::Permanent,
            })
            .is_none()
        );
    }
}
