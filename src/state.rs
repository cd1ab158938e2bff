use std::sync::Arc;

use crate::application::services::RuleCache;

/// Shared application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub rule_cache: Arc<RuleCache>,
}
