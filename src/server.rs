//! HTTP server initialization and runtime setup.
//!
//! Handles rule source selection, cache construction, priming, and
//! Axum server lifecycle.

use crate::application::services::RuleCache;
use crate::config::Config;
use crate::domain::repositories::RuleSource;
use crate::infrastructure::source::{FileRuleSource, PgRuleSource};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Result, bail};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Rule source (PostgreSQL pool or JSON file)
/// - Rule cache with the configured TTL, primed eagerly
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - No rule source is configured
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
///
/// An unreachable rule source at startup is not fatal: priming logs a
/// warning and the first request pays the cold-start fetch instead.
pub async fn run(config: Config) -> Result<()> {
    let source: Arc<dyn RuleSource> = if let Some(database_url) = &config.database_url {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(database_url)
            .await?;
        tracing::info!("Rule source: PostgreSQL");
        Arc::new(PgRuleSource::new(Arc::new(pool)))
    } else if let Some(path) = &config.rules_file {
        tracing::info!(path = %path, "Rule source: JSON file");
        Arc::new(FileRuleSource::new(path.clone()))
    } else {
        bail!("either DATABASE_URL or RULES_FILE must be set");
    };

    let rule_cache = Arc::new(RuleCache::new(source, config.cache_ttl()));
    rule_cache.prime().await;

    let state = AppState { rule_cache };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
