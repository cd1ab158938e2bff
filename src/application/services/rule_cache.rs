//! Self-refreshing cache of redirect rule snapshots.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::entities::{RedirectRule, RuleSnapshot};
use crate::domain::repositories::RuleSource;
use crate::error::AppError;

/// Concurrency-safe cache in front of the rule source.
///
/// Holds the current immutable [`RuleSnapshot`] in an atomically
/// swappable slot and refreshes it on access once it outlives the TTL
/// (pull-based, no background timer).
///
/// # Concurrency
///
/// - The hot path is lock-free: a reader that finds a fresh snapshot
///   only performs an atomic load.
/// - All mutation funnels through [`Self::refresh`], which installs a
///   fully built snapshot with a single atomic store. Readers observe
///   either the previous snapshot or the new one, never a mixture.
/// - Concurrent callers that all observe staleness collapse onto one
///   in-flight fetch: the refresh path is guarded by an async mutex and
///   every waiter re-checks freshness after acquiring it, so a single
///   fetch serves all of them. Readers holding the previous snapshot
///   are never blocked by a slow fetch.
///
/// # Staleness
///
/// A refresh failure after at least one successful fetch keeps the
/// previous snapshot authoritative (serve-stale-on-error). Only a
/// cold-start failure, with no fallback snapshot to serve, surfaces an
/// error to the caller.
pub struct RuleCache {
    source: Arc<dyn RuleSource>,
    ttl: Duration,
    current: ArcSwapOption<RuleSnapshot>,
    refresh_gate: Mutex<()>,
}

impl RuleCache {
    /// Creates a cache over the given source with a fixed TTL.
    ///
    /// The TTL is typically derived from the configured cache lifespan
    /// in fractional minutes, see [`crate::config::Config::cache_ttl`].
    pub fn new(source: Arc<dyn RuleSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            current: ArcSwapOption::empty(),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Returns a snapshot no older than the TTL.
    ///
    /// Cold start (no snapshot ever fetched) performs a synchronous
    /// refresh and blocks the caller. An expired snapshot triggers a
    /// refresh before returning; the triggering caller pays the fetch
    /// latency. A refresh failure falls back to the previous snapshot
    /// when one exists.
    ///
    /// # Errors
    ///
    /// Fails only on a cold-start fetch failure, when there is no
    /// previous snapshot to serve.
    pub async fn snapshot(&self) -> Result<Arc<RuleSnapshot>, AppError> {
        if let Some(snapshot) = self.current.load_full() {
            if !snapshot.is_expired(self.ttl) {
                return Ok(snapshot);
            }
        }
        self.refresh().await
    }

    /// The currently installed snapshot, if any, regardless of age.
    ///
    /// Used by the health endpoint; never triggers a fetch.
    pub fn current(&self) -> Option<Arc<RuleSnapshot>> {
        self.current.load_full()
    }

    /// Best-effort eager refresh at startup.
    ///
    /// A failure is logged and left for the first request to retry;
    /// an unreachable source must not prevent the service from
    /// starting.
    pub async fn prime(&self) {
        match self.refresh().await {
            Ok(snapshot) => info!(rules = snapshot.len(), "Redirect rules primed"),
            Err(e) => warn!(
                "Failed to prime redirect rules, first request will retry: {}",
                e.message()
            ),
        }
    }

    /// Fetches the rule list and atomically installs a new snapshot.
    ///
    /// Guarded by the refresh mutex; waiters re-check freshness after
    /// acquiring it so one fetch serves every caller that collided on
    /// the same expiry.
    async fn refresh(&self) -> Result<Arc<RuleSnapshot>, AppError> {
        let _gate = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited on the gate.
        if let Some(snapshot) = self.current.load_full() {
            if !snapshot.is_expired(self.ttl) {
                return Ok(snapshot);
            }
        }

        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.current.store(Some(snapshot.clone()));
                debug!(rules = snapshot.len(), "Installed new rule snapshot");
                Ok(snapshot)
            }
            Err(e) => match self.current.load_full() {
                Some(stale) => {
                    warn!(
                        age_seconds = stale.age().as_secs_f64(),
                        "Rule refresh failed, serving previous snapshot: {}",
                        e.message()
                    );
                    Ok(stale)
                }
                None => Err(e),
            },
        }
    }

    /// Fetches raw records and validates them into a snapshot.
    ///
    /// Malformed records are skipped individually with a warning so one
    /// bad row cannot take down the remaining valid rules.
    async fn fetch_snapshot(&self) -> Result<RuleSnapshot, AppError> {
        let records = self.source.fetch_rules().await?;
        let total = records.len();

        let rules: Vec<RedirectRule> = records
            .into_iter()
            .filter_map(|record| match RedirectRule::try_from(record) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    warn!("Skipping malformed redirect rule: {e}");
                    None
                }
            })
            .collect();

        if rules.len() < total {
            warn!(
                skipped = total - rules.len(),
                kept = rules.len(),
                "Some redirect rules were malformed"
            );
        }

        Ok(RuleSnapshot::new(rules))
    }
}
