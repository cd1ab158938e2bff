//! Trait for the external redirect rule source.

use crate::domain::entities::RuleRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Source of the full redirect rule list.
///
/// The rule cache depends only on this contract; where the rules live
/// (database, file, remote config service) is an infrastructure
/// concern. A fetch returns the complete current rule list in
/// precedence order — the cache never merges partial results.
///
/// The call may be slow (network or disk); the cache is responsible for
/// hiding that latency from readers.
///
/// # Implementations
///
/// - [`crate::infrastructure::source::PgRuleSource`] - PostgreSQL implementation
/// - [`crate::infrastructure::source::FileRuleSource`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleSource: Send + Sync {
    /// Fetches the full current rule list from the source.
    ///
    /// Records are returned raw; validation and malformed-record
    /// skipping happen in the cache so the policy is uniform across
    /// sources.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] when
    /// the source cannot be reached or produces unreadable data. The
    /// caller decides whether to serve stale data instead.
    async fn fetch_rules(&self) -> Result<Vec<RuleRecord>, AppError>;
}
