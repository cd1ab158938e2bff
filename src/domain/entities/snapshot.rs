//! Immutable point-in-time copy of the full rule set.

use std::time::{Duration, Instant};

use crate::domain::entities::RedirectRule;

/// An ordered rule set captured by a single refresh.
///
/// Order is significant: the first matching rule wins, so overlapping
/// prefixes are resolved by source order, not by longest prefix.
/// A snapshot is never mutated after construction; the cache shares it
/// with readers behind an `Arc` and replaces it wholesale.
#[derive(Debug)]
pub struct RuleSnapshot {
    rules: Vec<RedirectRule>,
    fetched_at: Instant,
}

impl RuleSnapshot {
    /// Wraps a freshly fetched rule list with the current timestamp.
    pub fn new(rules: Vec<RedirectRule>) -> Self {
        Self {
            rules,
            fetched_at: Instant::now(),
        }
    }

    /// The rules in their stored (precedence) order.
    pub fn rules(&self) -> &[RedirectRule] {
        &self.rules
    }

    /// Time elapsed since this snapshot was fetched.
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    /// Whether this snapshot has outlived the given TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
