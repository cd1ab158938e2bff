//! Core business data structures.

mod rule;
mod snapshot;

pub use rule::{RedirectRule, RedirectStatus, RuleError, RuleRecord};
pub use snapshot::RuleSnapshot;
