//! Rule source implementations.
//!
//! Provides the [`crate::domain::repositories::RuleSource`] implementations:
//! - [`PgRuleSource`] - Production PostgreSQL-backed source
//! - [`FileRuleSource`] - JSON file source for database-less deployments and tests

mod file_source;
mod pg_source;

pub use file_source::FileRuleSource;
pub use pg_source::PgRuleSource;
