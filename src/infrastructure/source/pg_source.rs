//! PostgreSQL implementation of the rule source.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::RuleRecord;
use crate::domain::repositories::RuleSource;
use crate::error::AppError;

/// PostgreSQL-backed rule source.
///
/// Reads the full `redirect_rules` table on every fetch, ordered by
/// `sort_order` (and `id` as a stable tie-break). Row order is the
/// precedence contract: the matcher applies the first matching rule.
///
/// Queries are checked at runtime rather than compile time so the crate
/// builds without a live database; nullable columns surface as `None`
/// fields on [`RuleRecord`] and are skipped by the cache's validation.
pub struct PgRuleSource {
    pool: Arc<PgPool>,
}

impl PgRuleSource {
    /// Creates a new source with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RuleRow {
    source_path: Option<String>,
    target_path: Option<String>,
    status_code: Option<i32>,
    prefix_relative: Option<bool>,
}

impl From<RuleRow> for RuleRecord {
    fn from(row: RuleRow) -> Self {
        RuleRecord {
            source_path: row.source_path,
            target_path: row.target_path,
            status_code: row.status_code,
            prefix_relative: row.prefix_relative.unwrap_or(false),
        }
    }
}

#[async_trait]
impl RuleSource for PgRuleSource {
    async fn fetch_rules(&self) -> Result<Vec<RuleRecord>, AppError> {
        let rows = sqlx::query_as::<_, RuleRow>(
            r#"
            SELECT source_path, target_path, status_code, prefix_relative
            FROM redirect_rules
            ORDER BY sort_order, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RuleRecord::from).collect())
    }
}
