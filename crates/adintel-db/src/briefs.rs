//! Storage for generated weekly briefs.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use crate::DbError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BriefRow {
    pub id: i64,
    pub brand: String,
    pub markdown: String,
    pub stats_json: Value,
    pub generated_at: DateTime<Utc>,
}

/// Store a generated brief and return the stored row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_brief(
    pool: &PgPool,
    brand: &str,
    markdown: &str,
    stats: &Value,
) -> Result<BriefRow, DbError> {
    let row = sqlx::query_as::<_, BriefRow>(
        "INSERT INTO weekly_briefs (brand, markdown, stats_json) \
         VALUES ($1, $2, $3) \
         RETURNING id, brand, markdown, stats_json, generated_at",
    )
    .bind(brand)
    .bind(markdown)
    .bind(stats)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch the most recently generated brief for a brand.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no brief has been generated for the
/// brand, or [`DbError::Sqlx`] on query failure.
pub async fn latest_brief(pool: &PgPool, brand: &str) -> Result<BriefRow, DbError> {
    sqlx::query_as::<_, BriefRow>(
        "SELECT id, brand, markdown, stats_json, generated_at \
         FROM weekly_briefs \
         WHERE brand = $1 \
         ORDER BY generated_at DESC, id DESC \
         LIMIT 1",
    )
    .bind(brand)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)
}
