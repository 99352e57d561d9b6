//! Aggregate read-model queries behind the competitor and trend endpoints.
//!
//! Every query takes an optional brand filter using the
//! `($1::TEXT IS NULL OR brand = $1)` pattern so the same statement serves
//! both the all-brands and single-brand views.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::DbError;

/// Per-competitor rollup for the competitors endpoint.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompetitorSummaryRow {
    pub competitor_name: String,
    pub brand: String,
    pub total_ads: i64,
    pub active_ads: i64,
    pub avg_days_running: f64,
    pub total_spend_min: i64,
    pub total_spend_max: i64,
    pub top_theme: Option<String>,
}

/// Spend summed by ISO week of launch.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WeeklySpendRow {
    pub week_start: NaiveDate,
    pub ad_count: i64,
    pub total_spend_min: i64,
    pub total_spend_max: i64,
}

/// Generic label/count/share row for theme, format and tone breakdowns.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DistributionRow {
    pub label: String,
    pub count: i64,
    pub pct: f64,
}

/// Ads bucketed by how long they have been running.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LongevityBucketRow {
    pub bucket: String,
    pub count: i64,
}

/// Highest-spending competitors by summed upper spend estimate.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TopSpenderRow {
    pub competitor_name: String,
    pub brand: String,
    pub ad_count: i64,
    pub total_spend_max: i64,
}

/// Headline numbers for brief generation, scoped to one brand's
/// competitor set.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BriefStatsRow {
    pub total_ads: i64,
    pub active_ads: i64,
    pub competitor_count: i64,
    pub avg_days_running: f64,
    pub total_spend_min: i64,
    pub total_spend_max: i64,
    pub longest_running_days: i64,
    pub top_spender: Option<String>,
}

/// One of the longest-surviving creatives in a brand's corpus.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LongestRunningRow {
    pub competitor_name: String,
    pub headline: String,
    pub days_running: i64,
    pub message_theme: String,
    pub emotional_tone: String,
    pub ad_format: String,
}

/// Returns one summary row per competitor, ordered by total upper spend.
///
/// `top_theme` is the competitor's most frequent message theme.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn competitor_summaries(
    pool: &PgPool,
    brand: Option<&str>,
) -> Result<Vec<CompetitorSummaryRow>, DbError> {
    let rows = sqlx::query_as::<_, CompetitorSummaryRow>(
        "SELECT \
             competitor_name, \
             brand, \
             COUNT(*) AS total_ads, \
             COUNT(*) FILTER (WHERE is_active) AS active_ads, \
             COALESCE(AVG(days_running), 0)::FLOAT8 AS avg_days_running, \
             COALESCE(SUM(estimated_spend_min), 0)::BIGINT AS total_spend_min, \
             COALESCE(SUM(estimated_spend_max), 0)::BIGINT AS total_spend_max, \
             MODE() WITHIN GROUP (ORDER BY message_theme) AS top_theme \
         FROM competitor_ads \
         WHERE ($1::TEXT IS NULL OR brand = $1) \
         GROUP BY competitor_name, brand \
         ORDER BY total_spend_max DESC",
    )
    .bind(brand)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns spend totals grouped by the week each ad launched, oldest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn weekly_spend(
    pool: &PgPool,
    brand: Option<&str>,
) -> Result<Vec<WeeklySpendRow>, DbError> {
    let rows = sqlx::query_as::<_, WeeklySpendRow>(
        "SELECT \
             DATE_TRUNC('week', start_date)::DATE AS week_start, \
             COUNT(*) AS ad_count, \
             COALESCE(SUM(estimated_spend_min), 0)::BIGINT AS total_spend_min, \
             COALESCE(SUM(estimated_spend_max), 0)::BIGINT AS total_spend_max \
         FROM competitor_ads \
         WHERE ($1::TEXT IS NULL OR brand = $1) \
         GROUP BY week_start \
         ORDER BY week_start",
    )
    .bind(brand)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Theme breakdown with each theme's share of the filtered corpus.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn theme_distribution(
    pool: &PgPool,
    brand: Option<&str>,
) -> Result<Vec<DistributionRow>, DbError> {
    distribution_by(pool, "message_theme", brand).await
}

/// Ad-format breakdown with shares.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn format_distribution(
    pool: &PgPool,
    brand: Option<&str>,
) -> Result<Vec<DistributionRow>, DbError> {
    distribution_by(pool, "ad_format", brand).await
}

/// Emotional-tone breakdown with shares.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn tone_distribution(
    pool: &PgPool,
    brand: Option<&str>,
) -> Result<Vec<DistributionRow>, DbError> {
    distribution_by(pool, "emotional_tone", brand).await
}

// `column` is always one of our own identifiers, never user input.
async fn distribution_by(
    pool: &PgPool,
    column: &str,
    brand: Option<&str>,
) -> Result<Vec<DistributionRow>, DbError> {
    let sql = format!(
        "SELECT \
             {column} AS label, \
             COUNT(*) AS count, \
             (COUNT(*)::FLOAT8 / SUM(COUNT(*)) OVER ()) AS pct \
         FROM competitor_ads \
         WHERE ($1::TEXT IS NULL OR brand = $1) \
         GROUP BY {column} \
         ORDER BY count DESC, label"
    );
    let rows = sqlx::query_as::<_, DistributionRow>(&sql)
        .bind(brand)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Ads bucketed by days running: 0-6, 7-13, 14-29, 30-59, 60+.
///
/// Buckets with no ads are omitted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn longevity_distribution(
    pool: &PgPool,
    brand: Option<&str>,
) -> Result<Vec<LongevityBucketRow>, DbError> {
    let rows = sqlx::query_as::<_, LongevityBucketRow>(
        "SELECT bucket, COUNT(*) AS count FROM ( \
             SELECT CASE \
                 WHEN days_running < 7 THEN '0-6' \
                 WHEN days_running < 14 THEN '7-13' \
                 WHEN days_running < 30 THEN '14-29' \
                 WHEN days_running < 60 THEN '30-59' \
                 ELSE '60+' \
             END AS bucket, \
             CASE \
                 WHEN days_running < 7 THEN 0 \
                 WHEN days_running < 14 THEN 1 \
                 WHEN days_running < 30 THEN 2 \
                 WHEN days_running < 60 THEN 3 \
                 ELSE 4 \
             END AS bucket_order \
             FROM competitor_ads \
             WHERE ($1::TEXT IS NULL OR brand = $1) \
         ) b \
         GROUP BY bucket, bucket_order \
         ORDER BY bucket_order",
    )
    .bind(brand)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Highest-spending competitors by summed upper spend estimate.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn top_spenders(
    pool: &PgPool,
    brand: Option<&str>,
    limit: i64,
) -> Result<Vec<TopSpenderRow>, DbError> {
    let rows = sqlx::query_as::<_, TopSpenderRow>(
        "SELECT \
             competitor_name, \
             brand, \
             COUNT(*) AS ad_count, \
             COALESCE(SUM(estimated_spend_max), 0)::BIGINT AS total_spend_max \
         FROM competitor_ads \
         WHERE ($1::TEXT IS NULL OR brand = $1) \
         GROUP BY competitor_name, brand \
         ORDER BY total_spend_max DESC \
         LIMIT $2",
    )
    .bind(brand)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// The longest-surviving creatives in one brand's corpus, longest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn longest_running_ads(
    pool: &PgPool,
    brand: &str,
    limit: i64,
) -> Result<Vec<LongestRunningRow>, DbError> {
    let rows = sqlx::query_as::<_, LongestRunningRow>(
        "SELECT \
             competitor_name, headline, days_running, \
             message_theme, emotional_tone, ad_format \
         FROM competitor_ads \
         WHERE brand = $1 \
         ORDER BY days_running DESC, ad_id \
         LIMIT $2",
    )
    .bind(brand)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Headline numbers across one brand's competitor corpus.
///
/// Always returns exactly one row; an empty corpus yields zeros.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn brief_stats(pool: &PgPool, brand: &str) -> Result<BriefStatsRow, DbError> {
    let row = sqlx::query_as::<_, BriefStatsRow>(
        "SELECT \
             COUNT(*) AS total_ads, \
             COUNT(*) FILTER (WHERE is_active) AS active_ads, \
             COUNT(DISTINCT competitor_name) AS competitor_count, \
             COALESCE(AVG(days_running), 0)::FLOAT8 AS avg_days_running, \
             COALESCE(SUM(estimated_spend_min), 0)::BIGINT AS total_spend_min, \
             COALESCE(SUM(estimated_spend_max), 0)::BIGINT AS total_spend_max, \
             COALESCE(MAX(days_running), 0) AS longest_running_days, \
             ( \
                 SELECT competitor_name FROM competitor_ads \
                 WHERE brand = $1 \
                 GROUP BY competitor_name \
                 ORDER BY SUM(estimated_spend_max) DESC \
                 LIMIT 1 \
             ) AS top_spender \
         FROM competitor_ads \
         WHERE brand = $1",
    )
    .bind(brand)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
