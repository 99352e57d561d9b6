//! Persistence for competitor ad records: seeding writes and filtered reads.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use adintel_synth::AdRecord;

use crate::DbError;

/// Stored ad row. Enum-ish columns (`ad_format`, `emotional_tone`,
/// `platform`) come back as their stored text form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdRow {
    pub id: Uuid,
    pub ad_id: String,
    pub competitor_name: String,
    pub competitor_page_id: String,
    pub brand: String,
    pub vertical: String,
    pub ad_format: String,
    pub message_theme: String,
    pub emotional_tone: String,
    pub headline: String,
    pub body_text: String,
    pub cta: String,
    pub platform: String,
    pub estimated_spend_min: i64,
    pub estimated_spend_max: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub days_running: i64,
    pub num_cards: Option<i16>,
    pub country: String,
    pub source: String,
}

/// Input filters for ad listing. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct AdListFilters<'a> {
    pub brand: Option<&'a str>,
    pub competitor_name: Option<&'a str>,
    pub message_theme: Option<&'a str>,
    pub emotional_tone: Option<&'a str>,
    pub ad_format: Option<&'a str>,
    pub is_active: Option<bool>,
    pub limit: i64,
    pub offset: i64,
}

/// Upsert a batch of ad records keyed on `ad_id`.
///
/// Returns the number of rows written. All upserts run inside a single
/// transaction; if any operation fails the entire batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn upsert_ads(pool: &PgPool, records: &[AdRecord]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for record in records {
        sqlx::query(
            "INSERT INTO competitor_ads ( \
                 id, ad_id, competitor_name, competitor_page_id, brand, vertical, \
                 ad_format, message_theme, emotional_tone, headline, body_text, cta, \
                 platform, estimated_spend_min, estimated_spend_max, start_date, \
                 end_date, is_active, days_running, num_cards, country, source) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                     $15, $16, $17, $18, $19, $20, $21, $22) \
             ON CONFLICT (ad_id) DO UPDATE SET \
                 headline = EXCLUDED.headline, \
                 body_text = EXCLUDED.body_text, \
                 cta = EXCLUDED.cta, \
                 estimated_spend_min = EXCLUDED.estimated_spend_min, \
                 estimated_spend_max = EXCLUDED.estimated_spend_max, \
                 end_date = EXCLUDED.end_date, \
                 is_active = EXCLUDED.is_active, \
                 days_running = EXCLUDED.days_running, \
                 updated_at = NOW()",
        )
        .bind(record.id)
        .bind(&record.ad_id)
        .bind(&record.competitor_name)
        .bind(&record.competitor_page_id)
        .bind(&record.brand)
        .bind(&record.vertical)
        .bind(record.ad_format.as_str())
        .bind(&record.message_theme)
        .bind(record.emotional_tone.as_str())
        .bind(&record.headline)
        .bind(&record.body_text)
        .bind(&record.cta)
        .bind(record.platform.as_str())
        .bind(record.estimated_spend_min)
        .bind(record.estimated_spend_max)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.is_active)
        .bind(record.days_running)
        .bind(record.num_cards)
        .bind(&record.country)
        .bind(&record.source)
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}

/// Delete all synthesized rows (`source = 'mock'`), returning how many were
/// removed. Rows from other sources are untouched.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn delete_synthetic_ads(pool: &PgPool) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM competitor_ads WHERE source = 'mock'")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Count stored ads, optionally restricted to active ones.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_ads(pool: &PgPool, only_active: bool) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM competitor_ads WHERE ($1 = FALSE OR is_active = TRUE)",
    )
    .bind(only_active)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Return ads matching the filters, newest start date first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_ads(pool: &PgPool, filters: AdListFilters<'_>) -> Result<Vec<AdRow>, DbError> {
    let rows = sqlx::query_as::<_, AdRow>(
        "SELECT \
             id, ad_id, competitor_name, competitor_page_id, brand, vertical, \
             ad_format, message_theme, emotional_tone, headline, body_text, cta, \
             platform, estimated_spend_min, estimated_spend_max, start_date, \
             end_date, is_active, days_running, num_cards, country, source \
         FROM competitor_ads \
         WHERE ($1::TEXT IS NULL OR brand = $1) \
           AND ($2::TEXT IS NULL OR competitor_name = $2) \
           AND ($3::TEXT IS NULL OR message_theme = $3) \
           AND ($4::TEXT IS NULL OR emotional_tone = $4) \
           AND ($5::TEXT IS NULL OR ad_format = $5) \
           AND ($6::BOOLEAN IS NULL OR is_active = $6) \
         ORDER BY start_date DESC, ad_id \
         LIMIT $7 OFFSET $8",
    )
    .bind(filters.brand)
    .bind(filters.competitor_name)
    .bind(filters.message_theme)
    .bind(filters.emotional_tone)
    .bind(filters.ad_format)
    .bind(filters.is_active)
    .bind(filters.limit)
    .bind(filters.offset)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
