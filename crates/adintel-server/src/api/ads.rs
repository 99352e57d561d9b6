use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{
    ensure_known_brand, map_db_error, normalize_limit, ApiError, ApiResponse, AppState,
    ResponseMeta,
};

#[derive(Debug, Serialize)]
pub(super) struct AdItem {
    id: Uuid,
    ad_id: String,
    competitor_name: String,
    brand: String,
    vertical: String,
    ad_format: String,
    message_theme: String,
    emotional_tone: String,
    headline: String,
    body_text: String,
    cta: String,
    platform: String,
    estimated_spend_min: i64,
    estimated_spend_max: i64,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_active: bool,
    days_running: i64,
    num_cards: Option<i16>,
    country: String,
    source: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AdQuery {
    pub brand: Option<String>,
    pub competitor: Option<String>,
    pub theme: Option<String>,
    pub tone: Option<String>,
    pub format: Option<String>,
    pub active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub(super) async fn list_ads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<AdQuery>,
) -> Result<Json<ApiResponse<Vec<AdItem>>>, ApiError> {
    ensure_known_brand(&state.catalog, &req_id.0, query.brand.as_deref())?;

    let rows = adintel_db::list_ads(
        &state.pool,
        adintel_db::AdListFilters {
            brand: query.brand.as_deref(),
            competitor_name: query.competitor.as_deref(),
            message_theme: query.theme.as_deref(),
            emotional_tone: query.tone.as_deref(),
            ad_format: query.format.as_deref(),
            is_active: query.active,
            limit: normalize_limit(query.limit),
            offset: query.offset.unwrap_or(0).max(0),
        },
    )
    .await
    .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| AdItem {
            id: row.id,
            ad_id: row.ad_id,
            competitor_name: row.competitor_name,
            brand: row.brand,
            vertical: row.vertical,
            ad_format: row.ad_format,
            message_theme: row.message_theme,
            emotional_tone: row.emotional_tone,
            headline: row.headline,
            body_text: row.body_text,
            cta: row.cta,
            platform: row.platform,
            estimated_spend_min: row.estimated_spend_min,
            estimated_spend_max: row.estimated_spend_max,
            start_date: row.start_date,
            end_date: row.end_date,
            is_active: row.is_active,
            days_running: row.days_running,
            num_cards: row.num_cards,
            country: row.country,
            source: row.source,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
