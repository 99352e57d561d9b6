use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ensure_known_brand, map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

const TOP_SPENDER_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
pub(super) struct WeeklySpendItem {
    week_start: NaiveDate,
    ad_count: i64,
    total_spend_min: i64,
    total_spend_max: i64,
}

#[derive(Debug, Serialize)]
pub(super) struct DistributionItem {
    label: String,
    count: i64,
    pct: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct LongevityItem {
    bucket: String,
    count: i64,
}

#[derive(Debug, Serialize)]
pub(super) struct TopSpenderItem {
    competitor_name: String,
    brand: String,
    ad_count: i64,
    total_spend_max: i64,
}

/// Full trends payload for the dashboard, assembled from the aggregate
/// queries over the (optionally brand-scoped) corpus.
#[derive(Debug, Serialize)]
pub(super) struct TrendsData {
    weekly_spend: Vec<WeeklySpendItem>,
    themes: Vec<DistributionItem>,
    formats: Vec<DistributionItem>,
    tones: Vec<DistributionItem>,
    longevity: Vec<LongevityItem>,
    top_spenders: Vec<TopSpenderItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrendsQuery {
    pub brand: Option<String>,
}

pub(super) async fn get_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TrendsQuery>,
) -> Result<Json<ApiResponse<TrendsData>>, ApiError> {
    let brand = query.brand.as_deref();
    ensure_known_brand(&state.catalog, &req_id.0, brand)?;

    let weekly = adintel_db::weekly_spend(&state.pool, brand)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let themes = adintel_db::theme_distribution(&state.pool, brand)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let formats = adintel_db::format_distribution(&state.pool, brand)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let tones = adintel_db::tone_distribution(&state.pool, brand)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let longevity = adintel_db::longevity_distribution(&state.pool, brand)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let spenders = adintel_db::top_spenders(&state.pool, brand, TOP_SPENDER_LIMIT)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = TrendsData {
        weekly_spend: weekly
            .into_iter()
            .map(|w| WeeklySpendItem {
                week_start: w.week_start,
                ad_count: w.ad_count,
                total_spend_min: w.total_spend_min,
                total_spend_max: w.total_spend_max,
            })
            .collect(),
        themes: distribution_items(themes),
        formats: distribution_items(formats),
        tones: distribution_items(tones),
        longevity: longevity
            .into_iter()
            .map(|b| LongevityItem {
                bucket: b.bucket,
                count: b.count,
            })
            .collect(),
        top_spenders: spenders
            .into_iter()
            .map(|s| TopSpenderItem {
                competitor_name: s.competitor_name,
                brand: s.brand,
                ad_count: s.ad_count,
                total_spend_max: s.total_spend_max,
            })
            .collect(),
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn distribution_items(rows: Vec<adintel_db::DistributionRow>) -> Vec<DistributionItem> {
    rows.into_iter()
        .map(|r| DistributionItem {
            label: r.label,
            count: r.count,
            pct: r.pct,
        })
        .collect()
}
