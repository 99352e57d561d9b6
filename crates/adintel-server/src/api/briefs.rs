use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use adintel_brief::{
    build_prompt, compose_fallback, creative_gaps, BriefClient, BriefStats, LongRunner, Slice,
};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

const LONGEST_RUNNING_LIMIT: i64 = 5;

/// A stored brief, as returned by both generation and retrieval.
#[derive(Debug, Serialize)]
pub(super) struct BriefItem {
    id: i64,
    brand: String,
    markdown: String,
    stats: serde_json::Value,
    generated_at: DateTime<Utc>,
}

/// An on-the-fly brief that was composed without a model call and is not
/// stored.
#[derive(Debug, Serialize)]
pub(super) struct BriefPreview {
    brand: String,
    markdown: String,
    stats: BriefStats,
}

#[derive(Debug, Deserialize)]
pub(super) struct PreviewQuery {
    pub brand: String,
}

/// GET `/api/v1/brief?brand=` — brief straight from the stats, available
/// with or without an API key. A configured collaborator is tried first;
/// any failure falls back to the rule-based summary rather than erroring.
pub(super) async fn preview_brief(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<ApiResponse<BriefPreview>>, ApiError> {
    let stats = assemble_stats(&state, &req_id.0, &query.brand).await?;
    let markdown = match compose_with_collaborator(&state, &stats).await {
        Some(markdown) => markdown,
        None => compose_fallback(&stats),
    };

    Ok(Json(ApiResponse {
        data: BriefPreview {
            brand: query.brand,
            markdown,
            stats,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST `/api/v1/briefs/{brand}` — model-written brief, stored on success.
pub(super) async fn generate_brief(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(brand): Path<String>,
) -> Result<Json<ApiResponse<BriefItem>>, ApiError> {
    let Some(api_key) = state.brief.api_key.as_deref() else {
        return Err(ApiError::new(
            req_id.0,
            "service_unavailable",
            "ANTHROPIC_API_KEY is not configured; set it and restart",
        ));
    };

    let stats = assemble_stats(&state, &req_id.0, &brand).await?;
    let prompt = build_prompt(&stats);

    let client = BriefClient::with_base_url(
        api_key,
        &state.brief.model,
        state.brief.max_tokens,
        state.brief.timeout_secs,
        &state.brief.base_url,
    )
    .map_err(|e| {
        tracing::error!(error = %e, "brief client construction failed");
        ApiError::new(req_id.0.clone(), "internal_error", "brief client unavailable")
    })?;

    let markdown = client.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, brand = %brand, "brief generation failed");
        ApiError::new(req_id.0.clone(), "bad_gateway", e.to_string())
    })?;

    let stats_json = serde_json::to_value(&stats).map_err(|e| {
        tracing::error!(error = %e, "stats payload serialization failed");
        ApiError::new(req_id.0.clone(), "internal_error", "stats serialization failed")
    })?;

    let row = adintel_db::insert_brief(&state.pool, &brand, &markdown, &stats_json)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    tracing::info!(brand = %brand, brief_id = row.id, "brief generated and stored");

    Ok(Json(ApiResponse {
        data: BriefItem {
            id: row.id,
            brand: row.brand,
            markdown: row.markdown,
            stats: row.stats_json,
            generated_at: row.generated_at,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET `/api/v1/briefs/{brand}` — most recently stored brief.
pub(super) async fn get_latest_brief(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(brand): Path<String>,
) -> Result<Json<ApiResponse<BriefItem>>, ApiError> {
    let row = adintel_db::latest_brief(&state.pool, &brand)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: BriefItem {
            id: row.id,
            brand: row.brand,
            markdown: row.markdown,
            stats: row.stats_json,
            generated_at: row.generated_at,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Ask the collaborator for a brief, if one is configured. Returns `None`
/// when there is no API key or the call fails for any reason.
async fn compose_with_collaborator(state: &AppState, stats: &BriefStats) -> Option<String> {
    let api_key = state.brief.api_key.as_deref()?;

    let client = BriefClient::with_base_url(
        api_key,
        &state.brief.model,
        state.brief.max_tokens,
        state.brief.timeout_secs,
        &state.brief.base_url,
    )
    .map_err(|e| tracing::warn!(error = %e, "brief client construction failed"))
    .ok()?;

    match client.generate(&build_prompt(stats)).await {
        Ok(markdown) => Some(markdown),
        Err(e) => {
            tracing::warn!(error = %e, brand = %stats.brand, "collaborator unavailable, using fallback brief");
            None
        }
    }
}

/// Pull everything a brief needs out of the catalog and the corpus.
///
/// Fails with `not_found` for a brand missing from the catalog or one whose
/// corpus has not been seeded yet.
async fn assemble_stats(
    state: &AppState,
    req_id: &str,
    brand_key: &str,
) -> Result<BriefStats, ApiError> {
    let Some(brand) = state.catalog.brand(brand_key) else {
        return Err(ApiError::new(
            req_id.to_owned(),
            "not_found",
            format!("unknown brand '{brand_key}'"),
        ));
    };

    let totals = adintel_db::brief_stats(&state.pool, brand_key)
        .await
        .map_err(|e| map_db_error(req_id.to_owned(), &e))?;
    if totals.total_ads == 0 {
        return Err(ApiError::new(
            req_id.to_owned(),
            "not_found",
            format!("no ad data found for '{brand_key}'; seed the database first"),
        ));
    }

    let formats = adintel_db::format_distribution(&state.pool, Some(brand_key))
        .await
        .map_err(|e| map_db_error(req_id.to_owned(), &e))?;
    let themes = adintel_db::theme_distribution(&state.pool, Some(brand_key))
        .await
        .map_err(|e| map_db_error(req_id.to_owned(), &e))?;
    let tones = adintel_db::tone_distribution(&state.pool, Some(brand_key))
        .await
        .map_err(|e| map_db_error(req_id.to_owned(), &e))?;
    let longest = adintel_db::longest_running_ads(&state.pool, brand_key, LONGEST_RUNNING_LIMIT)
        .await
        .map_err(|e| map_db_error(req_id.to_owned(), &e))?;

    let theme_slices = slices(themes);
    let gaps = creative_gaps(&brand.themes, &theme_slices);

    Ok(BriefStats {
        brand: brand.key.clone(),
        brand_label: brand.label.clone(),
        competitors: brand.competitors.iter().map(|c| c.name.clone()).collect(),
        total_ads: totals.total_ads,
        active_ads: totals.active_ads,
        avg_days_running: totals.avg_days_running,
        format_distribution: slices(formats),
        theme_distribution: theme_slices,
        tone_distribution: slices(tones),
        longest_running: longest
            .into_iter()
            .map(|ad| LongRunner {
                competitor_name: ad.competitor_name,
                headline: ad.headline,
                days_running: ad.days_running,
                message_theme: ad.message_theme,
                emotional_tone: ad.emotional_tone,
                ad_format: ad.ad_format,
            })
            .collect(),
        gaps,
    })
}

// Analytics shares are fractions; the brief payload reports percent.
fn slices(rows: Vec<adintel_db::DistributionRow>) -> Vec<Slice> {
    rows.into_iter()
        .map(|r| Slice {
            label: r.label,
            count: r.count,
            pct: r.pct * 100.0,
        })
        .collect()
}
