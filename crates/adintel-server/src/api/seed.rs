use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SeedQuery {
    pub clear_existing: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(super) struct SeedSummary {
    cleared: u64,
    inserted: usize,
    total_ads: i64,
    active_ads: i64,
    long_running: usize,
    by_brand: BTreeMap<String, usize>,
    by_competitor: BTreeMap<String, usize>,
}

/// Generate a fresh synthetic batch for the whole catalog and upsert it.
///
/// With `clear_existing=true`, previously seeded rows are deleted first;
/// externally sourced rows are never touched.
pub(super) async fn run_seed(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SeedQuery>,
) -> Result<Json<ApiResponse<SeedSummary>>, ApiError> {
    let cleared = if query.clear_existing.unwrap_or(false) {
        adintel_db::delete_synthetic_ads(&state.pool)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?
    } else {
        0
    };

    let records = adintel_synth::generate(&state.catalog).map_err(|e| {
        tracing::error!(error = %e, "batch generation failed");
        ApiError::new(req_id.0.clone(), "validation_error", e.to_string())
    })?;

    let long_running = records.iter().filter(|r| r.days_running >= 60).count();
    let mut by_brand: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_competitor: BTreeMap<String, usize> = BTreeMap::new();
    for record in &records {
        *by_brand.entry(record.brand.clone()).or_default() += 1;
        *by_competitor
            .entry(record.competitor_name.clone())
            .or_default() += 1;
    }

    let inserted = adintel_db::upsert_ads(&state.pool, &records)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let total_ads = adintel_db::count_ads(&state.pool, false)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let active_ads = adintel_db::count_ads(&state.pool, true)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    tracing::info!(cleared, inserted, total_ads, "seed complete");

    Ok(Json(ApiResponse {
        data: SeedSummary {
            cleared,
            inserted,
            total_ads,
            active_ads,
            long_running,
            by_brand,
            by_competitor,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
