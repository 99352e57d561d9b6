use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ensure_known_brand, map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct CompetitorItem {
    competitor_name: String,
    brand: String,
    total_ads: i64,
    active_ads: i64,
    avg_days_running: f64,
    total_spend_min: i64,
    total_spend_max: i64,
    top_theme: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompetitorQuery {
    pub brand: Option<String>,
}

pub(super) async fn list_competitors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CompetitorQuery>,
) -> Result<Json<ApiResponse<Vec<CompetitorItem>>>, ApiError> {
    ensure_known_brand(&state.catalog, &req_id.0, query.brand.as_deref())?;

    let rows = adintel_db::competitor_summaries(&state.pool, query.brand.as_deref())
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| CompetitorItem {
            competitor_name: row.competitor_name,
            brand: row.brand,
            total_ads: row.total_ads,
            active_ads: row.active_ads,
            avg_days_running: row.avg_days_running,
            total_spend_min: row.total_spend_min,
            total_spend_max: row.total_spend_max,
            top_theme: row.top_theme,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
