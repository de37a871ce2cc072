//! Producer analytics endpoint

use axum::{Json, extract::State};

use awards::PrizeIntervals;

use crate::AppState;
use crate::api_error::ApiError;

/// GET /producers/awards-interval
///
/// Producers with the shortest and the longest gap between two consecutive
/// wins. Always 200 when the catalog can be read; an empty catalog gives
/// `{"min": [], "max": []}`.
pub async fn awards_interval(
    State(state): State<AppState>,
) -> Result<Json<PrizeIntervals>, ApiError> {
    let intervals = state.catalog.prize_intervals()?;
    tracing::debug!(
        "awards-interval: {} min, {} max",
        intervals.min.len(),
        intervals.max.len()
    );
    Ok(Json(intervals))
}
