use axum::Json;
use axum::extract::State;

use crate::api::error::ApiError;
use crate::api::handlers::grade::{ensure_graded, resolve_as_of};
use crate::api::state::AppState;
use crate::api::types::{PlotRequest, PlotResponse};
use crate::present::{self, FilterThresholds, PresentError};

pub async fn plot_view(
    State(state): State<AppState>,
    Json(req): Json<PlotRequest>,
) -> Result<Json<PlotResponse>, ApiError> {
    let as_of = resolve_as_of(req.as_of.as_deref())?;
    let weights = req.weights.unwrap_or_default();

    let (rows, _cached) = ensure_graded(&state, &req.upload_id, as_of, weights, false).await?;

    let thresholds = FilterThresholds {
        min_profitability: req.min_profitability,
        min_profit_prob: req.min_profit_prob,
    };
    let filtered = present::filter_records(&rows, &thresholds)
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let columns: Vec<String> = match req.columns {
        Some(cols) => cols,
        None => present::DEFAULT_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };
    let table = present::table_view(&filtered, &columns).map_err(|e| match e {
        PresentError::UnknownColumn(_) => ApiError::BadRequest(e.to_string()),
        other => ApiError::Unprocessable(other.to_string()),
    })?;

    let plot = present::plot_spec(&filtered);

    Ok(Json(PlotResponse {
        plot,
        table,
        total_rows: rows.len(),
        matching_rows: filtered.len(),
    }))
}
