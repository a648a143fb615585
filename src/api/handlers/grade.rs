use axum::Json;
use axum::extract::State;
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::types::{GradeRequest, GradeResponse};
use crate::data::{self, fields};
use crate::model::{EnrichedRecord, GradeWeights};
use crate::pipeline;
use crate::pipeline::cache::CacheEntry;
use crate::pipeline::clock::RunClock;

/// Resolve an optional MM/DD/YYYY override to the reference date.
pub(crate) fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDate, ApiError> {
    match as_of {
        Some(text) => fields::parse_exp_date(text)
            .map_err(|e| ApiError::BadRequest(format!("as_of: {e}"))),
        None => Ok(Local::now().date_naive()),
    }
}

pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Produce the enriched table for an upload, via the recompute cache when
/// its inputs match. Returns the rows and whether they were cached.
pub(crate) async fn ensure_graded(
    state: &AppState,
    upload_id: &str,
    as_of: NaiveDate,
    weights: GradeWeights,
    refresh: bool,
) -> Result<(Vec<EnrichedRecord>, bool), ApiError> {
    let path = {
        let mut inner = state.inner.write().await;
        if refresh {
            inner.cache.invalidate(upload_id);
        } else if let Some(entry) = inner.cache.get(upload_id, as_of, &weights) {
            return Ok((entry.rows.clone(), true));
        }
        inner.upload_path(upload_id)
    };

    if !path.exists() {
        return Err(ApiError::NotFound(format!(
            "no upload `{upload_id}`; POST the CSV to /api/data/upload first"
        )));
    }

    let clock = RunClock::fixed(as_of);
    let rows = tokio::task::spawn_blocking(move || -> Result<Vec<EnrichedRecord>, ApiError> {
        let records = data::load_records(&path).map_err(|e| ApiError::Internal(format!("{e:#}")))?;
        pipeline::enrich(&records, &clock, weights)
            .map_err(|e| ApiError::Unprocessable(e.to_string()))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("task join error: {e}")))??;

    let mut inner = state.inner.write().await;
    inner.cache.insert(
        upload_id.to_string(),
        CacheEntry {
            as_of,
            weights,
            rows: rows.clone(),
        },
    );
    info!(upload = upload_id, rows = rows.len(), as_of = %as_of, "graded upload");

    Ok((rows, false))
}

pub async fn grade_upload(
    State(state): State<AppState>,
    Json(req): Json<GradeRequest>,
) -> Result<Json<GradeResponse>, ApiError> {
    let as_of = resolve_as_of(req.as_of.as_deref())?;
    let weights = req.weights.unwrap_or_default();

    let (rows, cached) = ensure_graded(&state, &req.upload_id, as_of, weights, req.refresh).await?;

    Ok(Json(GradeResponse {
        upload_id: req.upload_id,
        as_of: fmt_date(as_of),
        cached,
        rows,
    }))
}
