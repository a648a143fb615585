use serde::{Deserialize, Serialize};

use crate::model::{EnrichedRecord, GradeWeights};
use crate::present::{PlotSpec, TableView};

// ── Request types ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GradeRequest {
    /// Content key returned by the upload endpoint.
    pub upload_id: String,
    /// Reference date override, MM/DD/YYYY. Defaults to today.
    pub as_of: Option<String>,
    pub weights: Option<GradeWeights>,
    /// Invalidate the cached enriched table before recomputing.
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Deserialize)]
pub struct PlotRequest {
    pub upload_id: String,
    #[serde(default = "default_threshold")]
    pub min_profitability: f64,
    #[serde(default = "default_threshold")]
    pub min_profit_prob: f64,
    pub as_of: Option<String>,
    pub weights: Option<GradeWeights>,
    /// Display columns for the detail table.
    pub columns: Option<Vec<String>>,
}

fn default_threshold() -> f64 {
    50.0
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UploadResponse {
    pub upload_id: String,
    pub name: String,
    pub size: u64,
}

#[derive(Serialize)]
pub struct GradeResponse {
    pub upload_id: String,
    /// Reference date the durations were computed against, MM/DD/YYYY.
    pub as_of: String,
    /// Whether the enriched table came from the recompute cache.
    pub cached: bool,
    pub rows: Vec<EnrichedRecord>,
}

#[derive(Serialize)]
pub struct PlotResponse {
    pub plot: PlotSpec,
    pub table: TableView,
    pub total_rows: usize,
    pub matching_rows: usize,
}

#[derive(Serialize)]
pub struct DataManifestResponse {
    pub files: Vec<DataFileEntry>,
}

#[derive(Serialize)]
pub struct DataFileEntry {
    pub name: String,
    pub size: u64,
}
