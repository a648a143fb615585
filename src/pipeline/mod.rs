pub mod cache;
pub mod clock;

use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{info, warn};

use crate::data::{self, fields};
use crate::grade::{GradeError, Grader, round1};
use crate::model::{EnrichedRecord, GradeWeights, RawRecord};
use crate::present;

use clock::RunClock;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("row {row_index} ({symbol}): {source}")]
    Field {
        row_index: usize,
        symbol: String,
        #[source]
        source: fields::FieldError,
    },

    #[error("row {row_index} ({symbol}): {source}")]
    Grade {
        row_index: usize,
        symbol: String,
        #[source]
        source: GradeError,
    },
}

fn field_err(row_index: usize, symbol: &str, source: fields::FieldError) -> PipelineError {
    warn!(row = row_index, symbol, %source, "malformed field, aborting run");
    PipelineError::Field {
        row_index,
        symbol: symbol.to_string(),
        source,
    }
}

/// Enrich a raw table: assign row indices, drop the trailing footer row,
/// parse the formatted fields, compute durations against `clock`, and
/// grade every row. Any single row failing aborts the whole run; there is
/// no partial output.
pub fn enrich(
    records: &[RawRecord],
    clock: &RunClock,
    weights: GradeWeights,
) -> Result<Vec<EnrichedRecord>, PipelineError> {
    let grader = Grader::new(weights);

    // The last row of the export is a totals footer, never data. Row
    // indices are original positions, so dropping the tail leaves them
    // untouched.
    let keep = records.len().saturating_sub(1);
    let mut out = Vec::with_capacity(keep);

    for (row_index, raw) in records[..keep].iter().enumerate() {
        let profit_prob = fields::parse_percent(&raw.profit_prob)
            .map_err(|e| field_err(row_index, &raw.symbol, e))?;
        let ratio = fields::parse_ratio(&raw.risk_reward)
            .map_err(|e| field_err(row_index, &raw.symbol, e))?;
        let profitability = round1(100.0 / ratio);
        let exp_date = fields::parse_exp_date(&raw.exp_date)
            .map_err(|e| field_err(row_index, &raw.symbol, e))?;
        let duration = clock.days_until(exp_date);

        let grade = grader
            .grade(profit_prob, profitability, duration)
            .map_err(|source| PipelineError::Grade {
                row_index,
                symbol: raw.symbol.clone(),
                source,
            })?;

        out.push(EnrichedRecord {
            row_index,
            symbol: raw.symbol.clone(),
            market_price: raw.market_price.clone(),
            exp_date: raw.exp_date.clone(),
            profit_prob,
            profitability,
            duration,
            grade,
        });
    }

    Ok(out)
}

/// Configuration for a `grade` CLI run.
pub struct GradeConfig {
    pub input: PathBuf,
    /// Reference date override, MM/DD/YYYY.
    pub as_of: Option<String>,
    pub min_profitability: f64,
    pub min_profit_prob: f64,
    pub columns: Option<Vec<String>>,
    pub output: Option<PathBuf>,
    pub plot_spec: Option<PathBuf>,
}

/// Run the grading pipeline from the CLI.
pub fn run(config: &GradeConfig) -> Result<()> {
    let records = data::load_records(&config.input)?;

    let clock = match &config.as_of {
        Some(text) => RunClock::fixed(
            fields::parse_exp_date(text).with_context(|| format!("parsing --as-of `{text}`"))?,
        ),
        None => RunClock::today(),
    };

    info!(
        rows = records.len(),
        as_of = %clock.as_of(),
        "grading candidate table"
    );

    let enriched = enrich(&records, &clock, GradeWeights::default())?;

    let thresholds = present::FilterThresholds {
        min_profitability: config.min_profitability,
        min_profit_prob: config.min_profit_prob,
    };

    let filtered = match present::filter_records(&enriched, &thresholds) {
        Ok(rows) => rows,
        Err(present::PresentError::NoMatches) => {
            println!("No data points in this range.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let columns: Vec<String> = match &config.columns {
        Some(cols) => cols.clone(),
        None => present::DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
    };
    let view = present::table_view(&filtered, &columns)?;
    present::print_table(&view);

    if let Some(ref output_path) = config.output {
        let json = serde_json::to_string_pretty(&filtered)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("writing {}", output_path.display()))?;
        info!(path = %output_path.display(), "wrote enriched rows");
    }

    if let Some(ref spec_path) = config.plot_spec {
        let spec = present::plot_spec(&filtered);
        let json = serde_json::to_string_pretty(&spec)?;
        std::fs::write(spec_path, json)
            .with_context(|| format!("writing {}", spec_path.display()))?;
        info!(path = %spec_path.display(), "wrote plot spec");
    }

    Ok(())
}
