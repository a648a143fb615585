use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::model::EnrichedRecord;

pub const X_AXIS: &str = "Profit Prob";
pub const Y_AXIS: &str = "Profitability";
pub const COLOR_FIELD: &str = "Duration";
pub const SELECTION_FIELD: &str = "Row Index";

/// Every column the enriched table exposes.
pub const ALL_COLUMNS: &[&str] = &[
    "Row Index",
    "Symbol",
    "Market Price",
    "Exp Date",
    "Profit Prob",
    "Profitability",
    "Duration",
    "Grade",
];

/// Default display subset for the detail table.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "Row Index",
    "Symbol",
    "Grade",
    "Profitability",
    "Profit Prob",
    "Duration",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresentError {
    #[error("no data points in this range")]
    NoMatches,

    #[error("unknown column `{0}`")]
    UnknownColumn(String),
}

/// Inclusive minimums for the two filter controls (0-100 sliders in the
/// frontend, default 50 each).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterThresholds {
    pub min_profitability: f64,
    pub min_profit_prob: f64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            min_profitability: 50.0,
            min_profit_prob: 50.0,
        }
    }
}

/// Retain rows meeting both thresholds. An empty result is a typed
/// signal, not an empty collection, so callers cannot render an empty
/// plot by accident.
pub fn filter_records(
    records: &[EnrichedRecord],
    thresholds: &FilterThresholds,
) -> Result<Vec<EnrichedRecord>, PresentError> {
    let filtered: Vec<EnrichedRecord> = records
        .iter()
        .filter(|r| {
            r.profitability >= thresholds.min_profitability
                && r.profit_prob >= thresholds.min_profit_prob
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        return Err(PresentError::NoMatches);
    }
    Ok(filtered)
}

/// Axis domain padded by 5% of the observed range on both ends, so
/// boundary points don't sit on the plot edge.
pub fn padded_domain(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return [0.0, 0.0];
    }
    let pad = 0.05 * (max - min);
    [min - pad, max + pad]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub field: String,
    pub domain: [f64; 2],
}

/// One scatter point; serde names match the display columns so the
/// frontend can feed these straight into tooltips and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    #[serde(rename = "Row Index")]
    pub row_index: usize,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Profit Prob")]
    pub profit_prob: f64,
    #[serde(rename = "Profitability")]
    pub profitability: f64,
    #[serde(rename = "Duration")]
    pub duration: i64,
}

/// Scatter-plot specification for the chart frontend: padded axis
/// domains, duration color channel, row-index point selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    pub title: String,
    pub x: AxisSpec,
    pub y: AxisSpec,
    pub color_field: String,
    pub selection_field: String,
    pub tooltip: Vec<String>,
    pub points: Vec<PlotPoint>,
}

/// Build the scatter spec for an already-filtered, non-empty row set.
pub fn plot_spec(filtered: &[EnrichedRecord]) -> PlotSpec {
    PlotSpec {
        title: format!("{Y_AXIS} vs {X_AXIS} for Different Durations"),
        x: AxisSpec {
            field: X_AXIS.to_string(),
            domain: padded_domain(filtered.iter().map(|r| r.profit_prob)),
        },
        y: AxisSpec {
            field: Y_AXIS.to_string(),
            domain: padded_domain(filtered.iter().map(|r| r.profitability)),
        },
        color_field: COLOR_FIELD.to_string(),
        selection_field: SELECTION_FIELD.to_string(),
        tooltip: vec![
            SELECTION_FIELD.to_string(),
            "Symbol".to_string(),
            X_AXIS.to_string(),
            Y_AXIS.to_string(),
            COLOR_FIELD.to_string(),
        ],
        points: filtered
            .iter()
            .map(|r| PlotPoint {
                row_index: r.row_index,
                symbol: r.symbol.clone(),
                profit_prob: r.profit_prob,
                profitability: r.profitability,
                duration: r.duration,
            })
            .collect(),
    }
}

/// Column-projected table rows for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

fn cell(record: &EnrichedRecord, column: &str) -> Value {
    match column {
        "Row Index" => json!(record.row_index),
        "Symbol" => json!(record.symbol),
        "Market Price" => json!(record.market_price),
        "Exp Date" => json!(record.exp_date),
        "Profit Prob" => json!(record.profit_prob),
        "Profitability" => json!(record.profitability),
        "Duration" => json!(record.duration),
        "Grade" => json!(record.grade),
        // callers validate columns before reaching here
        _ => Value::Null,
    }
}

/// Project records onto a user-selected column subset. Unknown column
/// names are rejected rather than silently dropped.
pub fn table_view(records: &[EnrichedRecord], columns: &[String]) -> Result<TableView, PresentError> {
    for column in columns {
        if !ALL_COLUMNS.contains(&column.as_str()) {
            return Err(PresentError::UnknownColumn(column.clone()));
        }
    }
    let rows = records
        .iter()
        .map(|r| columns.iter().map(|c| cell(r, c)).collect())
        .collect();
    Ok(TableView {
        columns: columns.to_vec(),
        rows,
    })
}

fn fmt_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Print a table view in a fixed-width report layout.
pub fn print_table(view: &TableView) {
    let widths: Vec<usize> = view
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            view.rows
                .iter()
                .map(|row| fmt_cell(&row[i]).len())
                .chain([col.len()])
                .max()
                .unwrap_or(col.len())
        })
        .collect();
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len() + 2;

    println!("\n{}", "═".repeat(total));
    println!("  Graded Candidates");
    println!("{}", "═".repeat(total));
    print!(" ");
    for (col, &width) in view.columns.iter().zip(&widths) {
        print!("  {col:>width$}");
    }
    println!();
    println!("  {}", "-".repeat(total - 2));
    for row in &view.rows {
        print!(" ");
        for (value, &width) in row.iter().zip(&widths) {
            let text = fmt_cell(value);
            match value {
                Value::String(_) => print!("  {text:<width$}"),
                _ => print!("  {text:>width$}"),
            }
        }
        println!();
    }
    println!("{}", "═".repeat(total));
    println!("  {} row(s)", view.rows.len());
}
