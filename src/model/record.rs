use serde::{Deserialize, Serialize};

/// One row of the screener export as it arrives on disk. Percentages,
/// ratios, and dates are kept as text here; the pipeline parses them.
/// Extra columns in the export are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Market price column, named `Price~` in the export schema.
    #[serde(rename = "Price~")]
    pub market_price: String,
    /// Expiration date, `MM/DD/YYYY`.
    #[serde(rename = "Exp Date")]
    pub exp_date: String,
    /// Profit probability, e.g. `"45%"`.
    #[serde(rename = "Profit Prob")]
    pub profit_prob: String,
    /// Risk/reward ratio, e.g. `"4 to 1"`.
    #[serde(rename = "Risk/Reward")]
    pub risk_reward: String,
}

/// A graded candidate row. Serde names are the display column names the
/// chart frontend shows, so serialized output needs no further renaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// Original zero-based position in the upload, assigned before the
    /// footer row is dropped. Correlates a chart point with its table row.
    #[serde(rename = "Row Index")]
    pub row_index: usize,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Market Price")]
    pub market_price: String,
    #[serde(rename = "Exp Date")]
    pub exp_date: String,
    /// Profit probability as a number, e.g. 45.0.
    #[serde(rename = "Profit Prob")]
    pub profit_prob: f64,
    /// Normalized reward metric: `round(100 / risk_reward_ratio, 1)`.
    #[serde(rename = "Profitability")]
    pub profitability: f64,
    /// Inclusive days from the reference date to expiration.
    #[serde(rename = "Duration")]
    pub duration: i64,
    /// Composite 0-100 score under the configured weights.
    #[serde(rename = "Grade")]
    pub grade: f64,
}
