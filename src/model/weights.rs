use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Weights for the composite grade. The graded 0-1 components are each
/// multiplied by their weight and summed, so with the default 50/50 split
/// the composite lands in [20, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GradeWeights {
    /// Weight on the profit-probability grade.
    pub profit_probability: f64,
    /// Weight on the profitability grade.
    pub profitability: f64,
    /// Weight on the `10 / duration` recency term.
    pub duration: f64,
    /// Weight for a time-until-event term; no such term is computed yet,
    /// the field is carried so saved weight sets round-trip.
    pub time_until_event: f64,
}

impl Default for GradeWeights {
    fn default() -> Self {
        Self {
            profit_probability: 50.0,
            profitability: 50.0,
            duration: 0.0,
            time_until_event: 0.0,
        }
    }
}
