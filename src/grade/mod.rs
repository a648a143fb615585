use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::GradeWeights;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    #[error("duration is zero; the composite grade divides by duration")]
    ZeroDuration,
}

/// One step of a piecewise grading function: values below `threshold`
/// (and above any earlier step) receive `grade`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GradeStep {
    pub threshold: f64,
    pub grade: f64,
}

/// A piecewise step function kept as data: an ordered list of steps plus
/// the open-ended grade for values at or above the last threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GradeScale {
    steps: Vec<GradeStep>,
    top: f64,
}

impl GradeScale {
    /// `steps` must be ordered by ascending threshold.
    pub fn new(steps: Vec<GradeStep>, top: f64) -> Self {
        debug_assert!(steps.windows(2).all(|w| w[0].threshold < w[1].threshold));
        Self { steps, top }
    }

    /// Grade of the first step whose threshold exceeds `value`; `top` once
    /// no threshold does. Values below the first threshold land on the
    /// first step's grade, so there is no "below all steps" case.
    pub fn grade(&self, value: f64) -> f64 {
        for step in &self.steps {
            if value < step.threshold {
                return step.grade;
            }
        }
        self.top
    }
}

/// Scale for the profitability metric (`100 / risk-reward`).
pub fn profitability_scale() -> GradeScale {
    GradeScale::new(
        [
            (60.0, 0.1),
            (70.0, 0.2),
            (80.0, 0.3),
            (90.0, 0.4),
            (100.0, 0.5),
            (125.0, 0.6),
            (150.0, 0.7),
            (200.0, 0.8),
            (300.0, 0.9),
        ]
        .map(|(threshold, grade)| GradeStep { threshold, grade })
        .to_vec(),
        1.0,
    )
}

/// Scale for the profit-probability percentage.
pub fn profit_prob_scale() -> GradeScale {
    GradeScale::new(
        [
            (30.0, 0.3),
            (35.0, 0.4),
            (40.0, 0.5),
            (45.0, 0.6),
            (50.0, 0.7),
            (55.0, 0.8),
            (60.0, 0.9),
        ]
        .map(|(threshold, grade)| GradeStep { threshold, grade })
        .to_vec(),
        1.0,
    )
}

/// Grades one candidate row: both step functions plus the weighted sum.
pub struct Grader {
    profitability: GradeScale,
    profit_prob: GradeScale,
    weights: GradeWeights,
}

impl Grader {
    pub fn new(weights: GradeWeights) -> Self {
        Self {
            profitability: profitability_scale(),
            profit_prob: profit_prob_scale(),
            weights,
        }
    }

    /// Composite grade:
    /// `round(prob_grade * w_prob + prof_grade * w_prof + (10/duration) * w_duration, 1)`.
    ///
    /// A zero duration is rejected before anything is computed, whatever
    /// the duration weight; a malformed expiration must not be masked by
    /// an inert term. Negative durations produce a finite term and pass
    /// through.
    pub fn grade(
        &self,
        profit_prob: f64,
        profitability: f64,
        duration: i64,
    ) -> Result<f64, GradeError> {
        if duration == 0 {
            return Err(GradeError::ZeroDuration);
        }
        let prob_part = self.profit_prob.grade(profit_prob) * self.weights.profit_probability;
        let prof_part = self.profitability.grade(profitability) * self.weights.profitability;
        let duration_part = 10.0 / duration as f64 * self.weights.duration;
        Ok(round1(prob_part + prof_part + duration_part))
    }
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
