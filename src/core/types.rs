//! Assessment records consumed by the engine and the trace it produces.
//!
//! Field names follow the wire format of the assessment/persistence layer
//! and must not be renamed.

use super::lenient;
use super::score::Score;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Category name to score, each expected in [0, 100] but not trusted.
pub type CategoryScoreMap = BTreeMap<String, f64>;

/// A single usability criterion with its point budget and assigned score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeuristicEntry {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub principle: Option<String>,

    /// Maximum points for this criterion; entries without a positive value are skipped.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub max_points: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub evaluation_focus: Option<String>,
}

impl HeuristicEntry {
    pub fn new(code: impl Into<String>, principle: impl Into<String>, max_points: f64, score: f64) -> Self {
        Self {
            code: Some(code.into()),
            principle: Some(principle.into()),
            max_points: Some(max_points),
            score: Some(score),
            justification: None,
            evaluation_focus: None,
        }
    }

    /// Shorthand for an entry without code or principle text.
    pub fn points(max_points: f64, score: f64) -> Self {
        Self {
            max_points: Some(max_points),
            score: Some(score),
            ..Self::default()
        }
    }
}

/// Externally computed bias-adjusted overall score. Opaque to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasOverlay {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub weighted_overall: Option<f64>,
}

/// Auditable breakdown of how a frame's final score was reached.
///
/// Fields are present only when the corresponding input was available;
/// an absent field is never reported as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugTrace {
    #[serde(default, deserialize_with = "lenient::score", skip_serializing_if = "Option::is_none")]
    pub heuristics_avg: Option<Score>,

    #[serde(default, deserialize_with = "lenient::score", skip_serializing_if = "Option::is_none")]
    pub categories_avg: Option<Score>,

    #[serde(default, deserialize_with = "lenient::score", skip_serializing_if = "Option::is_none")]
    pub combined: Option<Score>,

    #[serde(default, deserialize_with = "lenient::score", skip_serializing_if = "Option::is_none")]
    pub target: Option<Score>,

    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,

    #[serde(default, deserialize_with = "lenient::score", skip_serializing_if = "Option::is_none")]
    pub blended: Option<Score>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub extra_pull_applied: bool,

    #[serde(
        rename = "final",
        default,
        deserialize_with = "lenient::score",
        skip_serializing_if = "Option::is_none"
    )]
    pub final_score: Option<Score>,

    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub iteration: Option<u32>,

    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub total_iterations: Option<u32>,

    #[serde(default, deserialize_with = "lenient::score", skip_serializing_if = "Option::is_none")]
    pub bias_weighted_overall: Option<Score>,
}

/// Trace computed by the producer, kept exactly as it arrived.
///
/// The object is never re-encoded: unknown keys, fractional numbers and
/// mistyped fields all survive. Only `final` is read, and only to decide
/// whether the trace is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProducerTrace(Map<String, Value>);

impl ProducerTrace {
    /// The producer's final score when it is a finite number, rounded and clamped.
    pub fn final_score(&self) -> Option<Score> {
        self.0
            .get("final")
            .and_then(Value::as_f64)
            .and_then(Score::from_finite)
    }

    /// Typed view of the known fields, decoded leniently for display.
    pub fn decoded(&self) -> DebugTrace {
        serde_json::from_value(Value::Object(self.0.clone())).unwrap_or_default()
    }
}

/// One frame's raw assessment as handed over by the producer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameEvaluationRecord {
    #[serde(default, deserialize_with = "lenient::seq", skip_serializing_if = "Vec::is_empty")]
    pub heuristic_breakdown: Vec<HeuristicEntry>,

    #[serde(default, deserialize_with = "lenient::number_map", skip_serializing_if = "BTreeMap::is_empty")]
    pub category_scores: CategoryScoreMap,

    #[serde(default, deserialize_with = "lenient::record", skip_serializing_if = "Option::is_none")]
    pub bias: Option<BiasOverlay>,

    /// Overall score asserted by the producer, used only as a late fallback.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,

    /// Trace already computed by the producer; authoritative when it carries a final score.
    #[serde(default, deserialize_with = "lenient::record", skip_serializing_if = "Option::is_none")]
    pub debug_calc: Option<ProducerTrace>,
}

/// Position of a version within its bounded iteration sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationContext {
    pub iteration: u32,
    pub total_iterations: u32,
}

impl IterationContext {
    pub fn new(iteration: u32, total_iterations: u32) -> Self {
        Self {
            iteration,
            total_iterations,
        }
    }

    /// Whether more iterations are expected after this one.
    pub fn is_mid_sequence(&self) -> bool {
        self.iteration < self.total_iterations
    }
}

/// Allowed range for a version's `total_iterations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationBounds {
    #[serde(default = "default_min_total")]
    pub min_total: u32,
    #[serde(default = "default_max_total")]
    pub max_total: u32,
}

pub fn default_min_total() -> u32 {
    3
}

pub fn default_max_total() -> u32 {
    5
}

impl Default for IterationBounds {
    fn default() -> Self {
        Self {
            min_total: default_min_total(),
            max_total: default_max_total(),
        }
    }
}

impl IterationBounds {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_total < 1 {
            return Err("min_total must be at least 1".to_string());
        }
        if self.min_total > self.max_total {
            return Err(format!(
                "min_total ({}) must not exceed max_total ({})",
                self.min_total, self.max_total
            ));
        }
        Ok(())
    }

    pub fn clamp(&self, total_iterations: u32) -> u32 {
        total_iterations.clamp(self.min_total, self.max_total)
    }
}

/// Version record exactly as it appears on the wire, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVersionRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub iteration: Option<u32>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub total_iterations: Option<u32>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub total_score: Option<f64>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub frames: Vec<FrameEvaluationRecord>,
}

/// One iteration of a design, with `total_iterations` already clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawVersionRecord")]
pub struct VersionRecord {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<u32>,

    pub total_iterations: u32,

    pub frames: Vec<FrameEvaluationRecord>,

    /// Persisted version score asserted by the producer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
}

impl VersionRecord {
    pub fn new(
        id: impl Into<String>,
        iteration: u32,
        total_iterations: u32,
        frames: Vec<FrameEvaluationRecord>,
    ) -> Self {
        Self::with_bounds(id, iteration, total_iterations, frames, &IterationBounds::default())
    }

    pub fn with_bounds(
        id: impl Into<String>,
        iteration: u32,
        total_iterations: u32,
        frames: Vec<FrameEvaluationRecord>,
        bounds: &IterationBounds,
    ) -> Self {
        Self {
            id: id.into(),
            iteration: Some(iteration),
            total_iterations: bounds.clamp(total_iterations),
            frames,
            total_score: None,
        }
    }

    pub fn with_total_score(mut self, total_score: f64) -> Self {
        self.total_score = Some(total_score);
        self
    }

    /// Validate a wire record: the only place `total_iterations` is clamped.
    pub fn from_raw(raw: RawVersionRecord, bounds: &IterationBounds) -> Self {
        let total_iterations = bounds.clamp(raw.total_iterations.unwrap_or(bounds.min_total));
        Self {
            id: raw.id.unwrap_or_default(),
            iteration: raw.iteration,
            total_iterations,
            frames: raw.frames,
            total_score: raw.total_score,
        }
    }

    /// Iteration context for blending, when the record carries an iteration.
    pub fn context(&self) -> Option<IterationContext> {
        self.iteration
            .map(|iteration| IterationContext::new(iteration, self.total_iterations))
    }
}

impl From<RawVersionRecord> for VersionRecord {
    fn from(raw: RawVersionRecord) -> Self {
        Self::from_raw(raw, &IterationBounds::default())
    }
}
