//! Precedence chain choosing a frame's final score from whatever is available.
//!
//! First available wins:
//!
//! 1. a producer-supplied final score, used verbatim
//! 2. a combined score from heuristics and categories (and the bias overlay
//!    when present), blended with the progression target when the iteration
//!    context is known
//! 3. whichever single average is available
//! 4. the producer-asserted overall score
//! 5. zero
//!
//! Every path ends in a finite score in [0, 100].

use super::blender::{blend, Blend};
use crate::core::{mean_score, IterationContext, Score};
use serde::{Deserialize, Serialize};

/// Which step of the precedence chain produced a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Producer already ran the pipeline; its final score is authoritative.
    ProducerTrace,
    /// Combined score blended with the progression target.
    Blended,
    /// Combined score used as-is, no iteration context.
    Combined,
    HeuristicsOnly,
    CategoriesOnly,
    /// Producer-asserted overall score.
    OverallScore,
    /// Nothing usable; final score is zero.
    Empty,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::ProducerTrace => "producer trace",
            ScoreSource::Blended => "blended",
            ScoreSource::Combined => "combined",
            ScoreSource::HeuristicsOnly => "heuristics only",
            ScoreSource::CategoriesOnly => "categories only",
            ScoreSource::OverallScore => "overall score",
            ScoreSource::Empty => "no data",
        }
    }
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs gathered from one frame record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreComponents {
    pub producer_final: Option<Score>,
    pub heuristics_avg: Option<Score>,
    pub categories_avg: Option<Score>,
    pub bias_weighted_overall: Option<f64>,
    pub overall_score: Option<f64>,
}

/// Outcome of the precedence chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub final_score: Score,
    pub source: ScoreSource,
    pub combined: Option<Score>,
    pub blend: Option<Blend>,
}

impl Resolution {
    fn settled(final_score: Score, source: ScoreSource) -> Self {
        Self {
            final_score,
            source,
            combined: None,
            blend: None,
        }
    }
}

/// Combine heuristics and categories, with the bias overlay when present.
///
/// Requires both averages; `None` otherwise.
pub fn combine(components: &ScoreComponents) -> Option<Score> {
    let heuristics = components.heuristics_avg?;
    let categories = components.categories_avg?;

    match components.bias_weighted_overall {
        Some(bias) => mean_score(&[heuristics.as_f64(), categories.as_f64(), bias]),
        None => mean_score(&[heuristics.as_f64(), categories.as_f64()]),
    }
}

/// Walk the precedence chain.
pub fn resolve(components: &ScoreComponents, context: Option<IterationContext>) -> Resolution {
    if let Some(final_score) = components.producer_final {
        tracing::debug!(final_score = final_score.value(), "using producer-supplied final score");
        return Resolution::settled(final_score, ScoreSource::ProducerTrace);
    }

    if let Some(combined) = combine(components) {
        return match context {
            Some(context) => {
                let blend = blend(combined, context);
                Resolution {
                    final_score: blend.blended,
                    source: ScoreSource::Blended,
                    combined: Some(combined),
                    blend: Some(blend),
                }
            }
            None => Resolution {
                final_score: combined,
                source: ScoreSource::Combined,
                combined: Some(combined),
                blend: None,
            },
        };
    }

    if let Some(heuristics) = components.heuristics_avg {
        tracing::debug!("no category scores, using heuristics average");
        return Resolution::settled(heuristics, ScoreSource::HeuristicsOnly);
    }

    if let Some(categories) = components.categories_avg {
        tracing::debug!("no heuristic breakdown, using categories average");
        return Resolution::settled(categories, ScoreSource::CategoriesOnly);
    }

    if let Some(overall) = components.overall_score.and_then(Score::from_finite) {
        tracing::debug!("no breakdown data, using producer overall score");
        return Resolution::settled(overall, ScoreSource::OverallScore);
    }

    tracing::debug!("no usable assessment data, final score is zero");
    Resolution::settled(Score::MIN, ScoreSource::Empty)
}
