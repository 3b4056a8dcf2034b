//! Scoring a single frame.

use super::bias::bias_weighted_overall;
use super::categories::categories_average;
use super::fallback::{resolve, ScoreComponents, ScoreSource};
use super::heuristics::heuristics_average;
use crate::core::{DebugTrace, FrameEvaluationRecord, IterationContext, ProducerTrace, Score};
use serde::Serialize;

/// Trace attached to a frame score.
///
/// Serializes as the bare trace object: either the one computed here or the
/// producer's, byte-for-byte as received.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrameTrace {
    Computed(DebugTrace),
    Producer(ProducerTrace),
}

impl FrameTrace {
    /// Typed fields for display; producer traces are decoded leniently.
    pub fn fields(&self) -> DebugTrace {
        match self {
            FrameTrace::Computed(trace) => trace.clone(),
            FrameTrace::Producer(trace) => trace.decoded(),
        }
    }
}

/// Final score of one frame with the trace that explains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameScore {
    pub score: Score,
    pub trace: FrameTrace,
    pub source: ScoreSource,
}

/// Gather the independent aggregates for a record.
pub fn score_components(record: &FrameEvaluationRecord) -> ScoreComponents {
    ScoreComponents {
        producer_final: record.debug_calc.as_ref().and_then(ProducerTrace::final_score),
        heuristics_avg: heuristics_average(&record.heuristic_breakdown),
        categories_avg: categories_average(&record.category_scores),
        bias_weighted_overall: bias_weighted_overall(record.bias.as_ref()),
        overall_score: record.overall_score,
    }
}

/// Score one frame.
///
/// Pure function of its input. A producer trace with a numeric final score
/// is returned unchanged and only `score` is rounded and clamped; otherwise
/// the trace is built from the aggregates that were available, leaving the
/// rest absent.
pub fn compute_frame_score(
    record: &FrameEvaluationRecord,
    context: Option<IterationContext>,
) -> FrameScore {
    let components = score_components(record);
    let resolution = resolve(&components, context);

    if resolution.source == ScoreSource::ProducerTrace {
        if let Some(trace) = &record.debug_calc {
            return FrameScore {
                score: resolution.final_score,
                trace: FrameTrace::Producer(trace.clone()),
                source: resolution.source,
            };
        }
    }

    let blend = resolution.blend;
    let trace = DebugTrace {
        heuristics_avg: components.heuristics_avg,
        categories_avg: components.categories_avg,
        combined: resolution.combined,
        target: blend.map(|b| b.target),
        alpha: blend.map(|b| b.alpha),
        blended: blend.map(|b| b.blended),
        extra_pull_applied: blend.is_some_and(|b| b.extra_pull_applied),
        final_score: Some(resolution.final_score),
        iteration: context.map(|c| c.iteration),
        total_iterations: context.map(|c| c.total_iterations),
        bias_weighted_overall: components
            .bias_weighted_overall
            .and_then(Score::from_finite),
    };

    FrameScore {
        score: resolution.final_score,
        trace: FrameTrace::Computed(trace),
        source: resolution.source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BiasOverlay, HeuristicEntry};
    use serde_json::json;

    fn scenario_record() -> FrameEvaluationRecord {
        FrameEvaluationRecord {
            heuristic_breakdown: vec![
                HeuristicEntry::new("H1", "Visibility of system status", 4.0, 2.0),
                HeuristicEntry::new("H2", "Match with the real world", 4.0, 4.0),
            ],
            category_scores: [("color".to_string(), 80.0), ("layout".to_string(), 60.0)]
                .into_iter()
                .collect(),
            ..FrameEvaluationRecord::default()
        }
    }

    #[test]
    fn mid_sequence_trace() {
        let result = compute_frame_score(&scenario_record(), Some(IterationContext::new(2, 3)));

        assert_eq!(result.score.value(), 74);
        assert_eq!(result.source, ScoreSource::Blended);
        let FrameTrace::Computed(trace) = &result.trace else {
            panic!("expected a computed trace");
        };
        assert_eq!(trace.heuristics_avg, Some(Score::new(75)));
        assert_eq!(trace.categories_avg, Some(Score::new(70)));
        assert_eq!(trace.combined, Some(Score::new(73)));
        assert_eq!(trace.target, Some(Score::new(75)));
        assert_eq!(trace.alpha, Some(0.35));
        assert_eq!(trace.blended, Some(Score::new(74)));
        assert!(!trace.extra_pull_applied);
        assert_eq!(trace.final_score, Some(Score::new(74)));
        assert_eq!(trace.iteration, Some(2));
        assert_eq!(trace.total_iterations, Some(3));
        assert_eq!(trace.bias_weighted_overall, None);
    }

    #[test]
    fn first_iteration_trace() {
        let result = compute_frame_score(&scenario_record(), Some(IterationContext::new(1, 3)));
        assert_eq!(result.trace.fields().target, Some(Score::new(50)));
        assert_eq!(result.trace.fields().blended, Some(Score::new(65)));
        assert!(!result.trace.fields().extra_pull_applied);
        assert_eq!(result.score.value(), 65);
    }

    #[test]
    fn no_context_leaves_blend_fields_absent() {
        let result = compute_frame_score(&scenario_record(), None);
        assert_eq!(result.score.value(), 73);
        assert_eq!(result.trace.fields().target, None);
        assert_eq!(result.trace.fields().alpha, None);
        assert_eq!(result.trace.fields().blended, None);
        assert_eq!(result.trace.fields().iteration, None);
    }

    fn producer(value: serde_json::Value) -> ProducerTrace {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn producer_trace_passes_through() {
        let raw = json!({ "heuristics_avg": 12, "final": 88 });
        let record = FrameEvaluationRecord {
            debug_calc: Some(producer(raw.clone())),
            ..scenario_record()
        };

        let result = compute_frame_score(&record, Some(IterationContext::new(2, 3)));
        assert_eq!(result.score.value(), 88);
        assert_eq!(result.source, ScoreSource::ProducerTrace);
        assert_eq!(serde_json::to_value(&result.trace).unwrap(), raw);
    }

    #[test]
    fn producer_trace_keeps_unknown_keys_and_fractions() {
        let raw = json!({
            "final": 88.4,
            "heuristics_avg": 74.6,
            "iteration": "2",
            "note": "reviewed by design lead"
        });
        let record = FrameEvaluationRecord {
            debug_calc: Some(producer(raw.clone())),
            ..FrameEvaluationRecord::default()
        };

        let result = compute_frame_score(&record, None);
        assert_eq!(result.score.value(), 88);
        assert_eq!(serde_json::to_value(&result.trace).unwrap(), raw);
        assert!(matches!(result.trace, FrameTrace::Producer(_)));
        assert_eq!(result.trace.fields().heuristics_avg, Some(Score::new(75)));
    }

    #[test]
    fn producer_trace_without_final_is_recomputed() {
        let record = FrameEvaluationRecord {
            debug_calc: Some(producer(json!({ "combined": 10, "final": "n/a" }))),
            ..scenario_record()
        };
        let result = compute_frame_score(&record, Some(IterationContext::new(2, 3)));
        assert_eq!(result.score.value(), 74);
        assert_eq!(result.source, ScoreSource::Blended);
    }

    #[test]
    fn bias_recorded_in_trace() {
        let record = FrameEvaluationRecord {
            bias: Some(BiasOverlay {
                weighted_overall: Some(40.2),
            }),
            ..scenario_record()
        };
        let result = compute_frame_score(&record, None);
        // round((75 + 70 + 40.2) / 3) = round(61.73) = 62
        assert_eq!(result.trace.fields().combined, Some(Score::new(62)));
        assert_eq!(result.trace.fields().bias_weighted_overall, Some(Score::new(40)));
    }

    #[test]
    fn empty_record_scores_zero() {
        let result = compute_frame_score(&FrameEvaluationRecord::default(), Some(IterationContext::new(1, 3)));
        assert_eq!(result.score, Score::MIN);
        assert_eq!(result.source, ScoreSource::Empty);
        assert_eq!(result.trace.fields().final_score, Some(Score::MIN));
        assert_eq!(result.trace.fields().heuristics_avg, None);
        assert_eq!(result.trace.fields().iteration, Some(1));
    }
}
