//! Score reconciliation for AI-generated usability assessments.
//!
//! Reviewers look at assessments of design frames across iterative
//! versions. Each frame arrives with partially-present data: per-criterion
//! heuristic scores, per-category scores, an optional bias overlay and
//! sometimes a trace the producer already computed. This crate reconciles
//! that data into one deterministic score per frame and one per version,
//! together with a trace that explains every step.
//!
//! ```rust
//! use uxscore::core::{FrameEvaluationRecord, HeuristicEntry, IterationContext};
//! use uxscore::scoring::compute_frame_score;
//!
//! let frame = FrameEvaluationRecord {
//!     heuristic_breakdown: vec![HeuristicEntry::points(4.0, 2.0), HeuristicEntry::points(4.0, 4.0)],
//!     category_scores: [("color".to_string(), 80.0), ("layout".to_string(), 60.0)]
//!         .into_iter()
//!         .collect(),
//!     ..FrameEvaluationRecord::default()
//! };
//!
//! let result = compute_frame_score(&frame, Some(IterationContext::new(2, 3)));
//! assert_eq!(result.score.value(), 74);
//! assert_eq!(result.trace.fields().combined.map(|s| s.value()), Some(73));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    BiasOverlay, CategoryScoreMap, DebugTrace, FrameEvaluationRecord, HeuristicEntry,
    IterationBounds, IterationContext, ProducerTrace, Score, VersionRecord,
};

pub use crate::scoring::{
    compare_versions, compute_frame_score, compute_version_score, score_versions, FrameScore,
    FrameTrace, ScoreSource, VersionDelta, VersionScore, VersionScoreSource,
};

pub use crate::config::{load_config, UxscoreConfig};
