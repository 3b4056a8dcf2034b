//! Core record model shared by the engine, the CLI and the renderers.

pub mod errors;
pub mod lenient;
pub mod score;
pub mod types;

pub use errors::{Error, Result};
pub use score::{mean_score, round_half_up, Score};
pub use types::{
    BiasOverlay, CategoryScoreMap, DebugTrace, FrameEvaluationRecord, HeuristicEntry,
    IterationBounds, IterationContext, ProducerTrace, RawVersionRecord, VersionRecord,
};
