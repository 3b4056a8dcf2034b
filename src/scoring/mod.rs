//! Score reconciliation engine.
//!
//! Turns partially-present assessment data into one bounded score per frame
//! and one per version. Data flows one way:
//!
//! ```text
//! heuristics ─┐
//! categories ─┼─> fallback ──(blender <- progression)──> frame ──> version
//! bias ───────┘
//! ```
//!
//! Every function here is pure and synchronous over borrowed, immutable
//! records, so frames and versions can be scored on any number of threads.

pub mod bias;
pub mod blender;
pub mod categories;
pub mod fallback;
pub mod frame;
pub mod heuristics;
pub mod progress;
pub mod progression;
pub mod version;

pub use bias::bias_weighted_overall;
pub use blender::{blend, Blend, BLEND_ALPHA, EXTRA_PULL_THRESHOLD};
pub use categories::categories_average;
pub use fallback::{combine, resolve, Resolution, ScoreComponents, ScoreSource};
pub use frame::{compute_frame_score, score_components, FrameScore, FrameTrace};
pub use heuristics::{heuristic_percentage, heuristics_average};
pub use progress::{compare_versions, progression_report, FrameDelta, Trend, VersionDelta};
pub use progression::progression_target;
pub use version::{compute_version_score, score_versions, VersionScore, VersionScoreSource};
