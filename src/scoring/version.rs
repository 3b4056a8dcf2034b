//! Version-level aggregation of frame scores.

use super::frame::{compute_frame_score, FrameScore};
use crate::core::{mean_score, Score, VersionRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Where a version's final score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionScoreSource {
    /// Persisted `total_score` asserted by the producer.
    Persisted,
    /// Mean of the frame scores.
    Recomputed,
    /// No persisted score and no frames.
    Empty,
}

impl VersionScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionScoreSource::Persisted => "persisted",
            VersionScoreSource::Recomputed => "recomputed",
            VersionScoreSource::Empty => "no data",
        }
    }
}

impl std::fmt::Display for VersionScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final score of one version along with every frame result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionScore {
    pub id: String,
    pub score: Score,
    pub source: VersionScoreSource,
    /// Mean of the frame scores, reported even when the persisted score wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recomputed: Option<Score>,
    pub frames: Vec<FrameScore>,
}

/// Persisted score when present, finite and positive.
fn persisted_score(version: &VersionRecord) -> Option<Score> {
    version
        .total_score
        .filter(|s| s.is_finite() && *s > 0.0)
        .and_then(Score::from_finite)
}

/// Score every frame of a version and reduce to one version score.
pub fn compute_version_score(version: &VersionRecord) -> VersionScore {
    let context = version.context();
    let frames: Vec<FrameScore> = version
        .frames
        .par_iter()
        .map(|frame| compute_frame_score(frame, context))
        .collect();

    let frame_scores: Vec<f64> = frames.iter().map(|f| f.score.as_f64()).collect();
    let recomputed = mean_score(&frame_scores);

    let (score, source) = match (persisted_score(version), recomputed) {
        (Some(persisted), _) => (persisted, VersionScoreSource::Persisted),
        (None, Some(recomputed)) => (recomputed, VersionScoreSource::Recomputed),
        (None, None) => (Score::MIN, VersionScoreSource::Empty),
    };

    tracing::debug!(
        version = %version.id,
        frames = frames.len(),
        score = score.value(),
        source = %source,
        "scored version"
    );

    VersionScore {
        id: version.id.clone(),
        score,
        source,
        recomputed,
        frames,
    }
}

/// Score many versions in parallel, preserving input order.
pub fn score_versions(versions: &[VersionRecord]) -> Vec<VersionScore> {
    versions.par_iter().map(compute_version_score).collect()
}
