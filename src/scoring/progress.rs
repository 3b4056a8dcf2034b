//! Comparing scored versions of the same design.

use super::version::VersionScore;
use crate::core::Score;
use serde::{Deserialize, Serialize};

/// Direction of change between two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improved,
    Regressed,
    Unchanged,
}

impl Trend {
    fn from_delta(delta: i16) -> Self {
        match delta.signum() {
            1 => Trend::Improved,
            -1 => Trend::Regressed,
            _ => Trend::Unchanged,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improved => "improved",
            Trend::Regressed => "regressed",
            Trend::Unchanged => "unchanged",
        }
    }
}

/// Change of one frame, matched by position in the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameDelta {
    pub index: usize,
    pub previous: Score,
    pub current: Score,
    pub delta: i16,
}

/// Change between two versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDelta {
    pub previous_id: String,
    pub current_id: String,
    pub previous: Score,
    pub current: Score,
    pub delta: i16,
    pub trend: Trend,
    pub frames: Vec<FrameDelta>,
}

fn delta(previous: Score, current: Score) -> i16 {
    i16::from(current.value()) - i16::from(previous.value())
}

pub fn compare_versions(previous: &VersionScore, current: &VersionScore) -> VersionDelta {
    let frames = previous
        .frames
        .iter()
        .zip(&current.frames)
        .enumerate()
        .map(|(index, (before, after))| FrameDelta {
            index,
            previous: before.score,
            current: after.score,
            delta: delta(before.score, after.score),
        })
        .collect();

    let change = delta(previous.score, current.score);
    VersionDelta {
        previous_id: previous.id.clone(),
        current_id: current.id.clone(),
        previous: previous.score,
        current: current.score,
        delta: change,
        trend: Trend::from_delta(change),
        frames,
    }
}

/// Deltas between consecutive versions of an ordered history.
pub fn progression_report(history: &[VersionScore]) -> Vec<VersionDelta> {
    history
        .windows(2)
        .map(|pair| compare_versions(&pair[0], &pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fallback::ScoreSource;
    use crate::scoring::frame::{FrameScore, FrameTrace};
    use crate::scoring::version::VersionScoreSource;

    fn version(id: &str, score: u8, frames: &[u8]) -> VersionScore {
        VersionScore {
            id: id.to_string(),
            score: Score::new(score),
            source: VersionScoreSource::Recomputed,
            recomputed: Some(Score::new(score)),
            frames: frames
                .iter()
                .map(|s| FrameScore {
                    score: Score::new(*s),
                    trace: FrameTrace::Computed(Default::default()),
                    source: ScoreSource::OverallScore,
                })
                .collect(),
        }
    }

    #[test]
    fn improvement_is_positive() {
        let delta = compare_versions(&version("v1", 60, &[50, 70]), &version("v2", 72, &[80, 64]));
        assert_eq!(delta.delta, 12);
        assert_eq!(delta.trend, Trend::Improved);
        assert_eq!(delta.frames.len(), 2);
        assert_eq!(delta.frames[0].delta, 30);
        assert_eq!(delta.frames[1].delta, -6);
    }

    #[test]
    fn regression_and_unchanged() {
        let down = compare_versions(&version("v1", 60, &[]), &version("v2", 40, &[]));
        assert_eq!(down.delta, -20);
        assert_eq!(down.trend, Trend::Regressed);

        let flat = compare_versions(&version("v1", 60, &[]), &version("v2", 60, &[]));
        assert_eq!(flat.trend, Trend::Unchanged);
    }

    #[test]
    fn unmatched_frames_are_skipped() {
        let delta = compare_versions(&version("v1", 60, &[60]), &version("v2", 70, &[70, 90]));
        assert_eq!(delta.frames.len(), 1);
    }

    #[test]
    fn report_pairs_consecutive_versions() {
        let history = vec![
            version("v1", 50, &[]),
            version("v2", 65, &[]),
            version("v3", 62, &[]),
        ];
        let report = progression_report(&history);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].current_id, "v2");
        assert_eq!(report[1].trend, Trend::Regressed);
        assert!(progression_report(&history[..1]).is_empty());
    }
}
