//! Per-criterion heuristic averaging.

use crate::core::{mean_score, round_half_up, HeuristicEntry, Score};

/// Percentage earned on one criterion, rounded half-up.
///
/// The score is clamped into `[0, max_points]` first. Entries without a
/// positive, finite `max_points` or without a finite score are excluded.
pub fn heuristic_percentage(entry: &HeuristicEntry) -> Option<f64> {
    let max_points = entry.max_points.filter(|m| m.is_finite() && *m > 0.0)?;
    let score = entry.score.filter(|s| s.is_finite())?;
    Some(round_half_up(score.clamp(0.0, max_points) / max_points * 100.0))
}

/// Rounded mean of the per-criterion percentages, `None` when nothing is usable.
pub fn heuristics_average(entries: &[HeuristicEntry]) -> Option<Score> {
    let percentages: Vec<f64> = entries
        .iter()
        .filter_map(|entry| {
            let pct = heuristic_percentage(entry);
            if pct.is_none() {
                tracing::trace!(code = ?entry.code, "excluding heuristic without usable points");
            }
            pct
        })
        .collect();
    mean_score(&percentages)
}
