//! Category score averaging.

use crate::core::{mean_score, CategoryScoreMap, Score};

/// Rounded mean of the finite category scores, `None` when none remain.
///
/// Non-finite values are excluded from the average rather than clamped and
/// kept.
pub fn categories_average(categories: &CategoryScoreMap) -> Option<Score> {
    let values: Vec<f64> = categories
        .values()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    mean_score(&values)
}
