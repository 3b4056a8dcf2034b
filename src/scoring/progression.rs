//! Progression target for a position in the iteration sequence.
//!
//! Early iterations are graded on a lower curve: the expected score rises
//! linearly from 50 at the first iteration to 100 at the last.

use crate::core::Score;

/// Expected score at the first iteration.
pub const TARGET_FLOOR: f64 = 50.0;

/// Expected score for `iteration` out of `total_iterations`, in [50, 100].
pub fn progression_target(iteration: u32, total_iterations: u32) -> Score {
    if iteration >= total_iterations || total_iterations <= 1 {
        return Score::MAX;
    }

    let position = iteration.clamp(1, total_iterations) - 1;
    let t = f64::from(position) / f64::from(total_iterations - 1);
    Score::from_f64(TARGET_FLOOR + t * (100.0 - TARGET_FLOOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_step_sequence() {
        assert_eq!(progression_target(1, 3).value(), 50);
        assert_eq!(progression_target(2, 3).value(), 75);
        assert_eq!(progression_target(3, 3).value(), 100);
    }

    #[test]
    fn five_step_sequence() {
        let targets: Vec<u8> = (1..=5).map(|i| progression_target(i, 5).value()).collect();
        assert_eq!(targets, vec![50, 63, 75, 88, 100]);
    }

    #[test]
    fn past_the_end_is_full() {
        assert_eq!(progression_target(7, 3), Score::MAX);
    }

    #[test]
    fn single_iteration_is_full() {
        assert_eq!(progression_target(1, 1), Score::MAX);
        assert_eq!(progression_target(0, 0), Score::MAX);
    }

    #[test]
    fn iteration_zero_treated_as_first() {
        assert_eq!(progression_target(0, 4).value(), 50);
    }
}
