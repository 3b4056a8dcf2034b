//! Blending the combined score towards the progression target.

use super::progression::progression_target;
use crate::core::{IterationContext, Score};

/// Weight of the progression target in the blend.
pub const BLEND_ALPHA: f64 = 0.35;

/// Distance from the target beyond which a mid-sequence blend is pulled again.
pub const EXTRA_PULL_THRESHOLD: u8 = 15;

/// Result of blending one combined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    pub target: Score,
    pub alpha: f64,
    pub blended: Score,
    pub extra_pull_applied: bool,
}

/// Blend `combined` with the target for `context`.
///
/// `blended = round((1 - alpha) * combined + alpha * target)`. While more
/// iterations are expected, a blend more than [`EXTRA_PULL_THRESHOLD`]
/// points away from the target is averaged with the target once more.
pub fn blend(combined: Score, context: IterationContext) -> Blend {
    let target = progression_target(context.iteration, context.total_iterations);
    let mut blended =
        Score::from_f64((1.0 - BLEND_ALPHA) * combined.as_f64() + BLEND_ALPHA * target.as_f64());

    let mut extra_pull_applied = false;
    if context.is_mid_sequence() && blended.value().abs_diff(target.value()) > EXTRA_PULL_THRESHOLD {
        let pulled = Score::from_f64((blended.as_f64() + target.as_f64()) / 2.0);
        tracing::debug!(
            blended = blended.value(),
            target = target.value(),
            pulled = pulled.value(),
            "applying extra pull towards progression target"
        );
        blended = pulled;
        extra_pull_applied = true;
    }

    Blend {
        target,
        alpha: BLEND_ALPHA,
        blended,
        extra_pull_applied,
    }
}
