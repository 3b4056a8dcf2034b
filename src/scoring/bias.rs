//! Bias overlay reader.

use crate::core::BiasOverlay;

/// The externally supplied bias-adjusted overall score, when present and finite.
///
/// The engine never derives this value; it only reads it.
pub fn bias_weighted_overall(bias: Option<&BiasOverlay>) -> Option<f64> {
    bias.and_then(|b| b.weighted_overall)
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_present_value() {
        let bias = BiasOverlay {
            weighted_overall: Some(62.4),
        };
        assert_eq!(bias_weighted_overall(Some(&bias)), Some(62.4));
    }

    #[test]
    fn absent_overlay_or_value() {
        assert_eq!(bias_weighted_overall(None), None);
        assert_eq!(bias_weighted_overall(Some(&BiasOverlay::default())), None);
    }

    #[test]
    fn non_finite_is_absent() {
        let bias = BiasOverlay {
            weighted_overall: Some(f64::NAN),
        };
        assert_eq!(bias_weighted_overall(Some(&bias)), None);
    }
}
