//! Integer score on the 0-100 scale.
//!
//! Every number the engine hands back to a display surface is a `Score`.
//! Encoding the scale in the type keeps rounding and clamping in one place:
//! a raw `f64` never leaks into a trace.
//!
//! # Examples
//!
//! ```rust
//! use uxscore::core::Score;
//!
//! // Half-up rounding, then clamping
//! assert_eq!(Score::from_f64(64.95).value(), 65);
//! assert_eq!(Score::from_f64(150.0).value(), 100);
//! assert_eq!(Score::from_f64(-3.0).value(), 0);
//!
//! // Non-finite input is absent, not zero
//! assert_eq!(Score::from_finite(f64::NAN), None);
//! ```

use serde::{Deserialize, Serialize};

/// Round half-up, the rounding every average in the engine uses.
///
/// `f64::round` rounds half away from zero, which differs for negative
/// halves (`-2.5` would become `-3`). Inputs can be negative before clamping,
/// so the engine rounds towards positive infinity on ties.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Score on the 0-100 scale, always an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Create a score from an integer, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Round half-up and clamp to [0, 100].
    ///
    /// Non-finite input maps to zero; use [`Score::from_finite`] when the
    /// caller must distinguish "absent" from "zero".
    pub fn from_f64(value: f64) -> Self {
        Self::from_finite(value).unwrap_or(Self::MIN)
    }

    /// Round and clamp a finite value, `None` for NaN or infinities.
    pub fn from_finite(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let rounded = round_half_up(value).clamp(0.0, 100.0);
        Some(Self(rounded as u8))
    }

    /// Get the raw score value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The score as `f64`, for feeding back into averages.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round the arithmetic mean of finite values half-up.
///
/// Returns `None` for an empty slice. Callers filter non-finite entries
/// beforehand; they are skipped here too so a stray NaN cannot poison a
/// whole average.
pub fn mean_score(values: &[f64]) -> Option<Score> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    Score::from_finite(mean)
}
