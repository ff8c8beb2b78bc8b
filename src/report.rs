//! Normalized strength report.

use serde::Serialize;

use crate::estimate::Estimate;

/// Ordinal strength class reported by the estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Score {
    #[default]
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Score {
    pub const ALL: [Score; 5] = [
        Score::VeryWeak,
        Score::Weak,
        Score::Fair,
        Score::Good,
        Score::Strong,
    ];

    /// Builds a score from the estimator's integer, clamping into `0..=4`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            i64::MIN..=0 => Score::VeryWeak,
            1 => Score::Weak,
            2 => Score::Fair,
            3 => Score::Good,
            _ => Score::Strong,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Crack-time estimate in seconds, or unknown when the estimator gave none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub enum CrackTime {
    Seconds(f64),
    #[default]
    Unknown,
}

impl CrackTime {
    /// Picks the slow-hashing estimate, falling back to fast hashing.
    ///
    /// Only finite, positive values count as present; a zero estimate is
    /// treated like a missing one.
    pub fn select(slow: Option<f64>, fast: Option<f64>) -> Self {
        let usable = |v: &f64| v.is_finite() && *v > 0.0;
        slow.filter(usable)
            .or_else(|| fast.filter(usable))
            .map(CrackTime::Seconds)
            .unwrap_or(CrackTime::Unknown)
    }
}

/// Strength report for the most recent input.
///
/// Always well formed: normalization substitutes neutral defaults
/// (score 0, entropy 0, unknown crack time) for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrengthReport {
    pub score: Score,
    pub entropy_bits: f64,
    pub crack_time: CrackTime,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    /// Integer-rounded entropy, as shown to the user.
    pub fn rounded_entropy(&self) -> u64 {
        self.entropy_bits.round() as u64
    }
}

impl From<Estimate> for StrengthReport {
    fn from(estimate: Estimate) -> Self {
        let times = &estimate.crack_times_seconds;
        let crack_time = CrackTime::select(
            times.offline_slow_hashing_1e4_per_second,
            times.offline_fast_hashing_1e10_per_second,
        );

        Self {
            score: estimate.score.map(Score::from_raw).unwrap_or_default(),
            entropy_bits: estimate
                .entropy
                .filter(|e| e.is_finite() && *e > 0.0)
                .unwrap_or(0.0),
            crack_time,
            warning: estimate
                .feedback
                .warning
                .filter(|w| !w.trim().is_empty()),
            suggestions: estimate.feedback.suggestions,
        }
    }
}
