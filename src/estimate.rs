//! Raw estimator results - the contract with the external scorer.
//!
//! Every field is optional: an estimator may omit values, and a result that
//! arrives as JSON may be incomplete. Normalization into a
//! [`StrengthReport`](crate::StrengthReport) happens in the analyzer.

use serde_json::Value;

const LOG2_10: f64 = std::f64::consts::LOG2_10;

/// Crack-time estimates in seconds, one per hashing-speed assumption.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrackTimesSeconds {
    pub online_throttling_100_per_hour: Option<f64>,
    pub online_no_throttling_10_per_second: Option<f64>,
    pub offline_slow_hashing_1e4_per_second: Option<f64>,
    pub offline_fast_hashing_1e10_per_second: Option<f64>,
}

/// Estimator feedback: an optional warning and ordered suggestions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// A raw estimator result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimate {
    pub score: Option<i64>,
    pub entropy: Option<f64>,
    pub crack_times_seconds: CrackTimesSeconds,
    pub feedback: Feedback,
}

impl Estimate {
    /// Parses an estimator result serialized as JSON.
    ///
    /// Only syntactically invalid JSON is an error. Missing or mistyped
    /// fields are left empty and get neutral defaults on normalization.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Extracts an estimate from an already-parsed JSON value.
    ///
    /// Accepts both `entropy` (bits) and `guesses_log10`; the former wins
    /// when both are present.
    pub fn from_value(value: &Value) -> Self {
        let times = &value["crack_times_seconds"];
        let feedback = &value["feedback"];

        let entropy = number(&value["entropy"])
            .or_else(|| number(&value["guesses_log10"]).map(|g| g * LOG2_10));

        Self {
            score: value["score"]
                .as_i64()
                .or_else(|| number(&value["score"]).map(|s| s.round() as i64)),
            entropy,
            crack_times_seconds: CrackTimesSeconds {
                online_throttling_100_per_hour: number(&times["online_throttling_100_per_hour"]),
                online_no_throttling_10_per_second: number(
                    &times["online_no_throttling_10_per_second"],
                ),
                offline_slow_hashing_1e4_per_second: number(
                    &times["offline_slow_hashing_1e4_per_second"],
                ),
                offline_fast_hashing_1e10_per_second: number(
                    &times["offline_fast_hashing_1e10_per_second"],
                ),
            },
            feedback: Feedback {
                warning: feedback["warning"]
                    .as_str()
                    .filter(|w| !w.trim().is_empty())
                    .map(str::to_string),
                suggestions: feedback["suggestions"]
                    .as_array()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// The external password-strength estimator.
///
/// Implementations must be synchronous and side-effect free from the
/// caller's point of view: one call per input, no caching expected.
pub trait Scorer {
    fn estimate(&self, password: &str) -> Estimate;
}

impl<F> Scorer for F
where
    F: Fn(&str) -> Estimate,
{
    fn estimate(&self, password: &str) -> Estimate {
        self(password)
    }
}
