//! Strength analyzer - adapts the external scorer into a [`StrengthReport`].

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::estimate::{Estimate, Scorer};
use crate::report::StrengthReport;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("No password scorer is configured")]
    ScorerUnavailable,
    #[error("Estimator result is not valid JSON: {0}")]
    InvalidEstimate(#[from] serde_json::Error),
}

/// Calls the configured scorer and normalizes its result.
///
/// Every call is independent: no caching, no retries.
pub struct Analyzer<S> {
    scorer: Option<S>,
}

impl<S: Scorer> Analyzer<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer: Some(scorer),
        }
    }

    /// An analyzer without a scorer. Every analysis fails with
    /// [`AnalyzeError::ScorerUnavailable`].
    pub fn unconfigured() -> Self {
        Self { scorer: None }
    }

    pub fn is_configured(&self) -> bool {
        self.scorer.is_some()
    }

    /// Scores `password` and returns the normalized report.
    ///
    /// # Errors
    /// Returns [`AnalyzeError::ScorerUnavailable`] when no scorer is set.
    pub fn analyze(&self, password: &SecretString) -> Result<StrengthReport, AnalyzeError> {
        let Some(scorer) = self.scorer.as_ref() else {
            #[cfg(feature = "tracing")]
            tracing::error!("Password analysis skipped: no scorer configured");
            return Err(AnalyzeError::ScorerUnavailable);
        };

        let estimate = scorer.estimate(password.expose_secret());
        let report = StrengthReport::from(estimate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            score = report.score.value(),
            entropy_bits = report.entropy_bits,
            "password analyzed"
        );

        Ok(report)
    }
}

/// Normalizes an estimator result delivered as JSON.
///
/// Missing fields get neutral defaults; only invalid JSON fails.
pub fn analyze_json(json: &str) -> Result<StrengthReport, AnalyzeError> {
    let estimate = Estimate::from_json(json)?;
    Ok(StrengthReport::from(estimate))
}

/// Async version that sends the analysis outcome via channel.
#[cfg(feature = "async")]
pub async fn analyze_tx<S: Scorer>(
    analyzer: &Analyzer<S>,
    password: &SecretString,
    tx: mpsc::Sender<Result<StrengthReport, AnalyzeError>>,
) {
    let outcome = analyzer.analyze(password);

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{CrackTimesSeconds, Feedback};
    use crate::report::{CrackTime, Score};
    use std::cell::Cell;

    fn fixed_scorer(pwd: &str) -> Estimate {
        Estimate {
            score: Some(if pwd.len() > 12 { 4 } else { 1 }),
            entropy: Some(pwd.len() as f64 * 4.0),
            crack_times_seconds: CrackTimesSeconds {
                offline_slow_hashing_1e4_per_second: Some(90.0),
                offline_fast_hashing_1e10_per_second: Some(0.0001),
                ..Default::default()
            },
            feedback: Feedback {
                warning: None,
                suggestions: vec!["Add another word or two".to_string()],
            },
        }
    }

    #[test]
    fn test_analyze_short_password() {
        let analyzer = Analyzer::new(fixed_scorer);
        let pwd = SecretString::new("abc".to_string().into());

        let report = analyzer.analyze(&pwd).expect("scorer configured");
        assert_eq!(report.score, Score::Weak);
        assert_eq!(report.entropy_bits, 12.0);
        assert_eq!(report.crack_time, CrackTime::Seconds(90.0));
    }

    #[test]
    fn test_analyze_empty_password() {
        let analyzer = Analyzer::new(fixed_scorer);
        let pwd = SecretString::new("".to_string().into());

        let report = analyzer.analyze(&pwd).expect("empty input is allowed");
        assert_eq!(report.entropy_bits, 0.0);
    }

    #[test]
    fn test_analyze_calls_scorer_once_per_input() {
        let calls = Cell::new(0);
        let analyzer = Analyzer::new(|pwd: &str| {
            calls.set(calls.get() + 1);
            fixed_scorer(pwd)
        });
        let pwd = SecretString::new("same input".to_string().into());

        let first = analyzer.analyze(&pwd).unwrap();
        let second = analyzer.analyze(&pwd).unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_analyze_without_scorer() {
        let analyzer: Analyzer<fn(&str) -> Estimate> = Analyzer::unconfigured();
        let pwd = SecretString::new("anything".to_string().into());

        assert!(!analyzer.is_configured());
        assert!(matches!(
            analyzer.analyze(&pwd),
            Err(AnalyzeError::ScorerUnavailable)
        ));
        // stays callable after a failure
        assert!(analyzer.analyze(&pwd).is_err());
    }

    #[test]
    fn test_analyze_json_tolerates_missing_fields() {
        let report = analyze_json(r#"{"feedback": {}}"#).expect("valid json");
        assert_eq!(report, StrengthReport::default());
    }

    #[test]
    fn test_analyze_json_rejects_garbage() {
        assert!(matches!(
            analyze_json("{score: 3"),
            Err(AnalyzeError::InvalidEstimate(_))
        ));
    }
}
