//! Strength label - fixed text per score class.

use crate::report::Score;

const STRENGTH_LABELS: [&str; 5] = ["Very weak", "Weak", "Fair", "Good", "Strong"];

/// Placeholder shown for a score outside `0..=4`.
pub const NO_LABEL: &str = "—";

/// Looks up the label for a raw estimator score.
///
/// Returns [`NO_LABEL`] when `score` is out of range.
pub fn strength_label(score: i64) -> &'static str {
    usize::try_from(score)
        .ok()
        .and_then(|i| STRENGTH_LABELS.get(i))
        .copied()
        .unwrap_or(NO_LABEL)
}

impl Score {
    pub fn label(self) -> &'static str {
        STRENGTH_LABELS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_every_score() {
        let expected = ["Very weak", "Weak", "Fair", "Good", "Strong"];
        for (score, label) in Score::ALL.iter().zip(expected) {
            assert_eq!(score.label(), label);
            assert_eq!(strength_label(score.value() as i64), label);
        }
    }

    #[test]
    fn test_label_out_of_range() {
        assert_eq!(strength_label(-1), NO_LABEL);
        assert_eq!(strength_label(5), NO_LABEL);
        assert_eq!(strength_label(i64::MAX), NO_LABEL);
        assert_eq!(strength_label(i64::MIN), NO_LABEL);
    }
}
