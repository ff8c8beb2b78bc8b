//! Strength meter binding: fill width and gradient colors.

use serde::Serialize;

use crate::report::Score;

/// A base color and its lighter variant, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub base: &'static str,
    pub lighter: &'static str,
}

const RED: ColorPair = ColorPair {
    base: "#ef4444",
    lighter: "#fca5a5",
};
const AMBER: ColorPair = ColorPair {
    base: "#f59e0b",
    lighter: "#fbd38d",
};
const GREEN: ColorPair = ColorPair {
    base: "#22c55e",
    lighter: "#86efac",
};
const CYAN: ColorPair = ColorPair {
    base: "#0ea5e9",
    lighter: "#93c5fd",
};

impl ColorPair {
    pub fn for_score(score: Score) -> Self {
        match score {
            Score::VeryWeak | Score::Weak => RED,
            Score::Fair => AMBER,
            Score::Good => GREEN,
            Score::Strong => CYAN,
        }
    }
}

/// Declarative state of the meter fill, derived only from the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeterBinding {
    pub fill_percent: f64,
    pub colors: ColorPair,
}

impl MeterBinding {
    pub fn for_score(score: Score) -> Self {
        Self {
            fill_percent: f64::from(score.value()) / 4.0 * 100.0,
            colors: ColorPair::for_score(score),
        }
    }

    /// Inline style for the fill element.
    pub fn css(&self) -> String {
        format!(
            "width: {}%; background: linear-gradient(90deg, {}, {});",
            self.fill_percent, self.colors.base, self.colors.lighter
        )
    }
}
