//! Presentation mapping
//!
//! Turns a [`StrengthReport`] into UI text, the meter binding and the
//! per-frame visual parameters. Every mapping is total and never fails.

mod escape;
mod feedback;
mod label;
mod meter;
mod text;
mod visual;

use serde::Serialize;

pub use escape::escape_html;
pub use feedback::{CONGRATULATIONS, SuggestionBlock};
pub use label::{NO_LABEL, strength_label};
pub use meter::{ColorPair, MeterBinding};
pub use text::{crack_time_field, crack_time_text, duration_text, entropy_field, entropy_text};
pub use visual::{Band, Hsla, Particle, ParticleField, VisualParameters, render_tick};

use crate::report::StrengthReport;

/// Everything the page shows for one report, apart from the animation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub label: &'static str,
    pub entropy: String,
    pub crack_time: String,
    pub suggestions: SuggestionBlock,
    pub meter: MeterBinding,
}

impl Presentation {
    pub fn from_report(report: &StrengthReport) -> Self {
        Self {
            label: report.score.label(),
            entropy: entropy_field(report.entropy_bits),
            crack_time: crack_time_field(report.crack_time),
            suggestions: SuggestionBlock::from_report(report),
            meter: MeterBinding::for_score(report.score),
        }
    }
}
