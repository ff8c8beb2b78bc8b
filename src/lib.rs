//! Password strength presentation library
//!
//! Adapts the result of an external password-strength estimator into a
//! normalized report, and maps that report to everything a strength page
//! shows: label, entropy and crack-time text, an escaped suggestion block,
//! the meter binding and per-frame parameters for a particle animation.
//!
//! Scoring itself is never done here: supply a [`Scorer`].
//!
//! # Features
//!
//! - `async` (default): channel-based analysis and button acknowledgments
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_art::{Analyzer, Estimate, PageConfig, PageController};
//! use secrecy::SecretString;
//!
//! let scorer = |pwd: &str| Estimate {
//!     score: Some((pwd.len() / 4).min(4) as i64),
//!     entropy: Some(pwd.len() as f64 * 4.0),
//!     ..Default::default()
//! };
//! let mut page = PageController::new(Analyzer::new(scorer), PageConfig::default());
//! page.init().expect("scorer configured");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let presentation = page.on_input(&password).expect("scorer configured");
//! println!("{} ({})", presentation.label, presentation.entropy);
//!
//! // each animation frame
//! let params = page.frame(0.016);
//! println!("density {:.0}, hue {}", params.particle_density, params.hue_base);
//! ```

// Internal modules
mod analyzer;
mod estimate;
mod noise;
mod page;
mod report;

pub mod presentation;

// Public API
pub use analyzer::{AnalyzeError, Analyzer, analyze_json};
pub use estimate::{CrackTimesSeconds, Estimate, Feedback, Scorer};
pub use page::{
    Ack, CanvasSnapshot, Clipboard, ClipboardError, DEFAULT_ACK_DURATION,
    DEFAULT_EXPORT_FILENAME, DirectoryDownload, Download, ExportError, PageConfig,
    PageController, TransientLabel, Visibility,
};
pub use presentation::{Presentation, VisualParameters, render_tick};
pub use report::{CrackTime, Score, StrengthReport};

#[cfg(feature = "async")]
pub use analyzer::analyze_tx;

#[cfg(feature = "async")]
pub use page::acknowledge_tx;
