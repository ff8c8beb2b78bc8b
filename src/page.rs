//! Page controller - owns the latest report and the page's button states.
//!
//! The controller is the only holder of mutable state. Input events replace
//! the report wholesale; the render tick receives it by reference.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analyzer::{AnalyzeError, Analyzer};
use crate::estimate::Scorer;
use crate::presentation::{Presentation, VisualParameters, render_tick};
use crate::report::StrengthReport;

pub const DEFAULT_EXPORT_FILENAME: &str = "password-art.png";
pub const DEFAULT_ACK_DURATION: Duration = Duration::from_millis(1200);

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied";
pub const EXPORT_LABEL: &str = "Export";
pub const SAVED_LABEL: &str = "Saved";
pub const FAILED_LABEL: &str = "Failed";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
    #[error("Clipboard write was rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No rendering surface to export")]
    NoSurface,
    #[error("Failed to snapshot the rendering surface: {0}")]
    Snapshot(String),
    #[error("Failed to save exported image: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes text to the system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Serializes the rendering surface to PNG bytes.
pub trait CanvasSnapshot {
    fn to_png(&self) -> Result<Vec<u8>, ExportError>;
}

/// Receives a downloadable file.
pub trait Download {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// Saves downloads into a fixed directory.
#[derive(Debug, Clone)]
pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Download for DirectoryDownload {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Exported {} bytes to {:?}", bytes.len(), path);

        Ok(())
    }
}

/// Page settings.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// How long a copy/export acknowledgment stays on its button.
    pub ack_duration: Duration,
    pub export_filename: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ack_duration: DEFAULT_ACK_DURATION,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

/// Whether the password input shows its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    /// Label of the toggle button: the action it will perform.
    pub fn button_label(self) -> &'static str {
        match self {
            Visibility::Hidden => "Show",
            Visibility::Shown => "Hide",
        }
    }

    /// Input type attribute for the password field.
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Hidden => "password",
            Visibility::Shown => "text",
        }
    }
}

/// Button label that shows an acknowledgment for a while, then reverts.
#[derive(Debug, Clone)]
pub struct TransientLabel {
    idle: &'static str,
    shown: Option<(&'static str, Instant)>,
    duration: Duration,
}

impl TransientLabel {
    pub fn new(idle: &'static str, duration: Duration) -> Self {
        Self {
            idle,
            shown: None,
            duration,
        }
    }

    /// Shows `label` from `now` until the duration elapses. A newer
    /// acknowledgment replaces an older one.
    pub fn acknowledge(&mut self, label: &'static str, now: Instant) {
        self.shown = Some((label, now));
    }

    pub fn current(&self, now: Instant) -> &'static str {
        match self.shown {
            Some((label, since)) if now.saturating_duration_since(since) < self.duration => label,
            _ => self.idle,
        }
    }

    pub fn idle(&self) -> &'static str {
        self.idle
    }
}

/// Outcome of a copy or export action, as shown on its button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    Done,
    Failed,
}

pub struct PageController<S> {
    analyzer: Analyzer<S>,
    latest: Option<StrengthReport>,
    visibility: Visibility,
    copy_button: TransientLabel,
    export_button: TransientLabel,
    config: PageConfig,
}

impl<S: Scorer> PageController<S> {
    pub fn new(analyzer: Analyzer<S>, config: PageConfig) -> Self {
        Self {
            analyzer,
            latest: None,
            visibility: Visibility::default(),
            copy_button: TransientLabel::new(COPY_LABEL, config.ack_duration),
            export_button: TransientLabel::new(EXPORT_LABEL, config.ack_duration),
            config,
        }
    }

    /// Analyzes the empty password so the page has a report to show before
    /// the first keystroke.
    pub fn init(&mut self) -> Result<Presentation, AnalyzeError> {
        self.on_input(&SecretString::new(String::new().into()))
    }

    /// Handles a change of the password input.
    ///
    /// On success the new report replaces the previous one. On failure the
    /// previous report is dropped so stale results are never shown, and the
    /// controller stays usable for the next event.
    pub fn on_input(&mut self, password: &SecretString) -> Result<Presentation, AnalyzeError> {
        match self.analyzer.analyze(password) {
            Ok(report) => {
                let presentation = Presentation::from_report(&report);
                self.latest = Some(report);
                Ok(presentation)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Input ignored: {}", e);
                self.latest = None;
                Err(e)
            }
        }
    }

    pub fn latest(&self) -> Option<&StrengthReport> {
        self.latest.as_ref()
    }

    /// Parameters for the next frame. Without a report the neutral
    /// default is drawn.
    pub fn frame(&self, time: f64) -> VisualParameters {
        match &self.latest {
            Some(report) => render_tick(report, time),
            None => render_tick(&StrengthReport::default(), time),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggle();
        self.visibility
    }

    /// Copies the password; failures only change the button label.
    pub fn copy_password<C: Clipboard>(
        &mut self,
        clipboard: &C,
        password: &SecretString,
        now: Instant,
    ) -> Ack {
        let ack = match clipboard.write_text(password.expose_secret()) {
            Ok(()) => Ack::Done,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Copy to clipboard failed: {}", _e);
                Ack::Failed
            }
        };
        let label = match ack {
            Ack::Done => COPIED_LABEL,
            Ack::Failed => FAILED_LABEL,
        };
        self.copy_button.acknowledge(label, now);
        ack
    }

    /// Exports the rendering surface as an image download.
    pub fn export_image<C: CanvasSnapshot, D: Download>(
        &mut self,
        canvas: Option<&C>,
        download: &D,
        now: Instant,
    ) -> Ack {
        let ack = match export(canvas, download, &self.config.export_filename) {
            Ok(()) => Ack::Done,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Image export failed: {}", _e);
                Ack::Failed
            }
        };
        let label = match ack {
            Ack::Done => SAVED_LABEL,
            Ack::Failed => FAILED_LABEL,
        };
        self.export_button.acknowledge(label, now);
        ack
    }

    pub fn copy_label(&self, now: Instant) -> &'static str {
        self.copy_button.current(now)
    }

    pub fn export_label(&self, now: Instant) -> &'static str {
        self.export_button.current(now)
    }
}

fn export<C: CanvasSnapshot, D: Download>(
    canvas: Option<&C>,
    download: &D,
    filename: &str,
) -> Result<(), ExportError> {
    let canvas = canvas.ok_or(ExportError::NoSurface)?;
    let png = canvas.to_png()?;
    download.save(filename, &png)
}

/// Sends `label`, then the idle label once `duration` has passed.
///
/// Cancelling `token` (for instance on a newer click) skips the revert so a
/// stale timer cannot clobber a fresh acknowledgment.
#[cfg(feature = "async")]
pub async fn acknowledge_tx(
    label: &'static str,
    idle: &'static str,
    duration: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<&'static str>,
) {
    if tx.send(label).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send acknowledgment label");
        return;
    }

    tokio::select! {
        _ = token.cancelled() => {}
        _ = tokio::time::sleep(duration) => {
            if tx.send(idle).await.is_err() {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send idle label");
            }
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_acknowledge_tx_reverts_after_duration() {
        let (tx, mut rx) = mpsc::channel(2);
        let token = CancellationToken::new();

        let handle = tokio::spawn(acknowledge_tx(
            COPIED_LABEL,
            COPY_LABEL,
            DEFAULT_ACK_DURATION,
            token,
            tx,
        ));

        assert_eq!(rx.recv().await, Some(COPIED_LABEL));
        let start = tokio::time::Instant::now();
        assert_eq!(rx.recv().await, Some(COPY_LABEL));
        assert!(start.elapsed() >= DEFAULT_ACK_DURATION);

        handle.await.expect("task completes");
    }

    #[tokio::test(start_paused = true)]
    async fn test_acknowledge_tx_cancelled_skips_revert() {
        let (tx, mut rx) = mpsc::channel(2);
        let token = CancellationToken::new();

        let handle = tokio::spawn(acknowledge_tx(
            FAILED_LABEL,
            COPY_LABEL,
            DEFAULT_ACK_DURATION,
            token.clone(),
            tx,
        ));

        assert_eq!(rx.recv().await, Some(FAILED_LABEL));
        token.cancel();
        handle.await.expect("task completes");

        // sender dropped without sending the idle label
        assert_eq!(rx.recv().await, None);
    }
}
