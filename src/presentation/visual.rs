//! Per-frame visual parameters and the particle field they drive.
//!
//! Nothing here is stored between frames: the rendering surface calls
//! [`VisualParameters::at`] each tick with the current report and a
//! monotonic time in seconds, then draws what [`ParticleField`] yields.

use serde::Serialize;

use crate::noise::noise2;
use crate::report::StrengthReport;

const BASE_DENSITY: f64 = 30.0;
const DENSITY_PER_SCORE: f64 = 40.0;
const DENSITY_PULSE: f64 = 20.0;

const HUE_AT_WEAKEST: f64 = 200.0;
const HUE_AT_STRONGEST: f64 = 40.0;

const MIN_PARTICLE_SIZE: f64 = 4.0;
const ENTROPY_WINDOW: u64 = 10;
// Stands in for a zero entropy so an empty field still moves.
const FALLBACK_ENTROPY: u64 = 10;

const BAND_COUNT: usize = 6;
// Particles are drawn on a canvas widened by this margin on each side.
const WRAP_MARGIN: f64 = 100.0;

/// Rendering inputs derived from a report at time `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualParameters {
    pub time: f64,
    pub particle_density: f64,
    pub hue_base: f64,
    pub size_modifier: f64,
    /// Horizontal share of the canvas the noise offset may cover.
    pub spread: f64,
    /// Amplitude in pixels of the horizontal sine sway.
    pub swing: f64,
}

impl VisualParameters {
    pub fn at(report: &StrengthReport, time: f64) -> Self {
        let time = if time.is_finite() { time } else { 0.0 };
        let score = f64::from(report.score.value());
        let entropy = match report.rounded_entropy() {
            0 => FALLBACK_ENTROPY,
            e => e,
        };

        let size_modifier = (12.0
            * (0.6 + (entropy % ENTROPY_WINDOW) as f64 / 15.0)
            * (0.4 + score * 0.4))
            .max(MIN_PARTICLE_SIZE);

        Self {
            time,
            particle_density: BASE_DENSITY
                + score * DENSITY_PER_SCORE
                + time.sin().abs() * DENSITY_PULSE,
            hue_base: HUE_AT_WEAKEST + (HUE_AT_STRONGEST - HUE_AT_WEAKEST) * score / 4.0,
            size_modifier,
            spread: 1.0 - score * 0.15,
            swing: 50.0 + entropy as f64 * 2.0,
        }
    }

    /// Number of particles to draw this frame.
    pub fn particle_count(&self) -> usize {
        self.particle_density.ceil() as usize
    }
}

/// Draw loop entry point: parameters for the next frame.
pub fn render_tick(report: &StrengthReport, time: f64) -> VisualParameters {
    VisualParameters::at(report, time)
}

/// An HSLA color; saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue,
            (self.saturation * 100.0).round(),
            (self.lightness * 100.0).round(),
            self.alpha
        )
    }
}

/// A horizontal background stripe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub y: f64,
    pub height: f64,
    pub color: Hsla,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Hsla,
}

/// Particle layout for one frame on a `width` x `height` surface.
#[derive(Debug, Clone, Copy)]
pub struct ParticleField {
    params: VisualParameters,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(params: VisualParameters, width: f64, height: f64) -> Self {
        Self {
            params,
            width,
            height,
        }
    }

    fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Faint gradient stripes tinted with the base hue.
    pub fn bands(&self) -> Vec<Band> {
        if !self.is_drawable() {
            return Vec::new();
        }
        let height = self.height / BAND_COUNT as f64;
        (0..BAND_COUNT)
            .map(|i| Band {
                y: i as f64 * height,
                height,
                color: Hsla {
                    hue: self.params.hue_base,
                    saturation: 0.3,
                    lightness: 0.06 + i as f64 * 0.02,
                    alpha: 0.02,
                },
            })
            .collect()
    }

    pub fn particles(&self) -> impl Iterator<Item = Particle> + '_ {
        let count = if self.is_drawable() {
            self.params.particle_count()
        } else {
            0
        };
        (0..count).map(move |i| self.particle(i))
    }

    fn particle(&self, index: usize) -> Particle {
        let p = &self.params;
        let i = index as f64;
        let t = p.time;

        let drift = (noise2(i * 0.1, t * 0.05) - 0.5) * self.width * p.spread;
        let x = self.width / 2.0 + drift + (t * (0.5 + i * 0.01) + i).sin() * p.swing;
        let y = (i / p.particle_density) * self.height + (t + i).cos() * 10.0;

        Particle {
            x: x % (self.width + 2.0 * WRAP_MARGIN) - WRAP_MARGIN,
            y: (y + self.height) % self.height,
            size: p.size_modifier,
            color: Hsla {
                hue: (p.hue_base + i * 6.0).rem_euclid(360.0),
                saturation: 0.7,
                lightness: 0.5,
                alpha: 0.85,
            },
        }
    }
}
