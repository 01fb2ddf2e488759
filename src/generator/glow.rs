//! Stochastic glow
//!
//! First order low-pass filter pulling the output towards the middle of a
//! window, perturbed each step by a random sample.

use super::elapsed_ms;

/// Glow generator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowConfig {
    /// Time constant
    pub a: f32,
    /// Gain constant
    pub b: f32,
    /// Middle value of the window
    pub ym: f32,
    /// Width of the window
    pub yd: f32,
}

/// Glow generator state
#[derive(Debug, Clone)]
pub struct GlowFunc {
    conf: GlowConfig,
    /// Previous output
    y1: f32,
    /// Time of the previous step, `None` until the first step
    t1: Option<u32>,
}

impl GlowFunc {
    pub const fn new(conf: GlowConfig) -> Self {
        Self {
            conf,
            y1: conf.ym,
            t1: None,
        }
    }

    pub const fn config(&self) -> &GlowConfig {
        &self.conf
    }

    /// Previous output, `ym` right after a reset
    pub const fn output(&self) -> f32 {
        self.y1
    }

    /// Time of the previous step, `None` until the first step after a reset
    pub const fn last_time(&self) -> Option<u32> {
        self.t1
    }

    /// Replace the configuration without touching the filter state
    pub const fn set_config(&mut self, conf: GlowConfig) {
        self.conf = conf;
    }

    /// Return to the initial state of the current configuration
    pub const fn reset(&mut self) {
        self.y1 = self.conf.ym;
        self.t1 = None;
    }

    /// Replace the configuration and return to its initial state
    pub const fn reset_with(&mut self, conf: GlowConfig) {
        self.conf = conf;
        self.reset();
    }

    /// Advance the filter to time `t` (milliseconds) using random sample `w`.
    ///
    /// The first call only seeds the state and returns `ym`. A sample outside
    /// `[0, 1]` collapses the perturbation so the step is a pure low-pass.
    #[allow(clippy::cast_precision_loss)]
    pub fn process(&mut self, t: u32, w: f32) -> f32 {
        let GlowConfig { a, b, ym, yd } = self.conf;

        let Some(t1) = self.t1 else {
            self.t1 = Some(t);
            self.y1 = ym;
            return ym;
        };

        let dt = elapsed_ms(t, t1) as f32 / 1000.0;
        let w = if (0.0..=1.0).contains(&w) { w } else { 0.5 };

        let p1 = dt * (a + b);
        let p2 = dt * b * yd;
        let y = self.y1 + p1 * (ym - self.y1) + p2 * (w - 0.5);

        self.t1 = Some(t);
        self.y1 = y;
        y
    }
}
