//! Deterministic triangle wave
//!
//! Rises from `ym - yd` to `ym + yd` over one period, falls back over the
//! next one and re-anchors once two periods have passed.

use super::elapsed_ms;

/// Wave generator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    /// Period in milliseconds
    pub period_ms: u32,
    /// Middle value of the window
    pub ym: f32,
    /// Half width of the window
    pub yd: f32,
}

/// Wave generator state
#[derive(Debug, Clone)]
pub struct WaveFunc {
    conf: WaveConfig,
    /// Anchor time, `None` until the first step
    t0: Option<u32>,
}

impl WaveFunc {
    pub const fn new(conf: WaveConfig) -> Self {
        Self { conf, t0: None }
    }

    pub const fn config(&self) -> &WaveConfig {
        &self.conf
    }

    /// Replace the configuration, keeping the current anchor
    pub const fn set_config(&mut self, conf: WaveConfig) {
        self.conf = conf;
    }

    pub const fn reset(&mut self) {
        self.t0 = None;
    }

    pub const fn reset_with(&mut self, conf: WaveConfig) {
        self.conf = conf;
        self.reset();
    }

    /// Evaluate the wave at time `t` (milliseconds).
    ///
    /// The output never leaves `[ym - yd, ym + yd]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn process(&mut self, t: u32) -> f32 {
        let WaveConfig { period_ms, ym, yd } = self.conf;
        let period = i64::from(period_ms.max(1));

        let t0 = match self.t0 {
            Some(t0) if i64::from(elapsed_ms(t, t0)) < 2 * period => t0,
            _ => {
                self.t0 = Some(t);
                t
            }
        };

        let elapsed = i64::from(elapsed_ms(t, t0));
        let period_f = period as f32;

        if elapsed < 0 {
            ym - yd
        } else if elapsed < period {
            ym + (2.0 / period_f * elapsed as f32 - 1.0) * yd
        } else if elapsed < 2 * period {
            ym - (2.0 / period_f * (elapsed - period) as f32 - 1.0) * yd
        } else {
            ym - yd
        }
    }
}
