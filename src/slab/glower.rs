//! Glow generator slab
//!
//! On every tick produces an HSV color whose value follows a stochastic
//! glow, then forwards the tick itself.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Emit, Slab};
use crate::color::Hsv;
use crate::event::{Event, EventData};
use crate::generator::{GlowConfig, GlowFunc};
use crate::tuning::Tunable;

/// Configuration for the glower slab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowerConfig {
    /// Hue in degrees `[0, 360]`
    pub hue: f32,
    /// Saturation `[0, 1]`
    pub sat: f32,
    /// Value generator
    pub val: GlowConfig,
}

#[derive(Debug)]
pub struct Glower {
    config: Tunable<GlowerConfig>,
    generator: GlowFunc,
    rng: StdRng,
}

impl Glower {
    pub fn new(config: &GlowerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a glower with a reproducible random sequence
    pub fn with_seed(config: &GlowerConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GlowerConfig, rng: StdRng) -> Self {
        Self {
            config: Tunable::new(*config),
            generator: GlowFunc::new(config.val),
            rng,
        }
    }

    /// Get a handle for tuning this glower from another thread
    pub fn control(&self) -> GlowerControl {
        GlowerControl {
            config: self.config.clone(),
        }
    }

    pub const fn generator(&self) -> &GlowFunc {
        &self.generator
    }
}

impl Slab for Glower {
    fn stimulate(&mut self, event: Event) -> Emit {
        match *event.data() {
            EventData::Reset => {
                self.generator.reset_with(self.config.get().val);
                Emit::One(event)
            }
            EventData::Tick(time) => {
                let config = self.config.get();
                self.generator.set_config(config.val);
                let sample = self.rng.gen_range(0.0..1.0);
                let v = self.generator.process(time, sample);

                Emit::Two(Event::hsv(Hsv::new(config.hue, config.sat, v)), event)
            }
            _ => Emit::One(event),
        }
    }
}

/// Tuning handle of a [`Glower`]
///
/// Changes are picked up on the next tick without resetting the generator.
#[derive(Debug, Clone)]
pub struct GlowerControl {
    config: Tunable<GlowerConfig>,
}

impl GlowerControl {
    pub fn config(&self) -> GlowerConfig {
        self.config.get()
    }

    pub fn set_config(&self, config: GlowerConfig) {
        self.config.set(config);
    }

    pub fn set_hue(&self, hue: f32) {
        self.config.update(|config| config.hue = hue);
    }

    pub fn set_saturation(&self, sat: f32) {
        self.config.update(|config| config.sat = sat);
    }

    /// Set the gain constant `b`
    pub fn set_gain(&self, gain: f32) {
        self.config.update(|config| config.val.b = gain);
    }

    /// Set the time constant `a`
    pub fn set_time_constant(&self, a: f32) {
        self.config.update(|config| config.val.a = a);
    }

    /// Move the glow window
    pub fn set_window(&self, ym: f32, yd: f32) {
        self.config.update(|config| {
            config.val.ym = ym;
            config.val.yd = yd;
        });
    }
}
