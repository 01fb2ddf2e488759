//! Wave generator slab
//!
//! On every tick produces an HSV color whose value follows a triangle wave,
//! then forwards the tick itself.

use super::{Emit, Slab};
use crate::color::Hsv;
use crate::event::{Event, EventData};
use crate::generator::{WaveConfig, WaveFunc};
use crate::tuning::Tunable;

/// Configuration for the waver slab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaverConfig {
    /// Hue in degrees `[0, 360]`
    pub hue: f32,
    /// Saturation `[0, 1]`
    pub sat: f32,
    /// Value generator
    pub val: WaveConfig,
}

#[derive(Debug)]
pub struct Waver {
    config: Tunable<WaverConfig>,
    generator: WaveFunc,
}

impl Waver {
    pub fn new(config: &WaverConfig) -> Self {
        Self {
            config: Tunable::new(*config),
            generator: WaveFunc::new(config.val),
        }
    }

    /// Get a handle for tuning this waver from another thread
    pub fn control(&self) -> WaverControl {
        WaverControl {
            config: self.config.clone(),
        }
    }

    pub const fn generator(&self) -> &WaveFunc {
        &self.generator
    }
}

impl Slab for Waver {
    fn stimulate(&mut self, event: Event) -> Emit {
        match *event.data() {
            EventData::Reset => {
                self.generator.reset_with(self.config.get().val);
                Emit::One(event)
            }
            EventData::Tick(time) => {
                let config = self.config.get();
                self.generator.set_config(config.val);
                let v = self.generator.process(time);

                Emit::Two(Event::hsv(Hsv::new(config.hue, config.sat, v)), event)
            }
            _ => Emit::One(event),
        }
    }
}

/// Tuning handle of a [`Waver`]
#[derive(Debug, Clone)]
pub struct WaverControl {
    config: Tunable<WaverConfig>,
}

impl WaverControl {
    pub fn config(&self) -> WaverConfig {
        self.config.get()
    }

    pub fn set_config(&self, config: WaverConfig) {
        self.config.set(config);
    }

    pub fn set_hue(&self, hue: f32) {
        self.config.update(|config| config.hue = hue);
    }

    pub fn set_saturation(&self, sat: f32) {
        self.config.update(|config| config.sat = sat);
    }

    /// Set the wave period, i.e. the speed of the animation
    pub fn set_period(&self, period_ms: u32) {
        self.config.update(|config| config.val.period_ms = period_ms);
    }

    pub fn set_window(&self, ym: f32, yd: f32) {
        self.config.update(|config| {
            config.val.ym = ym;
            config.val.yd = yd;
        });
    }
}
