//! Slab behaviors
//!
//! A slab is one node of the dataflow graph. Every behavior is a variant of
//! [`SlabSlot`] and implements [`Slab`]. The graph owns the fan-out lists, a
//! behavior only decides which events leave it.

mod convert;
mod delay;
mod glower;
mod led;
mod notifier;
mod ticker;
mod waver;

pub use convert::{Hsv2Rgb, Rgb2Hsv};
pub use delay::Delay;
pub use glower::{Glower, GlowerConfig, GlowerControl};
pub use led::{ChannelOrder, Led};
pub use notifier::Notifier;
pub use ticker::Ticker;
pub use waver::{Waver, WaverConfig, WaverControl};

use crate::event::Event;

const SLAB_NAME_LED: &str = "led";
const SLAB_NAME_DELAY: &str = "delay";
const SLAB_NAME_TICKER: &str = "ticker";
const SLAB_NAME_GLOWER: &str = "glower";
const SLAB_NAME_WAVER: &str = "waver";
const SLAB_NAME_HSV2RGB: &str = "hsv2rgb";
const SLAB_NAME_RGB2HSV: &str = "rgb2hsv";
const SLAB_NAME_NOTIFIER: &str = "notifier";

/// Events leaving a slab after one stimulation
///
/// Returning an `Emit` is how a handler gives up the reference it was handed:
/// whatever it owns is either stored inside the slab, dropped, or moved in
/// here to be propagated to the children.
#[must_use]
#[derive(Debug)]
pub enum Emit {
    /// Nothing to propagate
    None,
    /// Propagate one event
    One(Event),
    /// Propagate two events, the first one to all children before the second
    Two(Event, Event),
}

pub trait Slab {
    /// Handle one event
    fn stimulate(&mut self, event: Event) -> Emit;
}

/// Slab type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlabKind {
    Led,
    Delay,
    Ticker,
    Glower,
    Waver,
    Hsv2Rgb,
    Rgb2Hsv,
    Notifier,
}

impl SlabKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Led => SLAB_NAME_LED,
            Self::Delay => SLAB_NAME_DELAY,
            Self::Ticker => SLAB_NAME_TICKER,
            Self::Glower => SLAB_NAME_GLOWER,
            Self::Waver => SLAB_NAME_WAVER,
            Self::Hsv2Rgb => SLAB_NAME_HSV2RGB,
            Self::Rgb2Hsv => SLAB_NAME_RGB2HSV,
            Self::Notifier => SLAB_NAME_NOTIFIER,
        }
    }
}

/// Slab slot - enum containing all slab behaviors
#[derive(Debug)]
pub enum SlabSlot {
    /// Writes colors into LED memory
    Led(Led),
    /// Fixed length delay line
    Delay(Delay),
    /// Periodic tick source
    Ticker(Ticker),
    /// Stochastic glow generator
    Glower(Glower),
    /// Triangle wave generator
    Waver(Waver),
    /// HSV to RGB converter
    Hsv2Rgb(Hsv2Rgb),
    /// RGB to HSV converter
    Rgb2Hsv(Rgb2Hsv),
    /// Passive observer
    Notifier(Notifier),
}

impl SlabSlot {
    pub const fn kind(&self) -> SlabKind {
        match self {
            Self::Led(_) => SlabKind::Led,
            Self::Delay(_) => SlabKind::Delay,
            Self::Ticker(_) => SlabKind::Ticker,
            Self::Glower(_) => SlabKind::Glower,
            Self::Waver(_) => SlabKind::Waver,
            Self::Hsv2Rgb(_) => SlabKind::Hsv2Rgb,
            Self::Rgb2Hsv(_) => SlabKind::Rgb2Hsv,
            Self::Notifier(_) => SlabKind::Notifier,
        }
    }
}

impl Slab for SlabSlot {
    fn stimulate(&mut self, event: Event) -> Emit {
        match self {
            Self::Led(slab) => slab.stimulate(event),
            Self::Delay(slab) => slab.stimulate(event),
            Self::Ticker(slab) => slab.stimulate(event),
            Self::Glower(slab) => slab.stimulate(event),
            Self::Waver(slab) => slab.stimulate(event),
            Self::Hsv2Rgb(slab) => slab.stimulate(event),
            Self::Rgb2Hsv(slab) => slab.stimulate(event),
            Self::Notifier(slab) => slab.stimulate(event),
        }
    }
}

macro_rules! impl_from_slab {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for SlabSlot {
                fn from(slab: $variant) -> Self {
                    Self::$variant(slab)
                }
            }
        )*
    };
}

impl_from_slab!(Led, Delay, Ticker, Glower, Waver, Hsv2Rgb, Rgb2Hsv, Notifier);
