//! Color space converters
//!
//! Stateless slabs replacing a color event by its counterpart in the other
//! color space. Everything else passes through.

use super::{Emit, Slab};
use crate::color::{hsv2rgb, rgb2hsv};
use crate::event::{Event, EventData};

/// Converts `Hsv` events to `Rgb` events
#[derive(Debug, Clone, Copy, Default)]
pub struct Hsv2Rgb;

impl Slab for Hsv2Rgb {
    fn stimulate(&mut self, event: Event) -> Emit {
        match *event.data() {
            EventData::Hsv(hsv) => Emit::One(Event::rgb(hsv2rgb(hsv))),
            _ => Emit::One(event),
        }
    }
}

/// Converts `Rgb` events to `Hsv` events
///
/// Saturation and value of the produced events are on a `[0, 100]` scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rgb2Hsv;

impl Slab for Rgb2Hsv {
    fn stimulate(&mut self, event: Event) -> Emit {
        match *event.data() {
            EventData::Rgb(rgb) => Emit::One(Event::hsv(rgb2hsv(rgb))),
            _ => Emit::One(event),
        }
    }
}
