//! LED sink
//!
//! Writes incoming RGB colors into a region of LED memory. The slab never
//! talks to hardware, an output driver serializes the buffer later.

use super::{Emit, Slab};
use crate::color::Rgb;
use crate::error::SlabError;
use crate::event::{Event, EventData};
use crate::led_buffer::LedRegion;

/// Byte layout of a single LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Three channel LED, written as green, red, blue
    Rgb,
    /// Three channel LED, written as red, green, blue
    Grb,
    /// Single channel driven by the red component
    Red,
    /// Single channel driven by the green component
    Green,
    /// Single channel driven by the blue component
    Blue,
}

impl ChannelOrder {
    /// Number of bytes one LED occupies
    pub const fn width(self) -> usize {
        match self {
            Self::Rgb | Self::Grb => 3,
            Self::Red | Self::Green | Self::Blue => 1,
        }
    }

    fn write(self, rgb: Rgb, region: &LedRegion) {
        match self {
            Self::Rgb => region.write(&[rgb.g, rgb.r, rgb.b]),
            Self::Grb => region.write(&[rgb.r, rgb.g, rgb.b]),
            Self::Red => region.write(&[rgb.r]),
            Self::Green => region.write(&[rgb.g]),
            Self::Blue => region.write(&[rgb.b]),
        }
    }
}

#[derive(Clone)]
pub struct Led {
    region: Option<LedRegion>,
    order: ChannelOrder,
}

impl core::fmt::Debug for Led {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Led")
            .field("offset", &self.region.as_ref().map(LedRegion::offset))
            .field("order", &self.order)
            .finish()
    }
}

impl Led {
    /// Create an LED slab writing into `region`.
    ///
    /// Without a region the slab only forwards events.
    pub fn new(region: Option<LedRegion>, order: ChannelOrder) -> Result<Self, SlabError> {
        if let Some(region) = &region {
            if region.len() < order.width() {
                return Err(SlabError::RegionTooSmall {
                    needed: order.width(),
                    available: region.len(),
                });
            }
        }
        Ok(Self { region, order })
    }

    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    pub const fn region(&self) -> Option<&LedRegion> {
        self.region.as_ref()
    }
}

impl Slab for Led {
    fn stimulate(&mut self, event: Event) -> Emit {
        if let (EventData::Rgb(rgb), Some(region)) = (event.data(), &self.region) {
            self.order.write(*rgb, region);
        }
        Emit::One(event)
    }
}
