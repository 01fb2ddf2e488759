mod utils;

use smart_leds::RGB8;
pub use utils::{hsv2rgb, rgb2hsv};

pub type Rgb = RGB8;

/// Floating point HSV color
///
/// `h` is in degrees `[0, 360]`, `s` and `v` are in `[0, 1]`.
/// Values produced by [`rgb2hsv`] report `s` and `v` on a `[0, 100]` scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Check that every component lies in the domain accepted by [`hsv2rgb`]
    pub fn in_range(self) -> bool {
        (0.0..=360.0).contains(&self.h)
            && (0.0..=1.0).contains(&self.s)
            && (0.0..=1.0).contains(&self.v)
    }
}
