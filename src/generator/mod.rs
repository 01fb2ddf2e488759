//! Value generators
//!
//! Stateful time-indexed functions producing a brightness trajectory.
//! Both generators take time as a wrapping millisecond counter, the same
//! clock carried by tick events.

mod glow;
mod wave;

pub use glow::{GlowConfig, GlowFunc};
pub use wave::{WaveConfig, WaveFunc};

/// Signed distance from `since` to `now` on a wrapping millisecond clock
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn elapsed_ms(now: u32, since: u32) -> i32 {
    now.wrapping_sub(since) as i32
}
