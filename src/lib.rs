pub mod channel;
pub mod color;
pub mod error;
pub mod event;
pub mod generator;
pub mod graph;
pub mod led_buffer;
pub mod slab;
pub mod timer;
pub mod tuning;

pub use error::SlabError;
pub use event::{Event, EventData, EventKind, WeakEvent};
pub use graph::{INBOX_SIZE, Inbound, POLL_INTERVAL, SlabGraph, SlabId, Stimulator};
pub use led_buffer::{LedBuffer, LedRegion};
pub use slab::{
    ChannelOrder, Delay, Emit, Glower, GlowerConfig, GlowerControl, Hsv2Rgb, Led, Notifier,
    Rgb2Hsv, Slab, SlabKind, SlabSlot, Ticker, Waver, WaverConfig, WaverControl,
};
pub use timer::{TICKER_THREAD_NAME, uptime_ms};

pub use color::{Hsv, Rgb, hsv2rgb, rgb2hsv};
pub use generator::{GlowConfig, GlowFunc, WaveConfig, WaveFunc};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push LED memory onto the data line of a
/// specific platform. See [`LedBuffer::flush`].
pub trait OutputDriver {
    /// Write raw LED bytes, already in wire channel order
    fn write(&mut self, buffer: &[u8]);
}
