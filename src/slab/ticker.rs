//! Periodic tick source
//!
//! A ticker is armed when it is inserted into a graph. From then on the
//! shared timer worker produces a tick every period, which the graph
//! propagates to the ticker's children.

use embassy_time::Duration;

use super::{Emit, Slab};
use crate::error::SlabError;
use crate::event::{Event, EventKind};
use crate::timer::{TickTarget, TimerHandle};

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    timer: Option<TimerHandle>,
}

impl Ticker {
    pub fn new(period: Duration) -> Result<Self, SlabError> {
        if period.as_ticks() == 0 {
            return Err(SlabError::InvalidPeriod);
        }
        Ok(Self {
            period,
            timer: None,
        })
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Check if the timer is running
    pub const fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub(crate) fn arm(&mut self, target: TickTarget) -> Result<(), SlabError> {
        self.timer = Some(TimerHandle::start(self.period, target)?);
        Ok(())
    }

    /// Stop the timer, a later insert arms it again
    pub(crate) fn disarm(&mut self) {
        self.timer = None;
    }

    /// Check if the timer is held by a reset that is still propagating
    pub fn is_suspended(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerHandle::is_suspended)
    }

    /// Restart the timer after a reset, the next tick lands one period from now
    pub(crate) fn resume(&mut self) {
        if let Some(timer) = &mut self.timer {
            timer.resume();
        }
    }

    /// Check if a tick produced during `epoch` is still current
    pub(crate) fn accepts(&self, epoch: u32) -> bool {
        self.timer.as_ref().is_some_and(|timer| timer.epoch() == epoch)
    }
}

impl Slab for Ticker {
    fn stimulate(&mut self, event: Event) -> Emit {
        match event.kind() {
            EventKind::Reset => {
                // Queued ticks go stale, the graph resumes the timer once the reset has propagated
                if let Some(timer) = &mut self.timer {
                    timer.suspend();
                }
                Emit::One(event)
            }
            // A ticker is a source, incoming ticks stop here
            EventKind::Tick => Emit::None,
            EventKind::Rgb | EventKind::Hsv => Emit::One(event),
        }
    }
}
