//! Delay line
//!
//! Holds the last `N` color or tick events and releases each of them `N`
//! stimulations after it arrived.

use super::{Emit, Slab};
use crate::error::SlabError;
use crate::event::{Event, EventKind};

#[derive(Debug)]
pub struct Delay {
    slots: Vec<Option<Event>>,
    cursor: usize,
}

impl Delay {
    /// Create a delay line of `periods` stimulations
    pub fn new(periods: usize) -> Result<Self, SlabError> {
        if periods == 0 {
            return Err(SlabError::InvalidDelay);
        }
        let mut slots = Vec::with_capacity(periods);
        slots.resize_with(periods, || None);
        Ok(Self { slots, cursor: 0 })
    }

    /// Length of the delay line
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the slot written by the next stimulation
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Event parked in slot `index`
    pub fn slot(&self, index: usize) -> Option<&Event> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of parked events
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Empty every slot and rewind the cursor.
    ///
    /// Parked events are released.
    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.cursor = 0;
    }

    /// Park `event` and return the event it evicted
    fn push(&mut self, event: Event) -> Option<Event> {
        let evicted = self.slots[self.cursor].replace(event);
        self.cursor = (self.cursor + 1) % self.slots.len();
        evicted
    }
}

impl Slab for Delay {
    fn stimulate(&mut self, event: Event) -> Emit {
        match event.kind() {
            EventKind::Reset => {
                self.clear();
                Emit::One(event)
            }
            EventKind::Tick | EventKind::Rgb | EventKind::Hsv => {
                self.push(event).map_or(Emit::None, Emit::One)
            }
        }
    }
}
