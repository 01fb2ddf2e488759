//! Reference counted slab events
//!
//! An [`Event`] is an immutable payload shared by every slab that currently
//! works on it. Cloning an event acquires one more reference, dropping a
//! handle releases it, and the payload is freed together with the last
//! handle. Events are `Send + Sync`, so the same event may be held by call
//! stacks on several threads at once.

use std::sync::{Arc, Weak};

use crate::color::{Hsv, Rgb};

/// Event kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Reset,
    Tick,
    Rgb,
    Hsv,
}

/// Event payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventData {
    /// Discard accumulated state and re-propagate
    Reset,
    /// Monotonic timestamp in milliseconds, wrapping at `u32::MAX`
    Tick(u32),
    Rgb(Rgb),
    Hsv(Hsv),
}

impl EventData {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Reset => EventKind::Reset,
            Self::Tick(_) => EventKind::Tick,
            Self::Rgb(_) => EventKind::Rgb,
            Self::Hsv(_) => EventKind::Hsv,
        }
    }
}

/// Shared handle to an event payload
#[derive(Debug, Clone)]
pub struct Event {
    inner: Arc<EventData>,
}

impl Event {
    pub fn new(data: EventData) -> Self {
        Self {
            inner: Arc::new(data),
        }
    }

    pub fn reset() -> Self {
        Self::new(EventData::Reset)
    }

    pub fn tick(time: u32) -> Self {
        Self::new(EventData::Tick(time))
    }

    pub fn rgb(rgb: Rgb) -> Self {
        Self::new(EventData::Rgb(rgb))
    }

    pub fn hsv(hsv: Hsv) -> Self {
        Self::new(EventData::Hsv(hsv))
    }

    pub fn data(&self) -> &EventData {
        &self.inner
    }

    pub fn kind(&self) -> EventKind {
        self.inner.kind()
    }

    /// Tick time, if this is a tick event
    pub fn time(&self) -> Option<u32> {
        match *self.inner {
            EventData::Tick(time) => Some(time),
            _ => None,
        }
    }

    /// Number of live handles to this event
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two handles refer to the same event
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Observe the event without keeping it alive
    pub fn downgrade(&self) -> WeakEvent {
        WeakEvent {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tear the event down right away.
    ///
    /// Only succeeds when this is the last handle. Otherwise the event is
    /// handed back untouched.
    pub fn try_destroy(self) -> Result<EventData, Self> {
        Arc::try_unwrap(self.inner).map_err(|inner| Self { inner })
    }
}

/// Non-owning observer of an [`Event`]
#[derive(Debug, Clone)]
pub struct WeakEvent {
    inner: Weak<EventData>,
}

impl WeakEvent {
    /// Check whether the observed event still has owners
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn upgrade(&self) -> Option<Event> {
        self.inner.upgrade().map(|inner| Event { inner })
    }
}
