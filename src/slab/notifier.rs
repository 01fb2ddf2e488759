//! Passive observer
//!
//! Hands every event to a callback and forwards it unchanged. Useful as a
//! debugging or telemetry tap.

use super::{Emit, Slab};
use crate::event::Event;

type Callback = Box<dyn FnMut(&Event) + Send>;

pub struct Notifier {
    callback: Callback,
}

impl core::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}

impl Notifier {
    /// Create a notifier calling `callback` for every event.
    ///
    /// The callback only borrows the event, keeping it requires a clone.
    pub fn new(callback: impl FnMut(&Event) + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl Slab for Notifier {
    fn stimulate(&mut self, event: Event) -> Emit {
        (self.callback)(&event);
        Emit::One(event)
    }
}
