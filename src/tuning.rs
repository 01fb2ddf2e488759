//! Live-tunable configuration
//!
//! Generator slabs read their configuration on every tick from the thread
//! driving the graph, while command handlers on other threads adjust it.
//! Every access goes through a critical section.

use core::cell::Cell;
use core::fmt;
use std::sync::Arc;

use critical_section::Mutex;

/// Configuration cell shared between a slab and its control handles
pub struct Tunable<T: Copy> {
    inner: Arc<Mutex<Cell<T>>>,
}

impl<T: Copy> Clone for Tunable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Tunable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tunable").field(&self.get()).finish()
    }
}

impl<T: Copy> Tunable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Cell::new(value))),
        }
    }

    /// Snapshot the current value
    pub fn get(&self) -> T {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    pub fn set(&self, value: T) {
        critical_section::with(|cs| self.inner.borrow(cs).set(value));
    }

    /// Modify the value in place, atomically with respect to other handles
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut value = cell.get();
            f(&mut value);
            cell.set(value);
        });
    }
}
