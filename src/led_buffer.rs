//! Shared LED memory
//!
//! The byte buffer of an LED chain is owned outside of the graph. `Led`
//! slabs write into non-overlapping regions of it, and an output driver
//! periodically serializes the whole buffer onto the data line.

use core::cell::RefCell;
use std::sync::Arc;

use critical_section::Mutex;

use crate::OutputDriver;

/// Byte buffer of one LED chain, in the order expected by the driver
#[derive(Clone)]
pub struct LedBuffer {
    bytes: Arc<Mutex<RefCell<Vec<u8>>>>,
}

impl LedBuffer {
    /// Create a zeroed buffer of `len` bytes
    pub fn new(len: usize) -> Self {
        Self {
            bytes: Arc::new(Mutex::new(RefCell::new(vec![0; len]))),
        }
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.bytes.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a handle to `len` bytes starting at `offset`
    ///
    /// Returns `None` if the region does not fit into the buffer.
    pub fn region(&self, offset: usize, len: usize) -> Option<LedRegion> {
        let end = offset.checked_add(len)?;
        if end > self.len() {
            return None;
        }
        Some(LedRegion {
            buffer: self.clone(),
            offset,
            len,
        })
    }

    /// Copy the current buffer contents
    pub fn snapshot(&self) -> Vec<u8> {
        critical_section::with(|cs| self.bytes.borrow(cs).borrow().clone())
    }

    /// Hand the whole buffer to an output driver.
    ///
    /// The driver gets a copy, slabs keep writing while it is busy.
    pub fn flush<D: OutputDriver>(&self, driver: &mut D) {
        let frame = self.snapshot();
        driver.write(&frame);
    }
}

/// A window into an [`LedBuffer`] owned by a single LED
#[derive(Clone)]
pub struct LedRegion {
    buffer: LedBuffer,
    offset: usize,
    len: usize,
}

impl LedRegion {
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Write `data` at the start of the region
    ///
    /// Bytes that do not fit into the region are ignored.
    pub fn write(&self, data: &[u8]) {
        let count = data.len().min(self.len);
        critical_section::with(|cs| {
            let mut bytes = self.buffer.bytes.borrow(cs).borrow_mut();
            bytes[self.offset..self.offset + count].copy_from_slice(&data[..count]);
        });
    }

    /// Copy the region contents
    pub fn read(&self) -> Vec<u8> {
        critical_section::with(|cs| {
            self.buffer.bytes.borrow(cs).borrow()[self.offset..self.offset + self.len].to_vec()
        })
    }
}
