//! Single-slot overwrite channel
//!
//! Holds only the most recently published value. Publishing never blocks and
//! unconditionally replaces whatever is in the slot, read or not. Reading
//! never blocks and does not clear the slot, so repeated reads between
//! publishes return the same value.

use core::cell::Cell;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Single-element overwrite slot for single-producer/single-consumer use.
///
/// Generic over the [`RawMutex`] so unit tests can use `NoopRawMutex` while
/// the deployed context uses `CriticalSectionRawMutex`; either way `publish`
/// and `try_read` are safe against preemption between the two tasks.
pub struct LatestSlot<M: RawMutex, T> {
    cell: Mutex<M, Cell<Option<T>>>,
}

impl<M: RawMutex, T: Copy> LatestSlot<M, T> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            cell: Mutex::new(Cell::new(None)),
        }
    }

    /// Publish a value, replacing any unread one. O(1), never blocks.
    pub fn publish(&self, value: T) {
        self.cell.lock(|cell| cell.set(Some(value)));
    }

    /// Read the most recently published value without clearing it.
    ///
    /// Returns `None` only if nothing has ever been published. O(1),
    /// never blocks, idempotent between publishes.
    pub fn try_read(&self) -> Option<T> {
        self.cell.lock(|cell| cell.get())
    }
}

impl<M: RawMutex, T: Copy> Default for LatestSlot<M, T> {
    fn default() -> Self {
        Self::new()
    }
}
