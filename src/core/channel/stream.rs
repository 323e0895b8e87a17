//! Bounded FIFO byte stream
//!
//! FIFO channel with fixed capacity. A send into a full stream parks the
//! producer for a bounded time; on expiry the byte is dropped and counted.
//! Bytes that make it into the stream are never reordered or lost.

use core::sync::atomic::{AtomicU32, Ordering};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration};

/// A bounded send timed out and the byte was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SendTimeout;

/// Bounded FIFO byte channel with blocking-timeout send semantics.
///
/// `N` is the capacity in bytes. Consumers only ever use the non-blocking
/// operations (`try_recv`, `len`, `clear`); the producer is the only caller
/// that can park, and only for the timeout it passes to [`ByteStream::send`].
pub struct ByteStream<M: RawMutex, const N: usize> {
    inner: Channel<M, u8, N>,
    dropped: AtomicU32,
}

impl<M: RawMutex, const N: usize> ByteStream<M, N> {
    /// Create an empty stream
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Send one byte, waiting up to `timeout` for space if the stream is full.
    ///
    /// On timeout the byte is dropped, the drop counter is incremented, and
    /// `Err(SendTimeout)` is returned. There is no retry beyond the window.
    pub async fn send(&self, byte: u8, timeout: Duration) -> Result<(), SendTimeout> {
        if self.inner.try_send(byte).is_ok() {
            return Ok(());
        }
        match with_timeout(timeout, self.inner.send(byte)).await {
            Ok(()) => Ok(()),
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                Err(SendTimeout)
            }
        }
    }

    /// Receive one byte without blocking. Returns `None` if the stream is empty.
    pub fn try_recv(&self) -> Option<u8> {
        self.inner.try_receive().ok()
    }

    /// Number of bytes currently pending
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the stream holds no bytes
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the stream holds exactly its capacity
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all pending bytes
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Total number of bytes dropped on send timeout since construction
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<M: RawMutex, const N: usize> Default for ByteStream<M, N> {
    fn default() -> Self {
        Self::new()
    }
}
