//! Periodic status transmitter
//!
//! Once per period, writes the fixed 8-byte status message into the byte
//! stream, one bounded-timeout send per byte. There is no end-of-message
//! marker on the wire; the consumer relies on the fixed byte count.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant, Ticker};

use crate::core::channel::ByteStream;
use crate::core::scheduler::{TaskMetadata, TaskTimings};
use crate::log_warn;

/// The fixed status payload
pub const STATUS_MESSAGE: [u8; 8] = *b" it's OK";

/// How long a single byte send may park on a full stream
pub const SEND_TIMEOUT: Duration = Duration::from_millis(100);

/// Periodic producer streaming [`STATUS_MESSAGE`] byte-by-byte.
pub struct StatusTransmitter<'a, M: RawMutex, const N: usize> {
    stream: &'a ByteStream<M, N>,
}

impl<'a, M: RawMutex, const N: usize> StatusTransmitter<'a, M, N> {
    pub fn new(stream: &'a ByteStream<M, N>) -> Self {
        Self { stream }
    }

    /// One transmission cycle: send all 8 bytes in order.
    ///
    /// A byte whose bounded send times out is dropped with no retry; the
    /// stream counts it. Returns the number of bytes accepted.
    pub async fn transmit(&self) -> usize {
        let mut accepted = 0;
        for &byte in STATUS_MESSAGE.iter() {
            match self.stream.send(byte, SEND_TIMEOUT).await {
                Ok(()) => accepted += 1,
                Err(_) => {
                    log_warn!("status byte dropped on full stream (total {})", self.stream.dropped());
                }
            }
        }
        accepted
    }

    /// Periodic loop at fixed absolute period boundaries.
    ///
    /// The invocation is timed across the whole cycle, including any time
    /// parked on a full stream; the producer only parks in overload, where a
    /// saturating load figure is the honest reading.
    pub async fn run(self, timings: &TaskTimings<M>, meta: TaskMetadata) -> ! {
        let id = timings.register(meta);
        let mut ticker = Ticker::every(Duration::from_millis(meta.period_ms as u64));
        loop {
            ticker.next().await;
            let entry_us = Instant::now().as_micros();
            self.transmit().await;
            let exit_us = Instant::now().as_micros();
            timings.record(id, entry_us, exit_us);
        }
    }
}
