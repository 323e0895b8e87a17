//! Status reporter task
//!
//! The fast consumer at the end of both channel disciplines. Each poll it
//! drains whatever is ready without ever blocking: the two button slots are
//! read non-blocking, and the byte stream is drained only when it holds one
//! complete transmission cycle (exactly full). A partially written cycle is
//! left for a later poll; the reporter runs five times per producer period,
//! so a full stream can only mean one finished cycle.

use core::fmt::Write as _;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Ticker};
use heapless::{String, Vec};

use crate::app::edge::Edge;
use crate::core::channel::{ByteStream, LatestSlot};
use crate::core::scheduler::{run_timed, TaskMetadata, TaskTimings};
use crate::log_warn;
use crate::platform::{Result, UartInterface};

/// Consumer that formats button reports and reassembles the status message.
pub struct StatusReporter<'a, M: RawMutex, W: UartInterface, const N: usize> {
    button_1: &'a LatestSlot<M, Edge>,
    button_2: &'a LatestSlot<M, Edge>,
    stream: &'a ByteStream<M, N>,
    uart: W,
}

impl<'a, M: RawMutex, W: UartInterface, const N: usize> StatusReporter<'a, M, W, N> {
    pub fn new(
        button_1: &'a LatestSlot<M, Edge>,
        button_2: &'a LatestSlot<M, Edge>,
        stream: &'a ByteStream<M, N>,
        uart: W,
    ) -> Self {
        Self {
            button_1,
            button_2,
            stream,
            uart,
        }
    }

    /// One consumer period: report both buttons, then the stream.
    pub fn poll(&mut self) -> Result<()> {
        if let Some(edge) = self.button_1.try_read() {
            self.report_button(1, edge)?;
        }
        if let Some(edge) = self.button_2.try_read() {
            self.report_button(2, edge)?;
        }
        self.drain_stream()
    }

    /// Emit one line for an actual edge; `Edge::None` is the published
    /// no-change marker and produces no output.
    fn report_button(&mut self, index: u8, edge: Edge) -> Result<()> {
        if edge == Edge::None {
            return Ok(());
        }
        let mut line: String<40> = String::new();
        let _ = write!(line, "Button {} State is {}\n", index, edge);
        self.uart.write(line.as_bytes())?;
        Ok(())
    }

    /// Drain the stream only when it holds exactly one complete cycle.
    ///
    /// Anything less is a producer mid-cycle; touching it would tear the
    /// message. After emitting, clear any residue so the next cycle starts
    /// from an empty stream.
    fn drain_stream(&mut self) -> Result<()> {
        if !self.stream.is_full() {
            return Ok(());
        }

        let mut message: Vec<u8, N> = Vec::new();
        while let Some(byte) = self.stream.try_recv() {
            if message.push(byte).is_err() {
                break;
            }
        }
        self.uart.write(&message)?;
        self.stream.clear();
        Ok(())
    }

    /// Get the serial port back (for test inspection)
    pub fn into_uart(self) -> W {
        self.uart
    }

    /// Periodic loop at fixed absolute period boundaries.
    pub async fn run(mut self, timings: &TaskTimings<M>, meta: TaskMetadata) -> ! {
        let id = timings.register(meta);
        let mut ticker = Ticker::every(Duration::from_millis(meta.period_ms as u64));
        loop {
            ticker.next().await;
            let result = run_timed(timings, id, || self.poll());
            if let Err(e) = result {
                log_warn!("status report failed: {}", e);
            }
        }
    }
}
