//! Application composition root
//!
//! All shared state between the tasks lives in one [`AppContext`] built by
//! the composition root and handed to each task. Channel and ledger
//! construction is `const`, so a deployment places the context in a
//! `static` and spawning can never observe a half-built channel.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::app::edge::Edge;
use crate::core::channel::{ByteStream, LatestSlot};
use crate::core::scheduler::TaskTimings;

/// Mutex flavor for the deployed context: safe across executor tasks and
/// interrupt contexts.
pub type AppMutex = CriticalSectionRawMutex;

/// Capacity of the status byte stream: exactly one transmission cycle.
///
/// The reporter uses "stream is full" as its complete-cycle signal, so this
/// must equal the status message length.
pub const STREAM_DEPTH: usize = 8;

/// Shared state for the whole application.
///
/// The two overwrite slots and the byte stream are the only mutable state
/// shared between tasks; everything else is task-local by construction.
pub struct AppContext {
    /// Button 1 monitor -> reporter
    pub button_1_edges: LatestSlot<AppMutex, Edge>,
    /// Button 2 monitor -> reporter
    pub button_2_edges: LatestSlot<AppMutex, Edge>,
    /// Status transmitter -> reporter
    pub stream: ByteStream<AppMutex, STREAM_DEPTH>,
    /// Per-task timing ledger
    pub timings: TaskTimings<AppMutex>,
}

impl AppContext {
    /// Build the context with empty channels and an empty ledger.
    pub const fn new() -> Self {
        Self {
            button_1_edges: LatestSlot::new(),
            button_2_edges: LatestSlot::new(),
            stream: ByteStream::new(),
            timings: TaskTimings::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
