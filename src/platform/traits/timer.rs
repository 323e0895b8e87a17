//! Timer interface trait
//!
//! This module defines the monotonic clock interface that platform
//! implementations must provide. The load generators spin against this clock
//! and the timing instrumentation stamps task entry/exit with it.

/// Timer interface trait
///
/// # Safety Invariants
///
/// - Microsecond-level precision required
/// - Monotonic time source (never goes backwards)
pub trait TimerInterface {
    /// Get current time in microseconds
    ///
    /// Returns a monotonic timestamp in microseconds since platform
    /// initialization.
    fn now_us(&self) -> u64;

    /// Get current time in milliseconds
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
