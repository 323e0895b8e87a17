//! Mock clock implementation for testing

use crate::platform::traits::TimerInterface;
use core::cell::Cell;

/// Mock monotonic clock
///
/// Time only moves when the test says so: either explicitly via
/// [`MockClock::advance`], or automatically by a fixed step on every
/// [`TimerInterface::now_us`] call (see [`MockClock::stepping`]). The
/// stepping mode lets clock-bound busy loops terminate deterministically
/// without consuming wall-clock time.
#[derive(Debug)]
pub struct MockClock {
    now_us: Cell<u64>,
    step_us: u64,
}

impl MockClock {
    /// Create a mock clock frozen at t=0
    pub fn new() -> Self {
        Self {
            now_us: Cell::new(0),
            step_us: 0,
        }
    }

    /// Create a mock clock that advances by `step_us` on every read
    pub fn stepping(step_us: u64) -> Self {
        Self {
            now_us: Cell::new(0),
            step_us,
        }
    }

    /// Advance the clock by `us` microseconds
    pub fn advance(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockClock {
    fn now_us(&self) -> u64 {
        let now = self.now_us.get();
        self.now_us.set(now + self.step_us);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_clock() {
        let clock = MockClock::new();
        assert_eq!(clock.now_us(), 0);
        assert_eq!(clock.now_us(), 0);

        clock.advance(1500);
        assert_eq!(clock.now_us(), 1500);
        assert_eq!(clock.now_ms(), 1);
    }

    #[test]
    fn test_stepping_clock() {
        let clock = MockClock::stepping(100);
        assert_eq!(clock.now_us(), 0);
        assert_eq!(clock.now_us(), 100);
        assert_eq!(clock.now_us(), 200);
    }
}
