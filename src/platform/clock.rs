//! Embassy-backed monotonic clock
//!
//! [`EmbassyClock`] adapts `embassy_time::Instant` to [`TimerInterface`] for
//! targets (and host tests) where an Embassy time driver is present.

use crate::platform::traits::TimerInterface;
use embassy_time::Instant;

/// Monotonic clock backed by the Embassy time driver.
///
/// Zero-sized; copy it freely into whatever needs a timestamp source.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl TimerInterface for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = EmbassyClock;
        let a = clock.now_us();
        let b = clock.now_us();
        assert!(b >= a);
    }

    #[test]
    fn test_now_ms_derived_from_us() {
        let clock = EmbassyClock;
        let ms = clock.now_ms();
        let us = clock.now_us();
        assert!(us / 1000 >= ms);
    }
}
