//! Synthetic load generation
//!
//! Models real workload interference: each period, burn a calibrated slice
//! of CPU time, then yield until the next period boundary. The burn itself
//! sits behind [`Workload`] so tests can swap in a deterministic double
//! instead of spinning wall-clock time.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Ticker};

use crate::core::scheduler::{run_timed, TaskMetadata, TaskTimings};
use crate::platform::TimerInterface;

/// A unit of synthetic work executed once per period.
pub trait Workload {
    /// Consume the configured amount of CPU time
    fn burn(&mut self);
}

/// Clock-bound busy loop consuming approximately `burn_us` per call.
///
/// Bounding the spin by a monotonic clock instead of an iteration count
/// keeps the burst duration stable across optimization levels and clock
/// frequencies.
pub struct SpinWorkload<T: TimerInterface> {
    clock: T,
    burn_us: u64,
}

impl<T: TimerInterface> SpinWorkload<T> {
    pub fn new(clock: T, burn_us: u64) -> Self {
        Self { clock, burn_us }
    }
}

impl<T: TimerInterface> Workload for SpinWorkload<T> {
    fn burn(&mut self) {
        let start = self.clock.now_us();
        while self.clock.now_us().wrapping_sub(start) < self.burn_us {
            core::hint::spin_loop();
        }
    }
}

/// Periodic wrapper driving a [`Workload`].
pub struct LoadGenerator<W: Workload> {
    workload: W,
}

impl<W: Workload> LoadGenerator<W> {
    pub fn new(workload: W) -> Self {
        Self { workload }
    }

    /// One period's burst
    pub fn poll(&mut self) {
        self.workload.burn();
    }

    /// Periodic loop at fixed absolute period boundaries.
    pub async fn run<M: RawMutex>(mut self, timings: &TaskTimings<M>, meta: TaskMetadata) -> ! {
        let id = timings.register(meta);
        let mut ticker = Ticker::every(Duration::from_millis(meta.period_ms as u64));
        loop {
            ticker.next().await;
            run_timed(timings, id, || self.poll());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockClock;

    /// Deterministic workload double counting its invocations
    struct CountingWorkload {
        calls: u32,
    }

    impl Workload for CountingWorkload {
        fn burn(&mut self) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_spin_workload_consumes_configured_duration() {
        // Each clock read advances 1000us: 5 reads cover a 5ms burn
        let clock = MockClock::stepping(1000);
        let mut workload = SpinWorkload::new(clock, 5_000);

        workload.burn();
        // One read for start, then reads until 5000us elapsed
        assert!(workload.clock.now_us() >= 5_000);
    }

    #[test]
    fn test_spin_workload_zero_duration_returns_immediately() {
        let clock = MockClock::new();
        let mut workload = SpinWorkload::new(clock, 0);
        workload.burn();
    }

    #[test]
    fn test_generator_polls_workload_once_per_period() {
        let mut generator = LoadGenerator::new(CountingWorkload { calls: 0 });
        for _ in 0..3 {
            generator.poll();
        }
        assert_eq!(generator.workload.calls, 3);
    }
}
