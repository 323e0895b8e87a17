//! Task invocation timing wrapper
//!
//! Wraps one periodic task body with entry/exit timestamps from the Embassy
//! monotonic clock and folds the delta into the task's ledger record.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::Instant;

use super::timings::{TaskId, TaskTimings};

/// Run one task invocation with timing instrumentation.
///
/// Records the entry timestamp, runs `body`, records the exit timestamp and
/// accumulates the delta into the task's record.
///
/// # Example
///
/// ```rust,ignore
/// let id = ctx.timings.register(BUTTON_1_META);
/// let mut ticker = Ticker::every(Duration::from_millis(50));
/// loop {
///     ticker.next().await;
///     run_timed(&ctx.timings, id, || monitor.poll());
/// }
/// ```
pub fn run_timed<M, F, R>(timings: &TaskTimings<M>, id: TaskId, body: F) -> R
where
    M: RawMutex,
    F: FnOnce() -> R,
{
    let entry_us = Instant::now().as_micros();
    let result = body();
    let exit_us = Instant::now().as_micros();
    timings.record(id, entry_us, exit_us);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::types::TaskMetadata;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_run_timed_records_invocation() {
        let timings: TaskTimings<NoopRawMutex> = TaskTimings::new();
        let id = timings.register(TaskMetadata {
            name: "timed_task",
            period_ms: 20,
            priority: 1,
            tag: 4,
        });

        let result = run_timed(&timings, id, || 42);
        assert_eq!(result, 42);

        let stats = timings.stats(id);
        assert_eq!(stats.execution_count, 1);
        // Sane upper bound for a trivial closure
        assert!(stats.last_execution_us < 1_000_000);
    }

    #[test]
    fn test_run_timed_accumulates_across_invocations() {
        let timings: TaskTimings<NoopRawMutex> = TaskTimings::new();
        let id = timings.register(TaskMetadata {
            name: "timed_task",
            period_ms: 20,
            priority: 1,
            tag: 4,
        });

        for _ in 0..5 {
            run_timed(&timings, id, || {});
        }
        assert_eq!(timings.stats(id).execution_count, 5);
    }
}
