//! Core types for timing instrumentation
//!
//! - Task metadata (compile-time configuration)
//! - Task statistics (runtime monitoring)
//! - Derived CPU load

/// Task metadata registered at startup
///
/// Each periodic task has associated metadata describing how it is driven.
#[derive(Debug, Clone, Copy)]
pub struct TaskMetadata {
    /// Human-readable task name for logging and debugging
    pub name: &'static str,

    /// Period between invocations in milliseconds
    pub period_ms: u32,

    /// Priority handed to the executor. All tasks in the reference
    /// configuration share one level; kept for monitoring and reporting.
    pub priority: u8,

    /// Opaque per-task tag for external trace tooling. Not functionally
    /// significant.
    pub tag: u8,
}

impl TaskMetadata {
    /// Task period in microseconds
    #[inline]
    pub const fn period_us(&self) -> u64 {
        self.period_ms as u64 * 1000
    }
}

/// Runtime statistics for a single task
///
/// Updated once per invocation from the entry/exit timestamps. `busy_us`
/// accumulates across invocations and is reset at every load-sampling point;
/// the other fields persist for the lifetime of the task.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskStats {
    /// Duration of the most recent invocation in microseconds
    pub last_execution_us: u32,

    /// Longest invocation observed in microseconds
    pub max_execution_us: u32,

    /// Busy time accumulated since the start of the current observation
    /// window, in microseconds
    pub busy_us: u64,

    /// Total number of invocations
    pub execution_count: u64,
}

impl TaskStats {
    /// Fold one invocation's measured duration into the statistics
    pub fn record(&mut self, execution_us: u32) {
        self.last_execution_us = execution_us;
        self.busy_us = self.busy_us.saturating_add(execution_us as u64);
        self.execution_count = self.execution_count.saturating_add(1);

        if execution_us > self.max_execution_us {
            self.max_execution_us = execution_us;
        }
    }

    /// Start a new observation window, keeping the lifetime counters
    pub fn reset_window(&mut self) {
        self.busy_us = 0;
    }
}

/// CPU load derived from one observation window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuLoad {
    /// Load percentage, rounded to the nearest integer and clamped to [0, 100]
    pub percent: u8,

    /// Total busy time across all tasks in the window, microseconds
    pub busy_us: u64,

    /// Window duration, microseconds
    pub window_us: u64,
}

impl CpuLoad {
    /// Derive the load percentage from accumulated busy time over a window.
    ///
    /// `percent == round(busy / window * 100)`, clamped to [0, 100].
    /// A zero-length window yields 0%.
    pub fn from_window(busy_us: u64, window_us: u64) -> Self {
        let percent = if window_us == 0 {
            0
        } else {
            ((busy_us.saturating_mul(100) + window_us / 2) / window_us).min(100) as u8
        };
        Self {
            percent,
            busy_us,
            window_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_period_conversion() {
        let meta = TaskMetadata {
            name: "button_1_monitor",
            period_ms: 50,
            priority: 1,
            tag: 1,
        };
        assert_eq!(meta.period_us(), 50_000);
    }

    #[test]
    fn test_stats_record_accumulates() {
        let mut stats = TaskStats::default();

        stats.record(1500);
        assert_eq!(stats.last_execution_us, 1500);
        assert_eq!(stats.max_execution_us, 1500);
        assert_eq!(stats.busy_us, 1500);
        assert_eq!(stats.execution_count, 1);

        stats.record(900);
        assert_eq!(stats.last_execution_us, 900);
        assert_eq!(stats.max_execution_us, 1500);
        assert_eq!(stats.busy_us, 2400);
        assert_eq!(stats.execution_count, 2);
    }

    #[test]
    fn test_stats_window_reset_keeps_lifetime_counters() {
        let mut stats = TaskStats::default();
        stats.record(2000);
        stats.record(3000);

        stats.reset_window();
        assert_eq!(stats.busy_us, 0);
        assert_eq!(stats.execution_count, 2);
        assert_eq!(stats.max_execution_us, 3000);
    }

    #[test]
    fn test_cpu_load_basic() {
        assert_eq!(CpuLoad::from_window(500, 1000).percent, 50);
        assert_eq!(CpuLoad::from_window(0, 1000).percent, 0);
        assert_eq!(CpuLoad::from_window(1000, 1000).percent, 100);
    }

    #[test]
    fn test_cpu_load_rounds_to_nearest() {
        // 505/1000 = 50.5% -> 51
        assert_eq!(CpuLoad::from_window(505, 1000).percent, 51);
        // 504/1000 = 50.4% -> 50
        assert_eq!(CpuLoad::from_window(504, 1000).percent, 50);
    }

    #[test]
    fn test_cpu_load_clamped() {
        assert_eq!(CpuLoad::from_window(1200, 1000).percent, 100);
    }

    #[test]
    fn test_cpu_load_zero_window() {
        assert_eq!(CpuLoad::from_window(500, 0).percent, 0);
    }
}
