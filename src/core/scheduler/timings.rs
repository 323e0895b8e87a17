//! Per-task timing ledger and CPU-load sampling
//!
//! [`TaskTimings`] owns a fixed-capacity table of task records. Tasks
//! register themselves once at startup and afterwards only ever write their
//! own record, so the critical sections here are short and uncontended. The
//! ledger lives inside the application context; there are no process-wide
//! statics.

use core::cell::RefCell;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::Vec;

use super::types::{CpuLoad, TaskMetadata, TaskStats};

/// Maximum number of tasks the ledger can track
pub const MAX_TASKS: usize = 8;

/// Handle returned by [`TaskTimings::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(usize);

struct TaskRecord {
    meta: TaskMetadata,
    stats: TaskStats,
}

struct Inner {
    records: Vec<TaskRecord, MAX_TASKS>,
    window_start_us: u64,
}

/// Timing ledger shared by all instrumented tasks.
pub struct TaskTimings<M: RawMutex> {
    inner: Mutex<M, RefCell<Inner>>,
}

impl<M: RawMutex> TaskTimings<M> {
    /// Create an empty ledger with the observation window starting at t=0
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                records: Vec::new(),
                window_start_us: 0,
            })),
        }
    }

    /// Register a task and get back its timing handle.
    ///
    /// Called once per task at startup, before the periodic loops begin.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_TASKS`] tasks register. A full table is a
    /// configuration mistake that must stop startup, not degrade silently.
    pub fn register(&self, meta: TaskMetadata) -> TaskId {
        self.inner.lock(|inner| {
            let mut inner = inner.borrow_mut();
            let index = inner.records.len();
            if inner
                .records
                .push(TaskRecord {
                    meta,
                    stats: TaskStats::default(),
                })
                .is_err()
            {
                panic!("task table full: cannot register more than {} tasks", MAX_TASKS);
            }
            TaskId(index)
        })
    }

    /// Record one invocation from its entry and exit timestamps.
    ///
    /// Each task calls this only with its own id, so records never contend.
    pub fn record(&self, id: TaskId, entry_us: u64, exit_us: u64) {
        let execution_us = exit_us.saturating_sub(entry_us) as u32;
        self.inner.lock(|inner| {
            let mut inner = inner.borrow_mut();
            if let Some(record) = inner.records.get_mut(id.0) {
                record.stats.record(execution_us);
            }
        });
    }

    /// Snapshot one task's statistics
    pub fn stats(&self, id: TaskId) -> TaskStats {
        self.inner.lock(|inner| {
            inner
                .borrow()
                .records
                .get(id.0)
                .map(|r| r.stats)
                .unwrap_or_default()
        })
    }

    /// Snapshot one task's metadata
    pub fn metadata(&self, id: TaskId) -> Option<TaskMetadata> {
        self.inner
            .lock(|inner| inner.borrow().records.get(id.0).map(|r| r.meta))
    }

    /// Number of registered tasks
    pub fn task_count(&self) -> usize {
        self.inner.lock(|inner| inner.borrow().records.len())
    }

    /// Restart the observation window at `now_us`, zeroing busy accumulators.
    ///
    /// Call once at startup so the first [`sample`](Self::sample) measures
    /// from a known point.
    pub fn reset_window(&self, now_us: u64) {
        self.inner.lock(|inner| {
            let mut inner = inner.borrow_mut();
            inner.window_start_us = now_us;
            for record in inner.records.iter_mut() {
                record.stats.reset_window();
            }
        });
    }

    /// Close the current observation window and derive the CPU load.
    ///
    /// Sums every task's accumulated busy time over the elapsed window,
    /// resets the accumulators, and starts the next window at `now_us`.
    pub fn sample(&self, now_us: u64) -> CpuLoad {
        self.inner.lock(|inner| {
            let mut inner = inner.borrow_mut();
            let window_us = now_us.saturating_sub(inner.window_start_us);
            let busy_us: u64 = inner.records.iter().map(|r| r.stats.busy_us).sum();

            inner.window_start_us = now_us;
            for record in inner.records.iter_mut() {
                record.stats.reset_window();
            }

            CpuLoad::from_window(busy_us, window_us)
        })
    }
}

impl<M: RawMutex> Default for TaskTimings<M> {
    fn default() -> Self {
        Self::new()
    }
}
