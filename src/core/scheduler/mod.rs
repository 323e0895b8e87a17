//! Timing instrumentation for periodic tasks
//!
//! Each task invocation is stamped on entry and exit; the deltas accumulate
//! per task into [`TaskTimings`], and a periodic sampling point converts the
//! accumulated busy time over the elapsed window into a CPU-load percentage.

pub mod task;
pub mod timings;
pub mod types;

pub use task::run_timed;
pub use timings::{TaskId, TaskTimings, MAX_TASKS};
pub use types::{CpuLoad, TaskMetadata, TaskStats};
