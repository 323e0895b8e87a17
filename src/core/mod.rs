//! Core infrastructure
//!
//! Inter-task channels, timing instrumentation, and logging. Everything here
//! is application-agnostic; the task wiring lives in [`crate::app`].

pub mod channel;
pub mod logging;
pub mod scheduler;
