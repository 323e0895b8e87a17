#![cfg_attr(not(test), no_std)]

//! edge_probe - Periodic monitoring and status streaming demo application
//!
//! A fixed set of periodic tasks running on an Embassy executor: two button
//! monitors publishing edge classifications through single-slot overwrite
//! channels, a transmitter streaming a fixed status message byte-by-byte
//! through a bounded FIFO, a reporter reassembling and printing everything
//! over a serial port, and two synthetic load generators. Every task body is
//! wrapped with entry/exit timing so a monitor task can derive the CPU load.
//!
//! Hardware access goes through the traits in [`platform`]; the library
//! itself never touches a peripheral register, which is what lets the whole
//! test suite run on the host against the mock platform.

// Platform abstraction layer (capability traits + mock implementations)
pub mod platform;

// Channels, timing instrumentation, logging
pub mod core;

// The application tasks and their composition root
pub mod app;
