//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the three capabilities the
//! application needs: digital pin access, serial output, and a monotonic
//! clock. All platform-specific code must stay behind these traits.

pub mod clock;
pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use clock::EmbassyClock;
pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, GpioMode, TimerInterface, UartInterface};
