//! UART interface trait
//!
//! This module defines the serial output interface that platform
//! implementations must provide. The application treats the serial port as a
//! fire-and-forget text sink; errors surface only so construction problems
//! fail loudly instead of silently dropping a channel.

use crate::platform::Result;

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
    /// Data bits (typically 8)
    pub data_bits: u8,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            data_bits: 8,
        }
    }
}

/// UART interface trait
///
/// Platform implementations must provide this interface for serial output.
///
/// # Safety Invariants
///
/// - UART peripheral must be initialized before use
/// - Only one owner per UART peripheral instance
/// - No concurrent access to the same UART from multiple contexts
pub trait UartInterface {
    /// Write data to UART
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the write operation fails.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Flush transmit buffer
    ///
    /// Blocks until all pending transmit data has been sent.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the flush operation fails.
    fn flush(&mut self) -> Result<()>;
}
