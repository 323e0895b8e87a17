//! Mock UART implementation for testing

use crate::platform::{
    error::{PlatformError, UartError},
    traits::{UartConfig, UartInterface},
    Result,
};
use heapless::Vec;

/// Capacity of the captured transmit buffer
const TX_CAPACITY: usize = 512;

/// Mock UART implementation
///
/// Captures transmitted bytes in a fixed-size in-memory buffer so unit tests
/// can verify serial output without hardware.
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Vec<u8, TX_CAPACITY>,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl Default for MockUart {
    fn default() -> Self {
        Self::new(UartConfig::default())
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx_buffer
            .extend_from_slice(data)
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))?;
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        // Nothing buffered beyond the capture itself
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_uart_write() {
        let mut uart = MockUart::default();
        let written = uart.write(b"Hello, World!").unwrap();
        assert_eq!(written, 13);
        assert_eq!(uart.tx_buffer(), b"Hello, World!");
    }

    #[test]
    fn test_mock_uart_accumulates_writes() {
        let mut uart = MockUart::default();
        uart.write(b"one ").unwrap();
        uart.write(b"two").unwrap();
        assert_eq!(uart.tx_buffer(), b"one two");

        uart.clear_tx_buffer();
        assert!(uart.tx_buffer().is_empty());
    }

    #[test]
    fn test_mock_uart_overflow_reports_error() {
        let mut uart = MockUart::default();
        let big = [0u8; TX_CAPACITY];
        uart.write(&big).unwrap();
        assert!(uart.write(b"x").is_err());
    }

    #[test]
    fn test_mock_uart_flush() {
        let mut uart = MockUart::default();
        uart.write(b"data").unwrap();
        uart.flush().unwrap();
        assert_eq!(uart.tx_buffer(), b"data");
    }
}
