//! Mock platform implementations for host testing

pub mod clock;
pub mod gpio;
pub mod uart;

pub use clock::MockClock;
pub use gpio::MockGpio;
pub use uart::MockUart;
