//! Inter-task channels
//!
//! Two disciplines, chosen per data pattern:
//! - [`LatestSlot`]: single-slot overwrite channel for "latest value" data
//!   (a late consumer silently loses superseded values)
//! - [`ByteStream`]: bounded FIFO with blocking-timeout send for streamed
//!   data where nothing enqueued may be reordered or lost

pub mod latest;
pub mod stream;

pub use latest::LatestSlot;
pub use stream::{ByteStream, SendTimeout};
