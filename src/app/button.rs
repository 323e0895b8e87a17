//! Button monitor task
//!
//! Samples a digital input once per period, classifies the transition and
//! publishes the classification to an overwrite slot. The result is
//! published unconditionally, including [`Edge::None`], so the consumer
//! always sees the latest status rather than a stale edge.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Ticker};

use crate::app::edge::{Edge, EdgeDetector};
use crate::core::channel::LatestSlot;
use crate::core::scheduler::{run_timed, TaskMetadata, TaskTimings};
use crate::platform::GpioInterface;

/// Periodic monitor for one button pin.
pub struct ButtonMonitor<'a, M: RawMutex, P: GpioInterface> {
    pin: P,
    detector: EdgeDetector,
    slot: &'a LatestSlot<M, Edge>,
}

impl<'a, M: RawMutex, P: GpioInterface> ButtonMonitor<'a, M, P> {
    /// Create a monitor, seeding the edge detector with the pin's current
    /// state.
    pub fn new(pin: P, slot: &'a LatestSlot<M, Edge>) -> Self {
        let initial = pin.read();
        Self {
            pin,
            detector: EdgeDetector::new(initial),
            slot,
        }
    }

    /// Mutable access to the pin, for simulation and test harnesses
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// One sampling period: sample, classify, publish, update previous.
    ///
    /// Exactly one publish happens per call, whatever the classification.
    pub fn poll(&mut self) -> Edge {
        let edge = self.detector.update(self.pin.read());
        self.slot.publish(edge);
        edge
    }

    /// Periodic loop. `Ticker` wakes at fixed absolute period boundaries,
    /// so execution jitter does not accumulate drift.
    pub async fn run(mut self, timings: &TaskTimings<M>, meta: TaskMetadata) -> ! {
        let id = timings.register(meta);
        let mut ticker = Ticker::every(Duration::from_millis(meta.period_ms as u64));
        loop {
            ticker.next().await;
            run_timed(timings, id, || {
                self.poll();
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockGpio;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_poll_publishes_every_period() {
        let slot: LatestSlot<NoopRawMutex, Edge> = LatestSlot::new();
        let mut monitor = ButtonMonitor::new(MockGpio::new_input(), &slot);

        // Steady low: a None classification still gets published
        assert_eq!(monitor.poll(), Edge::None);
        assert_eq!(slot.try_read(), Some(Edge::None));
    }

    #[test]
    fn test_rising_then_falling_sequence() {
        let slot: LatestSlot<NoopRawMutex, Edge> = LatestSlot::new();
        let mut pin = MockGpio::new_input();
        pin.set_input_state(false);
        let mut monitor = ButtonMonitor::new(pin, &slot);

        monitor.pin_mut().set_input_state(true);
        assert_eq!(monitor.poll(), Edge::Rising);
        assert_eq!(slot.try_read(), Some(Edge::Rising));

        // Held high: slot superseded by None
        assert_eq!(monitor.poll(), Edge::None);
        assert_eq!(slot.try_read(), Some(Edge::None));

        monitor.pin_mut().set_input_state(false);
        assert_eq!(monitor.poll(), Edge::Falling);
        assert_eq!(slot.try_read(), Some(Edge::Falling));
    }

    #[test]
    fn test_monitor_seeds_from_initial_pin_state() {
        let slot: LatestSlot<NoopRawMutex, Edge> = LatestSlot::new();
        let mut pin = MockGpio::new_input();
        pin.set_input_state(true);
        let mut monitor = ButtonMonitor::new(pin, &slot);

        // Pin was already high at startup: not a rising edge
        assert_eq!(monitor.poll(), Edge::None);
    }
}
