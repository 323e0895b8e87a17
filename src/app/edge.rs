//! Digital-pin edge classification
//!
//! An edge is a transition between two consecutive pin samples. The detector
//! keeps the previous sample and classifies each new one; "no transition" is
//! an explicit classification, distinct from "never sampled".

use core::fmt;

/// Classification of one sampling period's pin transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// No transition (both samples low, or both high)
    None,
    /// Low -> High transition
    Rising,
    /// High -> Low transition
    Falling,
}

impl Edge {
    /// Classify the transition between two consecutive samples.
    ///
    /// `true` is a high pin level, `false` low.
    pub fn classify(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => Edge::Rising,
            (true, false) => Edge::Falling,
            _ => Edge::None,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::None => "None",
            Edge::Rising => "Rising",
            Edge::Falling => "Falling",
        };
        f.write_str(name)
    }
}

/// Stateful edge detector holding the previous pin sample
#[derive(Debug)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    /// Create a detector seeded with the pin state at startup.
    ///
    /// Seeding with a real sample means the first period cannot report a
    /// phantom edge against an assumed level.
    pub fn new(initial: bool) -> Self {
        Self { previous: initial }
    }

    /// Classify `current` against the stored sample, then store `current`.
    pub fn update(&mut self, current: bool) -> Edge {
        let edge = Edge::classify(self.previous, current);
        self.previous = current;
        edge
    }
}
