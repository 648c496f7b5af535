use std::cell::Cell;
use std::rc::Rc;

use crate::ClockSource;

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can hand one clone to a
/// [`MarkRegistry`](crate::MarkRegistry) and keep another to drive time forward (or backward,
/// to simulate a misbehaving platform clock).
///
/// # Examples
///
/// ```
/// use time_marks::{ManualClock, MarkRegistry};
///
/// let clock = ManualClock::new();
/// let mut registry = MarkRegistry::builder().clock(clock.clone()).build();
///
/// registry.begin("io");
/// clock.advance(10.0);
///
/// assert_eq!(registry.end("io"), Some(10.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Creates a clock reading `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reading of this clock and all its clones.
    pub fn set(&self, millis: f64) {
        self.millis.set(millis);
    }

    /// Moves the reading by `millis`, which may be negative.
    pub fn advance(&self, millis: f64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> f64 {
        self.millis.get()
    }
}
