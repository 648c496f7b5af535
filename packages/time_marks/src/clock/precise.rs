use std::cell::OnceCell;
use std::time::Instant;

use crate::ClockSource;

/// A monotonic clock backed by [`std::time::Instant`].
///
/// Resolution is whatever the operating system offers for its monotonic timer, typically
/// well below a microsecond. The epoch is the instant of the first [`now()`](ClockSource::now)
/// call, so the first reading is always `0.0`.
///
/// # Examples
///
/// ```
/// use time_marks::{ClockSource, PreciseClock};
///
/// let clock = PreciseClock::new();
/// let start = clock.now();
/// let later = clock.now();
///
/// assert!(later >= start);
/// ```
#[derive(Debug, Default)]
pub struct PreciseClock {
    epoch: OnceCell<Instant>,
}

impl PreciseClock {
    /// Creates a clock whose epoch will be fixed at its first reading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClockSource for PreciseClock {
    fn now(&self) -> f64 {
        let epoch = self.epoch.get_or_init(Instant::now);

        epoch.elapsed().as_secs_f64() * 1000.0
    }
}
