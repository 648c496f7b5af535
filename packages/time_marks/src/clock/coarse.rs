use std::cell::OnceCell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ClockSource;

/// A whole-millisecond clock backed by [`std::time::SystemTime`].
///
/// This is the fallback for hosts without a usable high-resolution timer. Readings are
/// truncated to whole milliseconds and follow wall clock adjustments, which means a clock
/// synchronization step can make a reading smaller than a previous one.
#[derive(Debug, Default)]
pub struct CoarseClock {
    epoch: OnceCell<f64>,
}

impl CoarseClock {
    /// Creates a clock whose epoch will be fixed at its first reading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClockSource for CoarseClock {
    fn now(&self) -> f64 {
        let current = wall_clock_millis();
        let epoch = *self.epoch.get_or_init(|| current);

        current - epoch
    }
}

/// Whole milliseconds since the Unix epoch. A system clock set before 1970 reads as zero.
fn wall_clock_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |since_epoch| {
            (since_epoch.as_secs_f64() * 1000.0).floor()
        })
}
