//! Clock sources that provide the timestamps marks are measured against.
//!
//! A [`MarkRegistry`](crate::MarkRegistry) only depends on the [`ClockSource`] trait. Which
//! implementation backs it is decided when the registry is built, either by injecting a clock
//! explicitly or by letting [`ClockKind::probe()`] pick one for the build target.

mod coarse;
mod manual;
mod precise;

use std::fmt;

pub use coarse::CoarseClock;
pub use manual::ManualClock;
pub use precise::PreciseClock;

/// Provides the current time in fractional milliseconds.
///
/// The reading is relative to an epoch chosen by the implementation and fixed at the first
/// call. Readings are expected to be non-decreasing but callers must not rely on it: a clock
/// that steps backwards produces negative intervals, which are recorded as-is.
///
/// Implementations are queried on every `begin` and `end`, so `now()` should be cheap.
#[cfg_attr(test, mockall::automock)]
pub trait ClockSource {
    /// Returns the elapsed milliseconds since the clock's epoch.
    fn now(&self) -> f64;
}

/// The clock implementations that can be selected without injecting a custom clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ClockKind {
    /// [`PreciseClock`]: monotonic, sub-millisecond resolution.
    Precise,

    /// [`CoarseClock`]: wall-clock based, whole-millisecond resolution.
    Coarse,
}

impl ClockKind {
    /// Picks the best clock available on the build target.
    ///
    /// WebAssembly hosts frequently clamp or withhold the high-resolution monotonic timer, so
    /// those targets fall back to [`ClockKind::Coarse`]. Everything else gets
    /// [`ClockKind::Precise`].
    #[must_use]
    pub fn probe() -> Self {
        if cfg!(target_family = "wasm") {
            Self::Coarse
        } else {
            Self::Precise
        }
    }

    /// Whether this clock can resolve intervals shorter than a millisecond.
    #[must_use]
    pub fn is_sub_millisecond(self) -> bool {
        matches!(self, Self::Precise)
    }

    /// Creates a fresh clock of this kind. Its epoch is fixed at its first reading.
    #[must_use]
    pub fn into_clock(self) -> Box<dyn ClockSource> {
        match self {
            Self::Precise => Box::new(PreciseClock::new()),
            Self::Coarse => Box::new(CoarseClock::new()),
        }
    }
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precise => write!(f, "std::time::Instant"),
            Self::Coarse => write!(f, "std::time::SystemTime (millisecond precision)"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn probe_matches_target() {
        let kind = ClockKind::probe();

        if cfg!(target_family = "wasm") {
            assert_eq!(kind, ClockKind::Coarse);
        } else {
            assert_eq!(kind, ClockKind::Precise);
        }
    }

    #[test]
    fn only_precise_is_sub_millisecond() {
        assert!(ClockKind::Precise.is_sub_millisecond());
        assert!(!ClockKind::Coarse.is_sub_millisecond());
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot talk to the real platform.
    fn into_clock_starts_near_zero() {
        for kind in [ClockKind::Precise, ClockKind::Coarse] {
            let clock = kind.into_clock();
            let first = clock.now();

            assert!(
                (0.0..100.0).contains(&first),
                "{kind} started at {first}ms"
            );
        }
    }

    #[test]
    fn display_names_the_source() {
        assert!(ClockKind::Precise.to_string().contains("Instant"));
        assert!(ClockKind::Coarse.to_string().contains("millisecond"));
    }
}
