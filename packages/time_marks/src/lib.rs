#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named interval timing with running statistics per name.
//!
//! Mark the start and end of any section of code by name and this package keeps, per name, the
//! number of completed intervals together with their mean, minimum and maximum duration. It is
//! a lightweight alternative to a full tracing or metrics stack when all you want to know is
//! "how long does this part take".
//!
//! The core functionality includes:
//! - [`MarkRegistry`] - Tracks pending marks and accumulates statistics for completed ones
//! - [`Stats`] - Count, mean, minimum and maximum interval of one mark
//! - [`MarkGuard`] - Ends a mark when dropped
//! - [`Report`] - Owned, sorted snapshot of all statistics, printable as a table
//! - [`ClockSource`] - Where timestamps come from, with [`PreciseClock`], [`CoarseClock`] and
//!   [`ManualClock`] provided
//! - [`Diagnostic`] and [`DiagnosticSink`] - How misuse is reported
//!
//! # Simple Usage
//!
//! ```
//! use time_marks::MarkRegistry;
//!
//! let mut registry = MarkRegistry::new();
//!
//! for i in 0..10_u64 {
//!     registry.begin("checksum");
//!     let checksum = (0..i * 1000).fold(0_u64, u64::wrapping_add);
//!     std::hint::black_box(checksum);
//!     registry.end("checksum");
//! }
//!
//! // Prints one line per mark: name, calls, avg, min and max.
//! registry.dump(None, false);
//! ```
//!
//! # Scoped marks
//!
//! A [`MarkGuard`] ends its mark when dropped, which also covers early returns:
//!
//! ```
//! use time_marks::MarkRegistry;
//!
//! let mut registry = MarkRegistry::new();
//!
//! {
//!     let _mark = registry.mark("parse");
//!     // Work to be measured.
//! }
//!
//! assert_eq!(registry.timing_data("parse").map(|stats| stats.tally), Some(1));
//! ```
//!
//! # Misuse
//!
//! Nothing in a registry fails. Beginning a mark twice, ending one that is not pending or
//! dumping one that never completed leaves the registry unchanged and emits a [`Diagnostic`].
//! By default, diagnostics are logged via [`tracing`] under the `time_marks` target. Use
//! [`MarkRegistry::builder()`] to send them elsewhere:
//!
//! ```
//! use time_marks::{CollectingSink, Diagnostic, MarkRegistry};
//!
//! let sink = CollectingSink::new();
//! let mut registry = MarkRegistry::builder().diagnostics(sink.clone()).build();
//!
//! assert_eq!(registry.end("download"), None);
//!
//! assert!(sink.diagnostics().contains(&Diagnostic::NeverBegun {
//!     name: "download".to_owned()
//! }));
//! ```
//!
//! # Clocks
//!
//! Unless a clock is injected, [`ClockKind::probe()`] selects [`PreciseClock`] (monotonic,
//! sub-millisecond) or, on targets where that is unreliable, [`CoarseClock`] (whole
//! milliseconds). The selection is announced as a [`Diagnostic::ClockSelected`]. Tests and
//! simulations can inject a [`ManualClock`] and move time by hand.
//!
//! A clock that steps backwards produces negative intervals. These are recorded as reported by
//! the clock, without clamping.
//!
//! # Threading
//!
//! A registry is meant to be used from a single thread and is neither `Send` nor `Sync`.
//! Separate registries are fully independent, so each thread or test can own its own.

mod clock;
mod diagnostic;
mod mark_guard;
mod registry;
mod registry_builder;
mod report;
mod sink;
mod stats;

pub use clock::*;
pub use diagnostic::*;
pub use mark_guard::*;
pub use registry::*;
pub use registry_builder::*;
pub use report::*;
pub use sink::*;
pub use stats::*;
