use std::collections::HashMap;
use std::fmt;

use crate::{
    ClockSource, Diagnostic, DiagnosticSink, MarkGuard, MarkRegistryBuilder, MarkSummary, Report,
    Stats,
};

/// Tracks pending marks and accumulates statistics for completed ones.
///
/// A mark is a named interval started with [`begin()`](Self::begin) and completed with
/// [`end()`](Self::end). Every completed interval is folded into the running [`Stats`] for its
/// name. Misuse, such as ending a mark that was never begun, is reported to the registry's
/// [`DiagnosticSink`] and otherwise ignored; no operation on the registry fails.
///
/// Registries are independent of each other. Each owns its own clock, sink and data.
///
/// # Examples
///
/// ```
/// use time_marks::MarkRegistry;
///
/// let mut registry = MarkRegistry::new();
///
/// for _ in 0..3 {
///     registry.begin("sum");
///     let sum: u64 = (0..10_000).sum();
///     std::hint::black_box(sum);
///     registry.end("sum");
/// }
///
/// let stats = registry.timing_data("sum").unwrap();
/// assert_eq!(stats.tally, 3);
/// assert!(stats.min <= stats.avg && stats.avg <= stats.max);
///
/// registry.print_to_stdout();
/// ```
pub struct MarkRegistry {
    // Start time of every mark between `begin` and `end`.
    pending: HashMap<String, f64>,

    // Created by the first completed interval of a name, removed only by clearing.
    completed: HashMap<String, Stats>,

    clock: Box<dyn ClockSource>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl MarkRegistry {
    /// Creates a registry with a probed clock that reports diagnostics via [`tracing`].
    ///
    /// Equivalent to `MarkRegistry::builder().build()`.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a new registry.
    #[must_use]
    pub fn builder() -> MarkRegistryBuilder {
        MarkRegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        clock: Box<dyn ClockSource>,
        diagnostics: Box<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            pending: HashMap::new(),
            completed: HashMap::new(),
            clock,
            diagnostics,
        }
    }

    /// The current reading of the registry's clock, in milliseconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Starts timing the mark `name`.
    ///
    /// If `name` is already pending, a [`Diagnostic::DuplicateBegin`] is reported and the
    /// original start time is kept.
    pub fn begin(&mut self, name: &str) {
        if self.pending.contains_key(name) {
            self.report(Diagnostic::DuplicateBegin {
                name: name.to_owned(),
            });
            return;
        }

        let start = self.clock.now();
        self.pending.insert(name.to_owned(), start);
    }

    /// Stops timing the mark `name` and returns the elapsed milliseconds.
    ///
    /// The interval is folded into the statistics of `name`. A clock that stepped backwards
    /// yields a negative interval, which is returned and recorded unchanged.
    ///
    /// Returns `None` if `name` is not pending, after reporting [`Diagnostic::AlreadyEnded`]
    /// if the mark has completed intervals or [`Diagnostic::NeverBegun`] if it has none.
    pub fn end(&mut self, name: &str) -> Option<f64> {
        let Some(&start) = self.pending.get(name) else {
            let diagnostic = if self.completed.contains_key(name) {
                Diagnostic::AlreadyEnded {
                    name: name.to_owned(),
                }
            } else {
                Diagnostic::NeverBegun {
                    name: name.to_owned(),
                }
            };

            self.report(diagnostic);
            return None;
        };

        let delta = self.clock.now() - start;

        if let Some(stats) = self.completed.get_mut(name) {
            stats.fold(delta);
        } else {
            self.completed.insert(name.to_owned(), Stats::first(delta));
        }

        self.pending.remove(name);

        Some(delta)
    }

    /// Begins the mark `name` and returns a guard that ends it when dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_marks::MarkRegistry;
    ///
    /// let mut registry = MarkRegistry::new();
    ///
    /// {
    ///     let _mark = registry.mark("render");
    ///     // Work to be measured.
    /// }
    ///
    /// assert_eq!(registry.timing_data("render").map(|stats| stats.tally), Some(1));
    /// ```
    pub fn mark(&mut self, name: &str) -> MarkGuard<'_> {
        MarkGuard::new(self, name)
    }

    /// Forgets everything about `name`: its pending start time and its statistics.
    ///
    /// Does nothing if the registry knows nothing about `name`.
    pub fn clear(&mut self, name: &str) {
        self.completed.remove(name);
        self.pending.remove(name);
    }

    /// Forgets all pending marks and all statistics.
    pub fn clear_all(&mut self) {
        self.completed.clear();
        self.pending.clear();
    }

    /// Prints the statistics of `name`, or of every mark if `None`, to stdout.
    ///
    /// See [`dump_with()`](Self::dump_with) for the exact semantics.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn dump(&mut self, name: Option<&str>, clear_after: bool) {
        self.dump_with(name, clear_after, |summary| println!("{summary}"));
    }

    /// Hands the statistics of `name`, or of every mark in ascending name order if `None`, to
    /// `sink`.
    ///
    /// If `clear_after` is set, each dumped mark is then [cleared](Self::clear). Marks that are
    /// pending but have never completed are neither dumped nor cleared.
    ///
    /// Asking for a specific `name` without completed intervals reports
    /// [`Diagnostic::DumpMiss`] and does nothing else.
    pub fn dump_with<F>(&mut self, name: Option<&str>, clear_after: bool, mut sink: F)
    where
        F: FnMut(&MarkSummary),
    {
        let Some(name) = name else {
            let report = self.to_report();

            for summary in report.marks() {
                sink(summary);

                if clear_after {
                    self.clear(summary.name());
                }
            }

            return;
        };

        let Some(&stats) = self.completed.get(name) else {
            self.report(Diagnostic::DumpMiss {
                name: name.to_owned(),
            });
            return;
        };

        sink(&MarkSummary::new(name.to_owned(), stats));

        if clear_after {
            self.clear(name);
        }
    }

    /// The names of all pending marks, in no particular order.
    #[must_use]
    pub fn pending(&self) -> Vec<String> {
        self.pending.keys().cloned().collect()
    }

    /// Whether `name` has been begun and not yet ended.
    #[must_use]
    pub fn is_pending(&self, name: &str) -> bool {
        self.pending.contains_key(name)
    }

    /// A copy of the statistics of every mark with at least one completed interval.
    #[must_use]
    pub fn all_timing_data(&self) -> HashMap<String, Stats> {
        self.completed.clone()
    }

    /// The registry's own statistics of every mark, without copying.
    ///
    /// The borrow keeps the registry from being modified while the map is in use.
    #[must_use]
    pub fn all_timing_data_ref(&self) -> &HashMap<String, Stats> {
        &self.completed
    }

    /// A copy of the statistics of `name`, or `None` if it has no completed intervals.
    #[must_use]
    pub fn timing_data(&self, name: &str) -> Option<Stats> {
        self.completed.get(name).copied()
    }

    /// The registry's own statistics of `name`, without copying.
    #[must_use]
    pub fn timing_data_ref(&self, name: &str) -> Option<&Stats> {
        self.completed.get(name)
    }

    /// Creates an owned snapshot of the statistics of every mark.
    #[must_use]
    pub fn to_report(&self) -> Report {
        Report::from_stats(&self.completed)
    }

    /// Prints the statistics of every mark to stdout.
    ///
    /// Prints nothing if no mark has completed. This is equivalent to
    /// `self.to_report().print_to_stdout()` and, unlike [`dump()`](Self::dump), never clears.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.to_report().print_to_stdout();
    }

    /// Whether no mark has completed an interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.emit(&diagnostic);
    }
}

impl Default for MarkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MarkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkRegistry")
            .field("pending", &self.pending)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for MarkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_report())
    }
}
