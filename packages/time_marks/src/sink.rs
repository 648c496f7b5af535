//! Destinations for [`Diagnostic`]s.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Diagnostic, Severity};

/// Receives the diagnostics emitted by a [`MarkRegistry`](crate::MarkRegistry).
///
/// Implemented for any `FnMut(&Diagnostic)` closure, so ad-hoc handling needs no new type:
///
/// ```
/// use time_marks::{Diagnostic, MarkRegistry};
///
/// let mut registry = MarkRegistry::builder()
///     .diagnostics(|diagnostic: &Diagnostic| eprintln!("time_marks: {diagnostic}"))
///     .build();
///
/// // Reported through the closure, otherwise ignored.
/// registry.end("never_started");
/// ```
pub trait DiagnosticSink {
    /// Handles one diagnostic. Must not panic.
    fn emit(&mut self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Forwards diagnostics to [`tracing`] under the `time_marks` target.
///
/// Misuse and the coarse clock fallback are logged at `WARN`, clock selection otherwise at
/// `INFO`. The mark name, when there is one, is attached as the `mark` field.
///
/// This is the default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let mark = diagnostic.mark_name();

        match diagnostic.severity() {
            Severity::Info => tracing::info!(target: "time_marks", mark, "{diagnostic}"),
            Severity::Warning => tracing::warn!(target: "time_marks", mark, "{diagnostic}"),
        }
    }
}

/// Drops every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl DiagnosticSink for DiscardSink {
    fn emit(&mut self, _diagnostic: &Diagnostic) {}
}

/// Keeps every diagnostic in a buffer shared between clones.
///
/// Hand one clone to the registry and keep another to inspect what was reported.
///
/// # Examples
///
/// ```
/// use time_marks::{CollectingSink, Diagnostic, ManualClock, MarkRegistry};
///
/// let sink = CollectingSink::new();
/// let mut registry = MarkRegistry::builder()
///     .clock(ManualClock::new())
///     .diagnostics(sink.clone())
///     .build();
///
/// registry.begin("parse");
/// registry.begin("parse");
///
/// assert_eq!(
///     sink.take(),
///     vec![Diagnostic::DuplicateBegin {
///         name: "parse".to_owned()
///     }]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    collected: Rc<RefCell<Vec<Diagnostic>>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything collected so far, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.collected.borrow().clone()
    }

    /// Removes and returns everything collected so far, oldest first.
    #[must_use]
    pub fn take(&self) -> Vec<Diagnostic> {
        self.collected.take()
    }

    /// Number of diagnostics collected and not yet taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collected.borrow().len()
    }

    /// Whether nothing has been collected since creation or the last [`take()`](Self::take).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collected.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.collected.borrow_mut().push(diagnostic.clone());
    }
}
