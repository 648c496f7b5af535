use std::fmt;

use crate::{ClockKind, ClockSource, Diagnostic, DiagnosticSink, MarkRegistry, TracingSink};

/// Creates instances of [`MarkRegistry`].
///
/// All parameters are optional:
/// * `clock` or `clock_kind` - where timestamps come from. Defaults to [`ClockKind::probe()`].
/// * `diagnostics` - where misuse is reported. Defaults to [`TracingSink`].
///
/// Use `MarkRegistry::builder()` to create a new instance of this builder.
///
/// # Examples
///
/// ```
/// use time_marks::{ClockKind, DiscardSink, MarkRegistry};
///
/// let mut registry = MarkRegistry::builder()
///     .clock_kind(ClockKind::Coarse)
///     .diagnostics(DiscardSink)
///     .build();
///
/// registry.begin("coarse_work");
/// registry.end("coarse_work");
/// ```
#[must_use]
pub struct MarkRegistryBuilder {
    clock: Option<Box<dyn ClockSource>>,
    clock_kind: Option<ClockKind>,
    diagnostics: Option<Box<dyn DiagnosticSink>>,
}

impl MarkRegistryBuilder {
    pub(crate) fn new() -> Self {
        Self {
            clock: None,
            clock_kind: None,
            diagnostics: None,
        }
    }

    /// Uses the given clock for all timestamps.
    ///
    /// An injected clock takes precedence over [`clock_kind()`](Self::clock_kind) and is not
    /// announced with a [`Diagnostic::ClockSelected`].
    pub fn clock(self, clock: impl ClockSource + 'static) -> Self {
        Self {
            clock: Some(Box::new(clock)),
            ..self
        }
    }

    /// Uses a new clock of the given kind instead of probing for one.
    pub fn clock_kind(self, kind: ClockKind) -> Self {
        Self {
            clock_kind: Some(kind),
            ..self
        }
    }

    /// Sends diagnostics to the given sink instead of [`tracing`].
    pub fn diagnostics(self, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            diagnostics: Some(Box::new(sink)),
            ..self
        }
    }

    /// Builds the registry.
    ///
    /// Unless a clock was injected, the chosen clock kind is reported to the sink as
    /// [`Diagnostic::ClockSelected`].
    #[must_use]
    pub fn build(self) -> MarkRegistry {
        let mut diagnostics = self
            .diagnostics
            .unwrap_or_else(|| Box::new(TracingSink));

        let clock = if let Some(clock) = self.clock {
            clock
        } else {
            let kind = self.clock_kind.unwrap_or_else(ClockKind::probe);
            diagnostics.emit(&Diagnostic::ClockSelected { kind });
            kind.into_clock()
        };

        MarkRegistry::from_parts(clock, diagnostics)
    }
}

impl fmt::Debug for MarkRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkRegistryBuilder")
            .field("clock", &self.clock.as_ref().map(|_| "<custom>"))
            .field("clock_kind", &self.clock_kind)
            .field("diagnostics", &self.diagnostics.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{CollectingSink, ManualClock};

    #[test]
    fn injected_clock_is_not_announced() {
        let sink = CollectingSink::new();
        let clock = ManualClock::new();
        clock.set(8.0);

        let registry = MarkRegistry::builder()
            .clock(clock)
            .clock_kind(ClockKind::Coarse)
            .diagnostics(sink.clone())
            .build();

        assert!((registry.now() - 8.0).abs() < 1e-9);
        assert!(sink.is_empty());
    }

    #[test]
    fn chosen_kind_is_announced() {
        let sink = CollectingSink::new();

        let _registry = MarkRegistry::builder()
            .clock_kind(ClockKind::Coarse)
            .diagnostics(sink.clone())
            .build();

        assert_eq!(
            sink.take(),
            vec![Diagnostic::ClockSelected {
                kind: ClockKind::Coarse
            }]
        );
    }

    #[test]
    fn probed_kind_is_announced() {
        let sink = CollectingSink::new();

        let _registry = MarkRegistry::builder().diagnostics(sink.clone()).build();

        assert_eq!(
            sink.take(),
            vec![Diagnostic::ClockSelected {
                kind: ClockKind::probe()
            }]
        );
    }

    #[test]
    fn debug_does_not_expose_trait_objects() {
        let builder = MarkRegistry::builder().clock(ManualClock::new());

        let rendered = format!("{builder:?}");
        assert!(rendered.contains("<custom>"));
        assert!(rendered.contains("clock_kind: None"));
    }
}
