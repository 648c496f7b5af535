use crate::MarkRegistry;

/// A pending mark that ends when the guard is dropped.
///
/// Created by [`MarkRegistry::mark()`]. The guard holds the registry exclusively, so the
/// measured code cannot begin or end other marks on the same registry meanwhile.
///
/// If the mark was already pending when the guard was created, the duplicate `begin` is
/// reported as usual and the guard ends the original mark.
///
/// # Examples
///
/// ```
/// use time_marks::{ManualClock, MarkRegistry};
///
/// let clock = ManualClock::new();
/// let mut registry = MarkRegistry::builder().clock(clock.clone()).build();
///
/// let mark = registry.mark("compile");
/// clock.advance(30.0);
/// let elapsed = mark.finish();
///
/// assert_eq!(elapsed, Some(30.0));
/// ```
#[derive(Debug)]
#[must_use = "the mark ends as soon as the guard is dropped"]
pub struct MarkGuard<'a> {
    registry: &'a mut MarkRegistry,
    name: String,
    finished: bool,
}

impl<'a> MarkGuard<'a> {
    pub(crate) fn new(registry: &'a mut MarkRegistry, name: &str) -> Self {
        registry.begin(name);

        Self {
            registry,
            name: name.to_owned(),
            finished: false,
        }
    }
}

impl MarkGuard<'_> {
    /// The name of the mark this guard will end.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ends the mark now and returns the elapsed milliseconds, like [`MarkRegistry::end()`].
    ///
    /// Returns `None` if the mark is no longer pending, for example because the registry was
    /// cleared meanwhile.
    pub fn finish(mut self) -> Option<f64> {
        self.finished = true;
        self.registry.end(&self.name)
    }
}

impl Drop for MarkGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.registry.end(&self.name);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{CollectingSink, Diagnostic, ManualClock};

    #[test]
    fn drop_ends_mark() {
        let clock = ManualClock::new();
        let mut registry = MarkRegistry::builder().clock(clock.clone()).build();

        {
            let guard = registry.mark("scope");
            assert_eq!(guard.name(), "scope");
            clock.advance(4.0);
        }

        let stats = registry.timing_data("scope").expect("guard ended the mark");
        assert_eq!(stats.tally, 1);
        assert!((stats.avg - 4.0).abs() < 1e-9);
        assert!(!registry.is_pending("scope"));
    }

    #[test]
    fn finish_ends_mark_once() {
        let clock = ManualClock::new();
        let sink = CollectingSink::new();
        let mut registry = MarkRegistry::builder()
            .clock(clock.clone())
            .diagnostics(sink.clone())
            .build();

        let guard = registry.mark("scope");
        clock.advance(2.0);
        let elapsed = guard.finish().expect("mark was pending");

        assert!((elapsed - 2.0).abs() < 1e-9);
        assert_eq!(registry.timing_data("scope").map(|stats| stats.tally), Some(1));
        assert!(sink.is_empty());
    }

    #[test]
    fn guard_on_pending_mark_ends_original() {
        let clock = ManualClock::new();
        let sink = CollectingSink::new();
        let mut registry = MarkRegistry::builder()
            .clock(clock.clone())
            .diagnostics(sink.clone())
            .build();

        registry.begin("outer");
        clock.advance(5.0);

        let elapsed = registry.mark("outer").finish().expect("mark was pending");

        assert!((elapsed - 5.0).abs() < 1e-9);
        assert_eq!(
            sink.take(),
            vec![Diagnostic::DuplicateBegin {
                name: "outer".to_owned()
            }]
        );
    }
}
