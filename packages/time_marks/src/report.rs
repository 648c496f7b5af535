//! Snapshots of accumulated timing data and their textual rendering.

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::Stats;

/// An owned snapshot of every mark's statistics, sorted by mark name.
///
/// For human-readable output, use the `Display` implementation, which writes one line per mark
/// in the same format as [`MarkRegistry::dump()`](crate::MarkRegistry::dump). For
/// machine-readable output, iterate over [`marks()`](Self::marks).
///
/// # Examples
///
/// ```
/// use time_marks::{ManualClock, MarkRegistry};
///
/// let clock = ManualClock::new();
/// let mut registry = MarkRegistry::builder().clock(clock.clone()).build();
///
/// registry.begin("decode");
/// clock.advance(2.5);
/// registry.end("decode");
///
/// let report = registry.to_report();
///
/// for mark in report.marks() {
///     println!("{} ran {} times", mark.name(), mark.tally());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    // Sorted by name, ascending.
    marks: Box<[MarkSummary]>,
}

impl Report {
    pub(crate) fn from_stats(completed: &HashMap<String, Stats>) -> Self {
        let mut marks = completed
            .iter()
            .map(|(name, stats)| MarkSummary::new(name.clone(), *stats))
            .collect::<Vec<_>>();

        marks.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            marks: marks.into_boxed_slice(),
        }
    }

    /// Iterates over the marks in the report in ascending name order.
    pub fn marks(&self) -> impl Iterator<Item = &MarkSummary> {
        self.marks.iter()
    }

    /// The summary of a single mark, if it is in the report.
    #[must_use]
    pub fn mark(&self, name: &str) -> Option<&MarkSummary> {
        self.marks
            .binary_search_by(|summary| summary.name.as_str().cmp(name))
            .ok()
            .and_then(|index| self.marks.get(index))
    }

    /// Whether the report contains no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Prints the report to stdout, one line per mark.
    ///
    /// Prints nothing at all, not even an empty line, if the report is empty.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }

        print!("{self}");
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            writeln!(f, "{mark}")?;
        }

        Ok(())
    }
}

/// The statistics of one mark, together with its name.
///
/// This is what dump sinks receive. Its `Display` implementation renders the dump line:
/// the name padded to 25 columns, the call count padded to 10 and the mean, minimum and
/// maximum padded to 20 each, with durations rounded to 4 decimal places.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkSummary {
    name: String,
    stats: Stats,
}

impl MarkSummary {
    pub(crate) fn new(name: String, stats: Stats) -> Self {
        Self { name, stats }
    }

    /// The name of the mark.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All statistics of the mark.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Number of completed intervals.
    #[must_use]
    pub fn tally(&self) -> u64 {
        self.stats.tally
    }

    /// Mean interval in milliseconds.
    #[must_use]
    pub fn avg(&self) -> f64 {
        self.stats.avg
    }

    /// Shortest interval in milliseconds.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.stats.min
    }

    /// Longest interval in milliseconds.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.stats.max
    }
}

impl Display for MarkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<25} {:<10} {:<20} {:<20} {:<20}",
            self.name,
            format!("calls: {}", self.stats.tally),
            format!("avg: {}ms", format_millis(self.stats.avg)),
            format!("min: {}ms", format_millis(self.stats.min)),
            format!("max: {}ms", format_millis(self.stats.max)),
        )
    }
}

/// Rounds to 4 decimal places and drops trailing zeros, so `12.5` renders as `12.5` and
/// `0.000_01` as `0`.
fn format_millis(millis: f64) -> String {
    let fixed = format!("{millis:.4}");

    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    fn stats(tally: u64, avg: f64, min: f64, max: f64) -> Stats {
        Stats {
            tally,
            avg,
            min,
            max,
        }
    }

    fn sample_report() -> Report {
        let mut completed = HashMap::new();
        completed.insert("zeta".to_owned(), stats(1, 1.0, 1.0, 1.0));
        completed.insert("alpha".to_owned(), stats(2, 15.0, 10.0, 20.0));
        completed.insert("mid".to_owned(), stats(3, 0.5, 0.25, 1.0));

        Report::from_stats(&completed)
    }

    #[test]
    fn marks_are_sorted_by_name() {
        let report = sample_report();

        let names = report.marks().map(MarkSummary::name).collect::<Vec<_>>();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn finds_single_mark() {
        let report = sample_report();

        assert_eq!(report.mark("mid").map(MarkSummary::tally), Some(3));
        assert!(report.mark("missing").is_none());
    }

    #[test]
    fn empty_report() {
        let report = Report::from_stats(&HashMap::new());

        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn summary_line_layout() {
        let summary = MarkSummary::new("io".to_owned(), stats(2, 15.0, 10.0, 20.0));

        let expected = format!(
            "{:<25} {:<10} {:<20} {:<20} {:<20}",
            "io", "calls: 2", "avg: 15ms", "min: 10ms", "max: 20ms"
        );
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn long_name_is_not_truncated() {
        let name = "a_mark_name_that_is_longer_than_the_column";
        let summary = MarkSummary::new(name.to_owned(), stats(1, 1.0, 1.0, 1.0));

        assert!(summary.to_string().starts_with(&format!("{name} calls: 1")));
    }

    #[test]
    fn report_display_has_one_line_per_mark() {
        let report = sample_report();
        let rendered = report.to_string();

        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.lines().next().is_some_and(|line| line.starts_with("alpha ")));
    }

    #[test]
    fn formats_millis_like_fixed_then_trimmed() {
        assert_eq!(format_millis(15.0), "15");
        assert_eq!(format_millis(12.5), "12.5");
        assert_eq!(format_millis(0.123_456), "0.1235");
        assert_eq!(format_millis(1.000_04), "1");
        assert_eq!(format_millis(0.000_01), "0");
        assert_eq!(format_millis(-0.000_01), "0");
        assert_eq!(format_millis(-2.5), "-2.5");
        assert_eq!(format_millis(100.0), "100");
    }

    assert_impl_all!(Report: Send, Sync);
    assert_impl_all!(MarkSummary: Send, Sync);
}
