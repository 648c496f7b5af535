/// Running statistics over the completed intervals of one mark.
///
/// All durations are in milliseconds. Once a mark has completed at least one interval,
/// `min <= avg <= max` holds (up to floating point rounding of the mean).
///
/// Values handed out by the registry are copies; modifying them has no effect on the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct Stats {
    /// Number of completed intervals.
    pub tally: u64,

    /// Arithmetic mean of all completed intervals.
    pub avg: f64,

    /// Shortest completed interval.
    pub min: f64,

    /// Longest completed interval.
    pub max: f64,
}

impl Stats {
    /// Statistics after a single interval of `delta` milliseconds.
    #[must_use]
    pub(crate) fn first(delta: f64) -> Self {
        let mut stats = Self {
            tally: 0,
            avg: 0.0,
            min: delta,
            max: delta,
        };

        stats.fold(delta);
        stats
    }

    /// Folds one more interval into the statistics.
    ///
    /// The mean is updated incrementally, so no history is kept and large tallies do not
    /// accumulate a huge intermediate sum.
    pub(crate) fn fold(&mut self, delta: f64) {
        self.tally = self
            .tally
            .checked_add(1)
            .expect("mark tally overflows u64 - this indicates an unrealistic scenario");

        #[expect(
            clippy::cast_precision_loss,
            reason = "tallies beyond 2^53 are unrealistic and would only blur the mean slightly"
        )]
        let tally = self.tally as f64;

        self.avg += (delta - self.avg) / tally;
        self.min = self.min.min(delta);
        self.max = self.max.max(delta);
    }
}
