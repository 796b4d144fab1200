//! Cross-turn search diagnostics.

use std::fmt;
use std::time::Duration;

use anytime_core::StatValue;

/// Per-run counters of a sampling strategy, accumulated across turns.
///
/// Monte-Carlo and hill-climbing record one sample per run: how many
/// candidates they considered, how many improved, and how far into the
/// budget the best solution was found. A caller keeps these across a whole
/// match (or [`merge`](SearchStats::merge)s several) to see whether the
/// search converges too early or not at all.
#[derive(Debug, Clone)]
pub struct SearchStats {
    simulations: StatValue,
    improvements: StatValue,
    time_to_best_ms: StatValue,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            simulations: StatValue::named("Simulations"),
            improvements: StatValue::named("Improvements"),
            time_to_best_ms: StatValue::named("TimeOfBestMs"),
        }
    }

    /// Records the counters of one completed run.
    ///
    /// `time_to_best` is absent when the run produced no solutions at all;
    /// the candidate counters are still recorded so starved runs show up in
    /// the aggregates.
    pub fn record_run(
        &mut self,
        simulations: usize,
        improvements: usize,
        time_to_best: Option<Duration>,
    ) {
        self.simulations.add(simulations as f64);
        self.improvements.add(improvements as f64);
        if let Some(time) = time_to_best {
            self.time_to_best_ms.add(time.as_secs_f64() * 1_000.0);
        }
    }

    /// Combines another accumulator into this one, e.g. across solver
    /// instances or matches. Merging is the caller's responsibility and is
    /// not synchronized.
    pub fn merge(&mut self, other: &SearchStats) {
        self.simulations.merge(&other.simulations);
        self.improvements.merge(&other.improvements);
        self.time_to_best_ms.merge(&other.time_to_best_ms);
    }

    /// Candidates considered per run.
    pub fn simulations(&self) -> &StatValue {
        &self.simulations
    }

    /// Accepted improvements per run.
    pub fn improvements(&self) -> &StatValue {
        &self.improvements
    }

    /// Milliseconds into the budget at which the best solution was found.
    pub fn time_to_best_ms(&self) -> &StatValue {
        &self.time_to_best_ms
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.simulations)?;
        writeln!(f, "{}", self.improvements)?;
        write!(f, "{}", self.time_to_best_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_run_feeds_all_three_accumulators() {
        let mut stats = SearchStats::new();
        stats.record_run(100, 5, Some(Duration::from_millis(42)));

        assert_eq!(stats.simulations().count(), 1);
        assert_eq!(stats.simulations().mean(), 100.0);
        assert_eq!(stats.improvements().mean(), 5.0);
        assert_eq!(stats.time_to_best_ms().mean(), 42.0);
    }

    #[test]
    fn empty_run_skips_time_to_best() {
        let mut stats = SearchStats::new();
        stats.record_run(0, 0, None);

        assert_eq!(stats.simulations().count(), 1);
        assert_eq!(stats.time_to_best_ms().count(), 0);
    }

    #[test]
    fn merge_aggregates_across_matches() {
        let mut first = SearchStats::new();
        first.record_run(10, 1, Some(Duration::from_millis(5)));
        let mut second = SearchStats::new();
        second.record_run(30, 3, Some(Duration::from_millis(15)));

        first.merge(&second);
        assert_eq!(first.simulations().count(), 2);
        assert_eq!(first.simulations().mean(), 20.0);
        assert_eq!(first.time_to_best_ms().max(), 15.0);
    }
}
