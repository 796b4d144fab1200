//! Local search seeded by a base solver.

use tracing::debug;

use anytime_core::{
    Countdown, Error, Mutation, Mutator, Result, Solution, SolutionDebugInfo, Solver,
};

use crate::stats::SearchStats;

const DEFAULT_BASE_TIME_FRACTION: f64 = 0.1;

/// Hill climbing: seed with a base solver, then repeatedly mutate the
/// current best, accepting only strict improvements.
///
/// The base solver runs on a sub-budget (`base_time_fraction` of the
/// remaining time, default 0.1) and its best solution seeds the climb.
/// Each loop iteration asks the mutator for one mutation and compares its
/// cheap preview score against the current best; only accepted mutations
/// are materialized. The terminal solution is a local optimum with respect
/// to the single-step neighborhood reachable within the budget.
///
/// If the base solver produces nothing, the result is empty — a
/// degenerate-but-valid outcome the caller must check for.
pub struct HillClimbingSolver<B, M> {
    base: B,
    mutator: M,
    base_time_fraction: f64,
    stats: SearchStats,
}

impl<B, M> HillClimbingSolver<B, M> {
    pub fn new(base: B, mutator: M) -> Self {
        Self {
            base,
            mutator,
            base_time_fraction: DEFAULT_BASE_TIME_FRACTION,
            stats: SearchStats::new(),
        }
    }

    /// Sets the share of the budget spent on the seeding base solver.
    ///
    /// # Errors
    ///
    /// Fails fast with [`Error::Config`] for a non-finite or non-positive
    /// fraction: that would starve the base solver with a zero sub-budget,
    /// which is a programmer error rather than a runtime condition.
    pub fn with_base_time_fraction(mut self, fraction: f64) -> Result<Self> {
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(Error::Config(format!(
                "base solver time fraction must be positive, got {fraction}"
            )));
        }
        self.base_time_fraction = fraction;
        Ok(self)
    }

    /// Per-run counters accumulated across turns.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<P, S, B, M> Solver<P, S> for HillClimbingSolver<B, M>
where
    S: Solution,
    B: Solver<P, S>,
    M: Mutator<P, S>,
{
    fn solutions(&mut self, problem: &P, countdown: Countdown) -> Vec<S> {
        let name = self.short_name();
        let mut seed_trace = self
            .base
            .solutions(problem, countdown.scale(self.base_time_fraction));
        let Some(seed) = seed_trace.pop() else {
            self.stats.record_run(0, 0, None);
            return Vec::new();
        };

        let mut attempts = 0;
        let mut improvements = 0;
        let mut steps = vec![seed];
        while !countdown.is_finished() {
            let Some(parent) = steps.last() else { break };
            let mutation = self.mutator.mutate(problem, parent);
            attempts += 1;
            // Cheap preview first; materialize only accepted mutations.
            if mutation.score() > parent.score() {
                improvements += 1;
                let mut improved = mutation.materialize();
                improved.set_debug_info(SolutionDebugInfo::at(
                    &countdown,
                    attempts,
                    improvements,
                    name.clone(),
                ));
                steps.push(improved);
            }
        }

        let time_to_best = steps
            .last()
            .and_then(|s| s.debug_info())
            .map(|info| info.time());
        self.stats.record_run(attempts, improvements, time_to_best);
        debug!(
            solver = %name,
            attempts,
            improvements,
            "hill climbing run finished"
        );
        steps
    }

    fn short_name(&self) -> String {
        format!(
            "HC_({})_({})_{:.0}%",
            self.mutator.name(),
            self.base.short_name(),
            self.base_time_fraction * 100.0
        )
    }
}
