//! Time-bounded random sampling.

use tracing::debug;

use anytime_core::{Countdown, Solution, SolutionDebugInfo, Solver};

use crate::stats::SearchStats;

/// Produces one complete random solution for a problem.
///
/// Implemented by problem-specific code. Takes `&mut self` so generators
/// can own their random source.
pub trait SolutionGenerator<P, S> {
    fn generate(&mut self, problem: &P) -> S;
}

/// Samples random full solutions until the budget expires, keeping every
/// strict improvement.
///
/// The loop is bounded only by the countdown, never by a sample count; a
/// countdown that is already expired at entry yields an empty trace. Each
/// iteration runs to completion before the deadline is re-checked, so the
/// run can exceed the nominal deadline by one generator call.
pub struct MonteCarloSolver<G> {
    generator: G,
    stats: SearchStats,
}

impl<G> MonteCarloSolver<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            stats: SearchStats::new(),
        }
    }

    /// Per-run counters accumulated across turns.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<P, S, G> Solver<P, S> for MonteCarloSolver<G>
where
    S: Solution,
    G: SolutionGenerator<P, S>,
{
    fn solutions(&mut self, problem: &P, countdown: Countdown) -> Vec<S> {
        let name = self.short_name();
        let mut simulations = 0;
        let mut improvements = 0;
        let mut best_score = f64::NEG_INFINITY;
        let mut steps: Vec<S> = Vec::new();

        while !countdown.is_finished() {
            let mut solution = self.generator.generate(problem);
            simulations += 1;
            if solution.score() > best_score {
                improvements += 1;
                best_score = solution.score();
                solution.set_debug_info(SolutionDebugInfo::at(
                    &countdown,
                    simulations,
                    improvements,
                    name.clone(),
                ));
                steps.push(solution);
            }
        }

        let time_to_best = steps
            .last()
            .and_then(|s| s.debug_info())
            .map(|info| info.time());
        self.stats.record_run(simulations, improvements, time_to_best);
        debug!(
            solver = %name,
            simulations,
            improvements,
            best_score,
            "monte carlo run finished"
        );
        steps
    }

    fn short_name(&self) -> String {
        "MC".to_string()
    }
}
