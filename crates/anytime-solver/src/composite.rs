//! Budget-subdividing pipeline of strategies.

use smallvec::SmallVec;

use anytime_core::{Countdown, Error, Result, Solution, Solver};

/// Runs an ordered list of solvers, each on a fraction of the remaining
/// budget, merging their traces into one globally non-decreasing trace.
///
/// Declared fractions need not sum to 1: at construction each is divided
/// by the running total of the fractions not yet consumed (left to right),
/// so `[2, 2]` becomes "half the budget, then all of what remains" —
/// effectively equal shares. A later solver's solutions are forwarded only
/// when their score is at least the best seen across all earlier solvers
/// in the run, so a weaker-budgeted late stage can still contribute
/// genuine improvements while its regressions are suppressed.
pub struct CompositeSolver<P, S: Solution> {
    children: SmallVec<[(Box<dyn Solver<P, S>>, f64); 4]>,
}

impl<P, S: Solution> CompositeSolver<P, S> {
    /// Builds a pipeline from `(solver, time_fraction)` pairs.
    ///
    /// # Errors
    ///
    /// Fails fast with [`Error::Config`] when the list is empty, a
    /// fraction is negative or non-finite, or all fractions are zero —
    /// renormalizing the latter would divide by zero and poison every
    /// sub-budget with NaN.
    pub fn new(children: Vec<(Box<dyn Solver<P, S>>, f64)>) -> Result<Self> {
        if children.is_empty() {
            return Err(Error::Config("composite solver has no children".into()));
        }
        for (solver, fraction) in &children {
            if !fraction.is_finite() || *fraction < 0.0 {
                return Err(Error::Config(format!(
                    "solver '{}' has invalid time fraction {fraction}",
                    solver.short_name()
                )));
            }
        }
        let mut total: f64 = children.iter().map(|(_, fraction)| fraction).sum();
        if total <= 0.0 {
            return Err(Error::Config(
                "composite solver time fractions sum to zero".into(),
            ));
        }

        let mut normalized = SmallVec::new();
        for (solver, fraction) in children {
            normalized.push((solver, fraction / total));
            total -= fraction;
        }
        Ok(Self {
            children: normalized,
        })
    }

    /// The normalized fractions, each relative to the budget *remaining*
    /// when its solver starts. The last entry is always 1: the final
    /// solver gets everything that is left.
    pub fn fractions(&self) -> Vec<f64> {
        self.children
            .iter()
            .map(|(_, fraction)| *fraction)
            .collect()
    }
}

impl<P, S: Solution> Solver<P, S> for CompositeSolver<P, S> {
    fn solutions(&mut self, problem: &P, countdown: Countdown) -> Vec<S> {
        let mut best_score = f64::NEG_INFINITY;
        let mut trace = Vec::new();
        for (solver, fraction) in &mut self.children {
            for solution in solver.solutions(problem, countdown.scale(*fraction)) {
                if solution.score() >= best_score {
                    best_score = solution.score();
                    trace.push(solution);
                }
            }
        }
        trace
    }

    fn short_name(&self) -> String {
        let names: Vec<String> = self
            .children
            .iter()
            .map(|(solver, _)| solver.short_name())
            .collect();
        format!("[{}]", names.join(" -> "))
    }
}
