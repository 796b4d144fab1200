//! Solution contract and per-solution diagnostics.

use std::fmt;
use std::time::Duration;

use crate::countdown::Countdown;

/// The unit a solver produces: a candidate with a comparable score.
///
/// The score convention is global across the framework: **higher is
/// better**. Conforming implementations never produce `NaN` scores; the
/// framework does not detect violations.
pub trait Solution {
    /// The quality of this candidate; higher is better.
    fn score(&self) -> f64;

    /// Diagnostics attached when the solution entered an improving trace,
    /// if any.
    fn debug_info(&self) -> Option<&SolutionDebugInfo>;

    /// Attaches diagnostics. Called by solvers at the moment a solution is
    /// accepted into the improving trace.
    fn set_debug_info(&mut self, info: SolutionDebugInfo);
}

/// Diagnostics attached to a solution when it is accepted into an
/// improving trace. Never compared; purely observational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionDebugInfo {
    time: Duration,
    index: usize,
    improvement_index: usize,
    solver_name: String,
}

impl SolutionDebugInfo {
    pub fn new(
        time: Duration,
        index: usize,
        improvement_index: usize,
        solver_name: impl Into<String>,
    ) -> Self {
        Self {
            time,
            index,
            improvement_index,
            solver_name: solver_name.into(),
        }
    }

    /// Captures the countdown's elapsed time at the moment of acceptance.
    pub fn at(
        countdown: &Countdown,
        index: usize,
        improvement_index: usize,
        solver_name: impl Into<String>,
    ) -> Self {
        Self::new(countdown.elapsed(), index, improvement_index, solver_name)
    }

    /// Time from the solver's start at which this solution was found.
    ///
    /// A best-solution time far below the budget means the search converges
    /// early and leaves time unused; one close to the budget means it does
    /// not converge within the budget.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Ordinal of the candidate that produced this solution, counting every
    /// candidate the solver considered.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Ordinal among accepted improvements only.
    pub fn improvement_index(&self) -> usize {
        self.improvement_index
    }

    /// Name of the solver that produced this solution.
    pub fn solver_name(&self) -> &str {
        &self.solver_name
    }
}

impl fmt::Display for SolutionDebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.time.as_millis())?;
        if self.index > 0 || self.improvement_index > 0 {
            write!(f, " improvement {} of {}", self.improvement_index, self.index)?;
        }
        if !self.solver_name.is_empty() {
            write!(f, " by {}", self.solver_name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_counters_and_solver() {
        let info = SolutionDebugInfo::new(Duration::from_millis(12), 40, 3, "MC");
        assert_eq!(info.to_string(), "12 ms improvement 3 of 40 by MC");
    }

    #[test]
    fn display_omits_zero_counters() {
        let info = SolutionDebugInfo::new(Duration::from_millis(5), 0, 0, "G-test");
        assert_eq!(info.to_string(), "5 ms by G-test");
    }

    #[test]
    fn at_captures_elapsed_time() {
        let countdown = Countdown::from_millis(1_000);
        let info = SolutionDebugInfo::at(&countdown, 1, 1, "HC");
        assert!(info.time() <= countdown.elapsed());
        assert_eq!(info.solver_name(), "HC");
    }
}
