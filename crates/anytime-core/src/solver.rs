//! Solver contract.

use crate::countdown::Countdown;
use crate::solution::Solution;

/// A time-budgeted search strategy for a problem `P` producing solutions
/// of type `S`.
///
/// `solutions` returns an improving trace: a sequence of solutions in
/// which each is at least as good as the one before, with the last being
/// the best found within the budget. A strategy may return only the best
/// solution, but intermediate steps are valuable when debugging and
/// studying convergence. The trace is empty only when no candidate exists
/// at all (or the countdown was already expired at entry) — callers must
/// check for emptiness before taking "the best".
///
/// Strategies take `&mut self` because they carry per-run state: RNGs and
/// cross-turn statistics accumulators.
pub trait Solver<P, S: Solution> {
    /// Runs the search against the given problem within the budget.
    fn solutions(&mut self, problem: &P, countdown: Countdown) -> Vec<S>;

    /// Short human-readable name used in diagnostics and debug info.
    fn short_name(&self) -> String;
}

impl<P, S: Solution, T: Solver<P, S> + ?Sized> Solver<P, S> for Box<T> {
    fn solutions(&mut self, problem: &P, countdown: Countdown) -> Vec<S> {
        (**self).solutions(problem, countdown)
    }

    fn short_name(&self) -> String {
        (**self).short_name()
    }
}
