//! Observational logging decorator.

use tracing::info;

use anytime_core::{Countdown, Solution, Solver};

/// Wraps any solver and logs its results without altering them.
///
/// After the wrapped solver finishes, the decorator emits the top-K most
/// recent (best) solutions and the total elapsed time at INFO level, then
/// returns the sequence unmodified. The output format is human-readable
/// diagnostics, not a stable contract.
pub struct LoggingSolver<T> {
    inner: T,
    best_count: usize,
}

impl<T> LoggingSolver<T> {
    pub fn new(inner: T, best_count: usize) -> Self {
        Self { inner, best_count }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<P, S, T> Solver<P, S> for LoggingSolver<T>
where
    S: Solution,
    T: Solver<P, S>,
{
    fn solutions(&mut self, problem: &P, countdown: Countdown) -> Vec<S> {
        let solutions = self.inner.solutions(problem, countdown);
        info!(
            solver = %self.inner.short_name(),
            solutions = solutions.len(),
            elapsed_ms = countdown.elapsed().as_millis() as u64,
            "search finished"
        );
        for solution in solutions.iter().rev().take(self.best_count) {
            match solution.debug_info() {
                Some(debug_info) => {
                    info!(score = solution.score(), info = %debug_info, "best solution")
                }
                None => info!(score = solution.score(), "best solution"),
            }
        }
        solutions
    }

    fn short_name(&self) -> String {
        self.inner.short_name()
    }
}
