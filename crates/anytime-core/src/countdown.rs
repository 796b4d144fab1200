//! Wall-clock time budget.

use std::fmt;
use std::time::{Duration, Instant};

/// A wall-clock time budget, started at construction.
///
/// A `Countdown` is handed to a solver once per turn (or once per
/// sub-budget allocation) and is read-only after construction; only the
/// passage of time changes what [`remaining`](Countdown::remaining) and
/// [`is_finished`](Countdown::is_finished) report.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use anytime_core::Countdown;
///
/// let countdown = Countdown::from_millis(50);
/// assert!(!countdown.is_finished());
/// assert!(countdown.remaining() <= Duration::from_millis(50));
///
/// // Subdivide the remaining budget for a nested strategy.
/// let sub = countdown.scale(0.5);
/// assert!(sub.remaining() <= Duration::from_millis(25));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: Duration,
    start: Instant,
}

impl Countdown {
    /// Creates a countdown with the given duration, started now.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            start: Instant::now(),
        }
    }

    /// Creates a countdown of `ms` milliseconds, started now.
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// The total budget this countdown was created with.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time elapsed since construction.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time still available, saturating at zero once the budget is spent.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed())
    }

    /// True once the elapsed time reaches the budget.
    pub fn is_finished(&self) -> bool {
        self.elapsed() >= self.duration
    }

    /// Returns a new, freshly-started countdown whose duration is the
    /// *remaining* time multiplied by `factor`.
    ///
    /// Scaling is relative to remaining time, not total duration, so a
    /// composite strategy can repeatedly carve sub-budgets out of a
    /// shrinking parent budget. A non-finite or non-positive factor yields
    /// a zero-duration (immediately finished) countdown, so a
    /// misconfigured pipeline degrades to skipping work instead of failing.
    pub fn scale(&self, factor: f64) -> Countdown {
        if !factor.is_finite() || factor <= 0.0 {
            return Countdown::new(Duration::ZERO);
        }
        Countdown::new(self.remaining().mul_f64(factor))
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elapsed {} ms. Available {} ms",
            self.elapsed().as_millis(),
            self.remaining().as_millis()
        )
    }
}
