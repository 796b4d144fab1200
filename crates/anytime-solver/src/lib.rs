//! Search strategies for the anytime framework.
//!
//! This crate provides the strategy layer on top of `anytime-core`:
//! - [`GreedySolver`] — single-pass enumeration of all candidate moves
//! - [`MonteCarloSolver`] — time-bounded random sampling
//! - [`HillClimbingSolver`] — local search seeded by a base solver
//! - [`CompositeSolver`] — budget-subdividing pipeline of strategies
//! - [`LoggingSolver`] — observational decorator around any strategy
//! - [`SearchStats`] — cross-turn diagnostics aggregation
//!
//! Logging levels:
//! - **INFO**: `LoggingSolver` run summaries and best solutions
//! - **DEBUG**: per-run counters of the sampling strategies

pub mod builder;
pub mod composite;
pub mod greedy;
pub mod hill_climbing;
pub mod logging;
pub mod monte_carlo;
pub mod stats;

#[cfg(test)]
mod test_utils;

pub use builder::build_pipeline;
pub use composite::CompositeSolver;
pub use greedy::{GreedySolver, MoveEnumerator, SingleMoveSolution};
pub use hill_climbing::HillClimbingSolver;
pub use logging::LoggingSolver;
pub use monte_carlo::{MonteCarloSolver, SolutionGenerator};
pub use stats::SearchStats;
