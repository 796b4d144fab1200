//! Core contracts and primitives for the anytime search framework.
//!
//! This crate defines everything the search strategies in `anytime-solver`
//! build on, with no dependencies on any concrete problem:
//! - [`Countdown`] — the wall-clock time budget every solver runs against
//! - [`Solution`] and [`Solver`] — the contracts between strategies and callers
//! - [`Estimator`] and [`Mutator`] — the capability contracts implemented by
//!   problem-specific code
//! - [`StatValue`] — streaming statistics for cross-turn diagnostics
//! - [`MaxHeap`] — a reusable priority-queue building block

pub mod countdown;
pub mod error;
pub mod estimator;
pub mod heap;
pub mod mutator;
pub mod solution;
pub mod solver;
pub mod stat;

pub use countdown::Countdown;
pub use error::{Error, Result};
pub use estimator::Estimator;
pub use heap::MaxHeap;
pub use mutator::{Mutation, Mutator};
pub use solution::{Solution, SolutionDebugInfo};
pub use solver::Solver;
pub use stat::StatValue;
