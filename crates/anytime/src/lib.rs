//! Anytime — a time-budgeted anytime-optimization framework.
//!
//! Pick the best next action for a turn-based decision problem under a
//! hard wall-clock deadline. The framework decouples how candidate
//! quality is measured ([`Estimator`]), how new candidates are produced
//! ([`Mutator`], move enumerators, random generators), and the search
//! strategy spending the budget ([`GreedySolver`], [`MonteCarloSolver`],
//! [`HillClimbingSolver`], composed with [`CompositeSolver`]).
//!
//! # Example
//!
//! ```
//! use anytime::prelude::*;
//!
//! let mut stat = StatValue::named("score");
//! stat.add(1.0);
//! stat.add(3.0);
//! assert_eq!(stat.mean(), 2.0);
//!
//! let countdown = Countdown::from_millis(90);
//! assert!(!countdown.is_finished());
//! ```

// Core contracts and primitives
pub use anytime_core::{
    Countdown, Error, Estimator, MaxHeap, Mutation, Mutator, Result, Solution, SolutionDebugInfo,
    Solver, StatValue,
};

// Configuration
pub use anytime_config::{ConfigError, SolverConfig, StageConfig};

// Strategies
pub use anytime_solver::{
    build_pipeline, CompositeSolver, GreedySolver, HillClimbingSolver, LoggingSolver,
    MonteCarloSolver, MoveEnumerator, SearchStats, SingleMoveSolution, SolutionGenerator,
};

/// Everything a typical bot needs in scope.
pub mod prelude {
    pub use anytime_config::SolverConfig;
    pub use anytime_core::{
        Countdown, Estimator, Mutation, Mutator, Solution, SolutionDebugInfo, Solver, StatValue,
    };
    pub use anytime_solver::{
        build_pipeline, CompositeSolver, GreedySolver, HillClimbingSolver, LoggingSolver,
        MonteCarloSolver, MoveEnumerator, SearchStats, SingleMoveSolution, SolutionGenerator,
    };
}
