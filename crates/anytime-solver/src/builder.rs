//! Configuration wiring for search pipelines.

use anytime_config::{SolverConfig, StageConfig};
use anytime_core::{Error, Result, Solution, Solver};

use crate::composite::CompositeSolver;
use crate::logging::LoggingSolver;

/// Builds a logging-wrapped composite pipeline from a [`SolverConfig`].
///
/// The configuration names the stages; `make_stage` resolves each name to
/// a concrete solver, since only the caller knows the problem-specific
/// estimators, mutators and generators involved.
///
/// # Errors
///
/// Fails fast with [`Error::Config`] on an invalid configuration (see
/// [`SolverConfig::validate`]) or when `make_stage` rejects a stage.
///
/// # Example
///
/// ```no_run
/// use anytime_config::SolverConfig;
/// use anytime_solver::build_pipeline;
/// # use anytime_core::{Countdown, Solver};
/// # use anytime_solver::monte_carlo::{MonteCarloSolver, SolutionGenerator};
/// # use anytime_solver::greedy::SingleMoveSolution;
/// # struct Gen;
/// # impl SolutionGenerator<u32, SingleMoveSolution<u32>> for Gen {
/// #     fn generate(&mut self, _: &u32) -> SingleMoveSolution<u32> {
/// #         SingleMoveSolution::new(0, 0.0)
/// #     }
/// # }
///
/// let config = SolverConfig::from_toml_str(r#"
///     [[stages]]
///     solver = "monte_carlo"
///     time_fraction = 1.0
/// "#)?;
///
/// type Stage = Box<dyn Solver<u32, SingleMoveSolution<u32>>>;
/// let mut pipeline = build_pipeline(&config, |stage| match stage.solver.as_str() {
///     "monte_carlo" => Ok(Box::new(MonteCarloSolver::new(Gen)) as Stage),
///     other => Err(anytime_core::Error::Config(format!("unknown stage {other}"))),
/// })?;
///
/// let problem = 17u32;
/// let solutions = pipeline.solutions(&problem, Countdown::from_millis(90));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build_pipeline<P, S, F>(
    config: &SolverConfig,
    mut make_stage: F,
) -> Result<LoggingSolver<CompositeSolver<P, S>>>
where
    S: Solution,
    F: FnMut(&StageConfig) -> Result<Box<dyn Solver<P, S>>>,
{
    config
        .validate()
        .map_err(|e| Error::Config(e.to_string()))?;
    let mut children = Vec::with_capacity(config.stages.len());
    for stage in &config.stages {
        children.push((make_stage(stage)?, stage.time_fraction));
    }
    Ok(LoggingSolver::new(
        CompositeSolver::new(children)?,
        config.log_best_count,
    ))
}
