//! Shared fakes for solver tests.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anytime_core::{Countdown, Mutation, Mutator, Solution, SolutionDebugInfo, Solver};

use crate::monte_carlo::SolutionGenerator;

/// Minimal scored solution for strategy tests.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSolution {
    score: f64,
    debug_info: Option<SolutionDebugInfo>,
}

impl TestSolution {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            debug_info: None,
        }
    }
}

impl Solution for TestSolution {
    fn score(&self) -> f64 {
        self.score
    }

    fn debug_info(&self) -> Option<&SolutionDebugInfo> {
        self.debug_info.as_ref()
    }

    fn set_debug_info(&mut self, info: SolutionDebugInfo) {
        self.debug_info = Some(info);
    }
}

pub fn solution_scores<S: Solution>(solutions: &[S]) -> Vec<f64> {
    solutions.iter().map(Solution::score).collect()
}

/// Emits a fixed trace regardless of problem or budget.
pub struct FixedSolver {
    name: &'static str,
    scores: Vec<f64>,
}

impl FixedSolver {
    pub fn new(name: &'static str, scores: Vec<f64>) -> Self {
        Self { name, scores }
    }
}

impl Solver<(), TestSolution> for FixedSolver {
    fn solutions(&mut self, _problem: &(), _countdown: Countdown) -> Vec<TestSolution> {
        self.scores.iter().map(|&s| TestSolution::new(s)).collect()
    }

    fn short_name(&self) -> String {
        self.name.to_string()
    }
}

/// Records the budget it is given, spends it fully, emits nothing.
///
/// Spending the budget matters: composite sub-budgets are fractions of
/// the *remaining* wall-clock time, so a child that returns instantly
/// would leave its share to the next child.
pub struct BudgetProbe {
    name: &'static str,
    budgets: Arc<Mutex<Vec<Duration>>>,
}

impl BudgetProbe {
    pub fn new(name: &'static str, budgets: Arc<Mutex<Vec<Duration>>>) -> Self {
        Self { name, budgets }
    }
}

impl Solver<(), TestSolution> for BudgetProbe {
    fn solutions(&mut self, _problem: &(), countdown: Countdown) -> Vec<TestSolution> {
        self.budgets
            .lock()
            .expect("budget probe lock")
            .push(countdown.remaining());
        std::thread::sleep(countdown.remaining());
        Vec::new()
    }

    fn short_name(&self) -> String {
        self.name.to_string()
    }
}

/// Cycles through a script of scores, one per `generate` call.
pub struct ScriptedGenerator {
    script: Vec<f64>,
    next: usize,
}

impl ScriptedGenerator {
    pub fn new(script: Vec<f64>) -> Self {
        Self { script, next: 0 }
    }
}

impl SolutionGenerator<(), TestSolution> for ScriptedGenerator {
    fn generate(&mut self, _problem: &()) -> TestSolution {
        let score = self.script[self.next % self.script.len()];
        self.next += 1;
        TestSolution::new(score)
    }
}

/// Proposes `parent + step` until a cap, counting materializations.
pub struct StepMutator {
    step: f64,
    cap: f64,
    materialized: Rc<Cell<usize>>,
}

impl StepMutator {
    pub fn with_cap(step: f64, cap: f64) -> Self {
        Self {
            step,
            cap,
            materialized: Rc::new(Cell::new(0)),
        }
    }

    /// How many proposed mutations were actually built.
    pub fn materialized(&self) -> usize {
        self.materialized.get()
    }
}

pub struct StepMutation {
    score: f64,
    materialized: Rc<Cell<usize>>,
}

impl Mutation for StepMutation {
    type Solution = TestSolution;

    fn score(&self) -> f64 {
        self.score
    }

    fn materialize(self) -> TestSolution {
        self.materialized.set(self.materialized.get() + 1);
        TestSolution::new(self.score)
    }
}

impl Mutator<(), TestSolution> for StepMutator {
    type Mutation = StepMutation;

    fn mutate(&mut self, _problem: &(), parent: &TestSolution) -> StepMutation {
        let proposed = parent.score() + self.step;
        let score = if proposed > self.cap {
            parent.score()
        } else {
            proposed
        };
        StepMutation {
            score,
            materialized: self.materialized.clone(),
        }
    }
}

/// Always proposes something worse than the parent.
pub struct NeverImprovingMutator;

impl Mutator<(), TestSolution> for NeverImprovingMutator {
    type Mutation = StepMutation;

    fn mutate(&mut self, _problem: &(), parent: &TestSolution) -> StepMutation {
        StepMutation {
            score: parent.score() - 1.0,
            materialized: Rc::new(Cell::new(0)),
        }
    }
}
