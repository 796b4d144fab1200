//! Mutation contract with lazy materialization.

use crate::estimator::short_type_name;

/// A proposed change to a solution, scored before it is built.
///
/// Computing a mutated candidate can be far more expensive than estimating
/// whether it is worth computing, so the contract splits the cheap score
/// preview from the expensive materialization: [`score`](Mutation::score)
/// must be cheap, and [`materialize`](Mutation::materialize) is called only
/// if the mutation is accepted.
pub trait Mutation {
    /// The solution type this mutation produces.
    type Solution;

    /// Score preview of the mutated candidate; higher is better. Must not
    /// require building the candidate.
    fn score(&self) -> f64;

    /// Builds the mutated candidate. Called at most once, and only for
    /// accepted mutations.
    fn materialize(self) -> Self::Solution;
}

/// Produces one candidate mutation of a parent solution.
///
/// Move legality is the implementor's responsibility; the search layer
/// only compares scores.
pub trait Mutator<P, S> {
    type Mutation: Mutation<Solution = S>;

    /// Proposes one mutation of `parent` in the context of `problem`.
    fn mutate(&mut self, problem: &P, parent: &S) -> Self::Mutation;

    /// Name used in solver diagnostics.
    fn name(&self) -> String {
        short_type_name::<Self>()
    }
}
