//! State-quality estimation contract.

/// Estimates the quality of a state as a **cost**: lower is better.
///
/// Implementations must be pure and deterministic for identical input, or
/// rankings stop being reproducible; they must never produce `NaN`. Both
/// are preconditions the framework does not check.
///
/// Note the inversion relative to [`Solution::score`](crate::Solution):
/// solvers that wrap an estimate into a solution negate it, so that
/// "higher solution score is better" holds everywhere.
pub trait Estimator<S> {
    /// The cost of `state`; lower is better.
    fn estimate(&self, state: &S) -> f64;

    /// Name used in solver diagnostics.
    fn name(&self) -> String {
        short_type_name::<Self>()
    }
}

pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnitCost;

    impl Estimator<i32> for UnitCost {
        fn estimate(&self, _state: &i32) -> f64 {
            1.0
        }
    }

    #[test]
    fn default_name_is_short_type_name() {
        assert_eq!(UnitCost.name(), "UnitCost");
    }
}
