//! Streaming statistics accumulator.

use std::fmt;

/// Streaming accumulator for a stream of `f64` samples.
///
/// Tracks count, sum, sum of squares and the min/max, which is enough to
/// derive the mean, the (n−1)-normalized variance and a 2-sigma confidence
/// interval without storing samples. Accumulators can be [`merge`]d, which
/// is how per-turn solver stats are aggregated across a whole match.
///
/// [`merge`]: StatValue::merge
///
/// # Example
///
/// ```
/// use anytime_core::StatValue;
///
/// let mut stat = StatValue::named("Simulations");
/// stat.add(1.0);
/// stat.add(2.0);
/// stat.add(3.0);
///
/// assert_eq!(stat.count(), 3);
/// assert_eq!(stat.mean(), 2.0);
/// assert_eq!(stat.min(), 1.0);
/// assert_eq!(stat.max(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct StatValue {
    name: Option<String>,
    count: u64,
    sum: f64,
    sum_sq: f64,
    min: f64,
    max: f64,
}

impl StatValue {
    /// Creates an empty, unnamed accumulator.
    pub fn new() -> Self {
        Self {
            name: None,
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Creates an empty accumulator with a name used in diagnostics.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Adds one sample.
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Combines another accumulator into this one.
    ///
    /// The name of `other` is ignored; only its samples are absorbed.
    pub fn merge(&mut self, other: &StatValue) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Smallest sample seen, `+inf` while empty.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample seen, `-inf` while empty.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Arithmetic mean. `NaN` while empty.
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Sample variance with n−1 normalization:
    /// `(sum_sq − sum²/count) / (count − 1)`.
    ///
    /// `NaN` when `count <= 1` — a single sample has no spread. This is
    /// documented degenerate output, not an error.
    pub fn variance(&self) -> f64 {
        (self.sum_sq - self.sum * self.sum / self.count as f64) / (self.count as f64 - 1.0)
    }

    /// Standard deviation, `sqrt(variance)`.
    pub fn std_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// 2-sigma confidence interval for the mean: `2σ / √count`.
    pub fn conf_interval_2_sigma(&self) -> f64 {
        2.0 * self.std_deviation() / (self.count as f64).sqrt()
    }
}

impl Default for StatValue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        write!(
            f,
            "{:.3} stddev={:.3} min..max={:.3}..{:.3} confInt={:.3} count={}",
            self.mean(),
            self.std_deviation(),
            self.min,
            self.max,
            self.conf_interval_2_sigma(),
            self.count
        )
    }
}
