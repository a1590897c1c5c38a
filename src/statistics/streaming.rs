//! Streaming mean and sample variance
//!
//! Computes running statistics using Welford's numerically stable online
//! algorithm. Supports merging for combining partial results.

use crate::error::{AnalyticsError, Result};
use crate::math;
use crate::value::Value;

/// Streaming statistics accumulator using Welford's algorithm
///
/// Tracks the number of observations, the running mean and the sum of
/// squared deviations from it, so mean, sample variance and sample standard
/// deviation are available at any point with O(1) memory.
///
/// # Example
///
/// ```
/// use streamkit::statistics::StreamingStats;
///
/// let mut stats = StreamingStats::new();
/// stats.update(10).unwrap();
/// stats.update(20).unwrap();
///
/// assert_eq!(stats.mean(), 15.0);
/// assert_eq!(stats.variance(), 50.0);
///
/// // Inputs that are not real numbers are rejected
/// assert!(stats.update("thirty").is_err());
/// assert_eq!(stats.count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "StatsSnapshot", try_from = "StatsSnapshot")
)]
pub struct StreamingStats {
    /// Number of observations seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared deviations from the mean (M2 in Welford's algorithm)
    sum_squared_deviations: f64,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
}

impl Default for StreamingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingStats {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            sum_squared_deviations: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Incorporate one observation
    ///
    /// Fails with a validation error if `x` is not a real number; the
    /// accumulator is unchanged in that case.
    pub fn update(&mut self, x: impl Into<Value>) -> Result<()> {
        let x = x.into().as_number()?.to_f64();
        self.push(x);
        Ok(())
    }

    /// Apply [`update`](Self::update) to each value in order
    ///
    /// Stops at the first invalid value. Values before it stay applied.
    pub fn bulk_update<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for v in values {
            self.update(v)?;
        }
        Ok(())
    }

    fn push(&mut self, x: f64) {
        self.count += 1;

        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }

        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = x - self.mean;
        self.sum_squared_deviations += delta * delta2;
    }

    /// Number of observations seen
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Running mean, or 0.0 before any observation
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Sample variance
    ///
    /// The unbiased estimator (Bessel's correction), 0.0 with fewer than two
    /// observations. Use [`population_variance`](Self::population_variance)
    /// to divide by `n` instead.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.sum_squared_deviations / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation
    pub fn std_dev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Population variance, 0.0 when empty
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum_squared_deviations / self.count as f64
        }
    }

    /// Get the minimum value
    pub fn min(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Get the maximum value
    pub fn max(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Sum of all observations
    pub fn sum(&self) -> f64 {
        self.mean() * self.count as f64
    }

    /// Merge another accumulator into this one
    ///
    /// Uses Chan et al.'s parallel algorithm, so the result matches feeding
    /// both streams into a single accumulator.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;
        let weight = other.count as f64 / combined_count as f64;

        self.mean += delta * weight;
        self.sum_squared_deviations += other.sum_squared_deviations
            + delta * delta * self.count as f64 * weight;
        self.count = combined_count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Typed ingestion. NaN cannot be validated as a real number and is skipped.
impl Extend<f64> for StreamingStats {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for x in iter {
            if !x.is_nan() {
                self.push(x);
            }
        }
    }
}

impl FromIterator<f64> for StreamingStats {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Serialized form of [`StreamingStats`]
///
/// `min`/`max` are absent when empty, so an empty accumulator survives
/// formats without infinities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    pub count: u64,
    pub mean: f64,
    pub sum_squared_deviations: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl From<StreamingStats> for StatsSnapshot {
    fn from(stats: StreamingStats) -> Self {
        Self {
            count: stats.count,
            mean: stats.mean(),
            sum_squared_deviations: stats.sum_squared_deviations,
            min: stats.min(),
            max: stats.max(),
        }
    }
}

impl TryFrom<StatsSnapshot> for StreamingStats {
    type Error = AnalyticsError;

    /// Rebuild an accumulator, rejecting states `update` could never produce
    fn try_from(snap: StatsSnapshot) -> Result<Self> {
        if snap.sum_squared_deviations.is_nan() || snap.sum_squared_deviations < 0.0 {
            return Err(AnalyticsError::validation(
                "sum_squared_deviations must be a non-negative number",
            ));
        }
        if snap.mean.is_nan() {
            return Err(AnalyticsError::validation("mean must be a number"));
        }

        if snap.count == 0 {
            if snap.mean != 0.0
                || snap.sum_squared_deviations != 0.0
                || snap.min.is_some()
                || snap.max.is_some()
            {
                return Err(AnalyticsError::validation(
                    "empty accumulator must have zero mean and no min/max",
                ));
            }
            return Ok(Self::new());
        }

        match (snap.min, snap.max) {
            (Some(min), Some(max)) if min <= max => Ok(Self {
                count: snap.count,
                mean: snap.mean,
                sum_squared_deviations: snap.sum_squared_deviations,
                min,
                max,
            }),
            (Some(_), Some(_)) => Err(AnalyticsError::validation("min must not exceed max")),
            _ => Err(AnalyticsError::validation(
                "non-empty accumulator requires min and max",
            )),
        }
    }
}
