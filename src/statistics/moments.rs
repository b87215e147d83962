//! Running statistics (mean, variance, min, max)
//!
//! Computes streaming statistics using Welford's numerically stable online algorithm.

use crate::math;
use crate::statistics::StatisticData;
use crate::traits::StreamingStatistic;

/// Running moments calculator using Welford's algorithm
///
/// Computes mean, population variance, standard deviation, min, and max in a
/// single pass with O(1) memory. No samples are retained.
///
/// This is the unsynchronized state behind
/// [`MovingAverageStatistics`](crate::statistics::MovingAverageStatistics);
/// use it directly when a single owner feeds the stream.
///
/// # Example
///
/// ```
/// use topicstats::statistics::RunningMoments;
///
/// let mut stats = RunningMoments::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean() - 5.0).abs() < 0.001);
/// assert!((stats.variance() - 4.0).abs() < 0.001);
/// assert!((stats.stddev() - 2.0).abs() < 0.001);
/// assert_eq!(stats.min(), Some(2.0));
/// assert_eq!(stats.max(), Some(9.0));
/// ```
#[derive(Clone, Debug)]
pub struct RunningMoments {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
    /// Minimum value, `+inf` while empty
    min: f64,
    /// Maximum value, `-inf` while empty
    max: f64,
}

impl Default for RunningMoments {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningMoments {
    /// Create a new empty accumulator
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value
    ///
    /// NaN values are ignored and do not count as samples.
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        self.count += 1;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean, NaN while empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Get the population variance, NaN while empty
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Get the population standard deviation, NaN while empty
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
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

    /// Take an immutable snapshot
    ///
    /// An empty accumulator yields [`StatisticData::EMPTY`]; the internal
    /// min/max sentinels are never exposed.
    pub fn snapshot(&self) -> StatisticData {
        if self.count == 0 {
            return StatisticData::EMPTY;
        }

        StatisticData {
            average: self.mean,
            min: self.min,
            max: self.max,
            standard_deviation: math::sqrt(self.m2 / self.count as f64),
            sample_count: self.count,
        }
    }

    /// Restore the freshly constructed state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl StreamingStatistic for RunningMoments {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut stats = RunningMoments::new();

        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.add(v);
        }

        assert_eq!(stats.len(), 8);
        assert!((stats.mean() - 5.0).abs() < 0.001);
        assert!((stats.variance() - 4.0).abs() < 0.001);
        assert!((stats.stddev() - 2.0).abs() < 0.001);
        assert_eq!(stats.min(), Some(2.0));
        assert_eq!(stats.max(), Some(9.0));
    }

    #[test]
    fn test_one_two_three() {
        let mut stats = RunningMoments::new();
        stats.add(1.0);
        stats.add(2.0);
        stats.add(3.0);

        let data = stats.snapshot();
        assert_eq!(data.sample_count, 3);
        assert!((data.average - 2.0).abs() < 1e-12);
        assert_eq!(data.min, 1.0);
        assert_eq!(data.max, 3.0);
        assert!((data.standard_deviation - 0.816_496_580_927_726).abs() < 1e-9);
    }

    #[test]
    fn test_single_value() {
        let mut stats = RunningMoments::new();
        stats.add(42.0);

        let data = stats.snapshot();
        assert_eq!(data.sample_count, 1);
        assert_eq!(data.average, 42.0);
        assert_eq!(data.min, 42.0);
        assert_eq!(data.max, 42.0);
        assert_eq!(data.standard_deviation, 0.0);
    }

    #[test]
    fn test_empty() {
        let stats = RunningMoments::new();

        assert!(stats.is_empty());
        assert!(stats.mean().is_nan());
        assert!(stats.variance().is_nan());
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);

        let data = stats.snapshot();
        assert_eq!(data.sample_count, 0);
        assert!(data.average.is_nan());
        assert!(data.min.is_nan());
        assert!(data.max.is_nan());
        assert!(data.standard_deviation.is_nan());
    }

    #[test]
    fn test_negative_values() {
        let mut stats = RunningMoments::new();
        for v in [-5.0, -1.0, -3.0] {
            stats.add(v);
        }

        assert_eq!(stats.min(), Some(-5.0));
        assert_eq!(stats.max(), Some(-1.0));
        assert!((stats.mean() + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut stats = RunningMoments::new();

        stats.add(1.0);
        stats.add(2.0);
        stats.add(3.0);

        stats.reset();

        assert!(stats.is_empty());
        assert_eq!(stats.min(), None);
        assert_eq!(stats.snapshot().sample_count, 0);

        stats.add(10.0);
        assert_eq!(stats.min(), Some(10.0));
        assert_eq!(stats.max(), Some(10.0));
    }

    #[test]
    fn test_numerical_stability() {
        let mut stats = RunningMoments::new();

        let base = 1e9;
        for i in 0..1000 {
            stats.add(base + i as f64);
        }

        let expected_mean = base + 499.5;
        assert!(
            (stats.mean() - expected_mean).abs() < 1e-3,
            "Mean: {} expected: {}",
            stats.mean(),
            expected_mean
        );

        // Population stddev of 0..1000 is sqrt((1000^2 - 1) / 12)
        let expected_stddev = math::sqrt((1000.0 * 1000.0 - 1.0) / 12.0);
        assert!((stats.stddev() - expected_stddev).abs() < 1e-3);
    }

    #[test]
    fn test_nan_ignored() {
        let mut stats = RunningMoments::new();

        stats.add(1.0);
        stats.add(f64::NAN);
        stats.add(2.0);
        stats.add(f64::NAN);
        stats.add(3.0);

        assert_eq!(stats.len(), 3);
        assert!((stats.mean() - 2.0).abs() < 0.001);
        assert_eq!(stats.min(), Some(1.0));
        assert_eq!(stats.max(), Some(3.0));
        assert!(!stats.variance().is_nan());
    }

    #[test]
    fn test_only_nan_stays_empty() {
        let mut stats = RunningMoments::new();
        for _ in 0..10 {
            stats.add(f64::NAN);
        }

        assert!(stats.is_empty());
        assert_eq!(stats.snapshot().sample_count, 0);
    }

    #[test]
    fn test_infinity() {
        let mut stats = RunningMoments::new();

        stats.add(1.0);
        stats.add(f64::INFINITY);
        stats.add(2.0);

        // Infinity is a valid f64 value, should be included
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.max(), Some(f64::INFINITY));
    }

    #[test]
    fn test_streaming_statistic_impl() {
        let mut stats = RunningMoments::new();
        StreamingStatistic::update(&mut stats, &4.0);
        assert_eq!(StreamingStatistic::count(&stats), 1);

        StreamingStatistic::clear(&mut stats);
        assert!(StreamingStatistic::is_empty(&stats));
    }
}
