//! Thread-safe running statistics
//!
//! [`MovingAverageStatistics`] wraps one [`RunningMoments`] in a mutex so
//! that any number of producers can add measurements through `&self` while a
//! reporter takes snapshots.

use parking_lot::Mutex;

use crate::statistics::{RunningMoments, StatisticData};
use crate::traits::MeasurementSink;

/// Lock-protected online accumulator for average, min, max, stddev and count
///
/// Lock ownership: the single internal mutex guards every field of the
/// running state (mean, min, max, sum of squared deviations, count).
/// [`add_measurement`](Self::add_measurement),
/// [`get_statistics`](Self::get_statistics) and [`reset`](Self::reset) are
/// linearizable with respect to each other. No other lock is ever taken
/// while it is held.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use topicstats::statistics::MovingAverageStatistics;
///
/// let stats = Arc::new(MovingAverageStatistics::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let stats = Arc::clone(&stats);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 stats.add_measurement(i as f64);
///             }
///         })
///     })
///     .collect();
///
/// for h in handles {
///     h.join().unwrap();
/// }
///
/// assert_eq!(stats.count(), 400);
/// assert!((stats.average() - 49.5).abs() < 1e-9);
/// ```
#[derive(Debug, Default)]
pub struct MovingAverageStatistics {
    state: Mutex<RunningMoments>,
}

impl MovingAverageStatistics {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RunningMoments::new()),
        }
    }

    /// Add one measurement
    ///
    /// NaN is silently discarded and does not change the count.
    pub fn add_measurement(&self, item: f64) {
        self.state.lock().add(item);
    }

    /// Consistent snapshot of all statistics
    ///
    /// All fields are NaN and `sample_count` is zero while empty.
    pub fn get_statistics(&self) -> StatisticData {
        self.state.lock().snapshot()
    }

    /// Discard every measurement
    pub fn reset(&self) {
        self.state.lock().reset();
    }

    /// Number of measurements accepted since construction or the last reset
    pub fn count(&self) -> u64 {
        self.state.lock().len()
    }

    /// Current average, NaN while empty
    pub fn average(&self) -> f64 {
        self.get_statistics().average
    }

    /// Current minimum, NaN while empty
    pub fn min(&self) -> f64 {
        self.get_statistics().min
    }

    /// Current maximum, NaN while empty
    pub fn max(&self) -> f64 {
        self.get_statistics().max
    }

    /// Current population standard deviation, NaN while empty
    pub fn standard_deviation(&self) -> f64 {
        self.get_statistics().standard_deviation
    }
}

impl MeasurementSink for MovingAverageStatistics {
    fn accept_data(&self, measurement: f64) {
        self.add_measurement(measurement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_one_two_three() {
        let stats = MovingAverageStatistics::new();
        stats.add_measurement(1.0);
        stats.add_measurement(2.0);
        stats.add_measurement(3.0);

        assert_eq!(stats.count(), 3);
        assert!((stats.average() - 2.0).abs() < 1e-12);
        assert_eq!(stats.min(), 1.0);
        assert_eq!(stats.max(), 3.0);
        assert!((stats.standard_deviation() - 0.8165).abs() < 1e-4);
    }

    #[test]
    fn test_never_touched() {
        let stats = MovingAverageStatistics::new();
        let data = stats.get_statistics();

        assert_eq!(data.sample_count, 0);
        assert!(data.average.is_nan());
        assert!(data.min.is_nan());
        assert!(data.max.is_nan());
        assert!(data.standard_deviation.is_nan());
    }

    #[test]
    fn test_nan_is_noop() {
        let stats = MovingAverageStatistics::new();
        stats.add_measurement(5.0);
        let before = stats.get_statistics();

        for _ in 0..5 {
            stats.add_measurement(f64::NAN);
        }

        assert_eq!(stats.get_statistics(), before);
        assert_eq!(stats.count(), 1);
    }

    #[test]
    fn test_reset_matches_fresh() {
        let stats = MovingAverageStatistics::new();
        for v in [10.0, -3.0, 7.5] {
            stats.add_measurement(v);
        }
        stats.reset();

        assert_eq!(stats.count(), 0);
        assert!(stats.get_statistics().average.is_nan());

        let fresh = MovingAverageStatistics::new();
        for v in [4.0, 6.0] {
            stats.add_measurement(v);
            fresh.add_measurement(v);
        }
        assert_eq!(stats.get_statistics(), fresh.get_statistics());
    }

    #[test]
    fn test_sink_impl() {
        let stats = MovingAverageStatistics::new();
        let sink: &dyn MeasurementSink = &stats;
        sink.accept_data(2.5);
        sink.accept_data(f64::NAN);

        assert_eq!(stats.count(), 1);
        assert_eq!(stats.average(), 2.5);
    }

    #[test]
    fn test_concurrent_producers() {
        let stats = Arc::new(MovingAverageStatistics::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for i in 0..1000 {
                        stats.add_measurement((t * 1000 + i) as f64);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let data = stats.get_statistics();
        assert_eq!(data.sample_count, 8000);
        assert_eq!(data.min, 0.0);
        assert_eq!(data.max, 7999.0);
        assert!((data.average - 3999.5).abs() < 1e-6);
    }
}
