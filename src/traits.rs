//! Core traits for streaming statistics
//!
//! The accumulators implement [`StreamingStatistic`] (single-owner, `&mut self`)
//! or [`MeasurementSink`] (shared, `&self`). Collectors additionally describe
//! the metric they produce through [`MetricDetails`].

use core::fmt::Debug;

/// Core trait for single-owner streaming accumulators
pub trait StreamingStatistic: Clone + Debug {
    /// The type of item this accumulator processes
    type Item: ?Sized;

    /// Add an item
    fn update(&mut self, item: &Self::Item);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Number of items accepted
    fn count(&self) -> u64;

    /// Check if nothing has been accepted
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Shared entry point for measurements
///
/// Implementors synchronize internally, so any number of producers may call
/// [`accept_data`](MeasurementSink::accept_data) through a shared reference.
pub trait MeasurementSink: Send + Sync {
    /// Record one observed measurement. NaN is discarded.
    fn accept_data(&self, measurement: f64);
}

/// Name and unit of the metric a collector produces
///
/// Both are fixed per collector type and consumed by reporting code when it
/// packages a snapshot into an outbound message.
pub trait MetricDetails {
    /// Metric name, e.g. `"message_age"`
    fn metric_name(&self) -> &str;

    /// Unit of every measurement, e.g. `"ms"`
    fn metric_unit(&self) -> &str;
}
