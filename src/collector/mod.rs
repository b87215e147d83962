//! Collectors: a lifecycle composed with a measurement accumulator
//!
//! [`Collector`] is the reusable component. Concrete collectors embed one and
//! implement [`StatisticsCollector`], which supplies the public lifecycle API
//! and lets them override the setup and teardown hooks.
//!
//! # Example
//!
//! ```
//! use topicstats::collector::{Collector, StatisticsCollector};
//! use topicstats::traits::MetricDetails;
//!
//! #[derive(Default)]
//! struct QueueDepth {
//!     collector: Collector,
//! }
//!
//! impl MetricDetails for QueueDepth {
//!     fn metric_name(&self) -> &str {
//!         "queue_depth"
//!     }
//!
//!     fn metric_unit(&self) -> &str {
//!         "messages"
//!     }
//! }
//!
//! impl StatisticsCollector for QueueDepth {
//!     fn collector(&self) -> &Collector {
//!         &self.collector
//!     }
//! }
//!
//! let depth = QueueDepth::default();
//! depth.start().unwrap();
//! depth.accept_data(4.0);
//! depth.accept_data(6.0);
//! assert_eq!(depth.statistics_results().average, 5.0);
//!
//! depth.stop().unwrap();
//! assert_eq!(depth.statistics_results().sample_count, 0);
//! ```

mod lifecycle;

pub use crate::traits::MetricDetails;
pub use lifecycle::Collector;

use crate::error::{HookError, LifecycleResult};
use crate::statistics::StatisticData;

/// A named metric with a start/stop lifecycle
///
/// Implementors only provide [`collector`](Self::collector) and the
/// [`MetricDetails`]; the hooks default to always succeeding.
pub trait StatisticsCollector: MetricDetails + Send + Sync {
    /// The embedded lifecycle and accumulator
    fn collector(&self) -> &Collector;

    /// Re-initialize collector-specific state when starting
    ///
    /// Runs under the lifecycle lock: must not block or call back into the
    /// lifecycle.
    fn setup_start(&self) -> Result<(), HookError> {
        Ok(())
    }

    /// Release collector-specific state when stopping
    ///
    /// Same constraints as [`setup_start`](Self::setup_start).
    fn setup_stop(&self) -> Result<(), HookError> {
        Ok(())
    }

    /// Start collecting; see [`Collector::start_with`]
    fn start(&self) -> LifecycleResult {
        self.collector().start_with(|| self.setup_start())
    }

    /// Stop collecting and clear measurements; see [`Collector::stop_with`]
    fn stop(&self) -> LifecycleResult {
        self.collector().stop_with(|| self.setup_stop())
    }

    /// Record one measurement. NaN is discarded.
    fn accept_data(&self, measurement: f64) {
        self.collector().accept_data(measurement);
    }

    /// Snapshot of the current window
    fn statistics_results(&self) -> StatisticData {
        self.collector().statistics_results()
    }

    /// Discard all measurements
    fn clear_current_measurements(&self) {
        self.collector().clear_current_measurements();
    }

    /// Current lifecycle state
    fn is_started(&self) -> bool {
        self.collector().is_started()
    }

    /// Human-readable state and statistics
    fn status_string(&self) -> String {
        self.collector().status_string()
    }
}
