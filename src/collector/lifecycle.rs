//! Start/stop state machine owning one accumulator

use log::{debug, warn};
use parking_lot::Mutex;

use crate::error::{HookError, LifecycleError, LifecycleResult};
use crate::statistics::{MovingAverageStatistics, StatisticData};
use crate::traits::MeasurementSink;

/// Lifecycle plus the measurements collected while it runs
///
/// ```text
/// Stopped --start()--> Started
/// Started --stop()---> Stopped   (measurements cleared)
/// ```
///
/// Lock ownership:
/// - `started` is guarded by the lifecycle mutex; setup and teardown hooks
///   run while it is held.
/// - the measurements are guarded by the accumulator's own mutex.
///
/// The two are never held at the same time.
///
/// Measurements are accepted in either state; `started` does not gate
/// [`accept_data`](Self::accept_data).
#[derive(Debug, Default)]
pub struct Collector {
    started: Mutex<bool>,
    collected_data: MovingAverageStatistics,
}

impl Collector {
    /// Create a stopped collector with no measurements
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to started
    pub fn start(&self) -> LifecycleResult {
        self.start_with(|| Ok(()))
    }

    /// Transition to stopped and clear the measurements
    pub fn stop(&self) -> LifecycleResult {
        self.stop_with(|| Ok(()))
    }

    /// Transition to started, running `setup` under the lifecycle lock
    ///
    /// Fails with [`LifecycleError::AlreadyStarted`] without calling
    /// `setup` if already started. Otherwise the state becomes started
    /// before `setup` runs, and stays started even if `setup` fails.
    pub fn start_with<F>(&self, setup: F) -> LifecycleResult
    where
        F: FnOnce() -> Result<(), HookError>,
    {
        let mut started = self.started.lock();
        if *started {
            debug!("start rejected: collector already started");
            return Err(LifecycleError::AlreadyStarted);
        }
        *started = true;

        setup().map_err(|e| {
            warn!("collector started but setup hook failed: {}", e);
            LifecycleError::SetupFailed(e)
        })?;

        debug!("collector started");
        Ok(())
    }

    /// Transition to stopped, running `teardown` under the lifecycle lock
    ///
    /// Fails with [`LifecycleError::NotStarted`] without calling `teardown`
    /// if not started. Otherwise the measurements are cleared after the
    /// lock is released, whether or not `teardown` succeeded.
    pub fn stop_with<F>(&self, teardown: F) -> LifecycleResult
    where
        F: FnOnce() -> Result<(), HookError>,
    {
        let result = {
            let mut started = self.started.lock();
            if !*started {
                debug!("stop rejected: collector not started");
                return Err(LifecycleError::NotStarted);
            }
            *started = false;
            teardown()
        };

        self.clear_current_measurements();

        match result {
            Ok(()) => {
                debug!("collector stopped");
                Ok(())
            }
            Err(e) => {
                warn!("collector stopped but teardown hook failed: {}", e);
                Err(LifecycleError::TeardownFailed(e))
            }
        }
    }

    /// Record one measurement. NaN is discarded.
    pub fn accept_data(&self, measurement: f64) {
        self.collected_data.add_measurement(measurement);
    }

    /// Snapshot of everything accepted since the last clear
    pub fn statistics_results(&self) -> StatisticData {
        self.collected_data.get_statistics()
    }

    /// Discard all measurements
    pub fn clear_current_measurements(&self) {
        self.collected_data.reset();
    }

    /// Current lifecycle state
    pub fn is_started(&self) -> bool {
        *self.started.lock()
    }

    /// `started=<bool>, avg=…, min=…, max=…, std_dev=…, count=…`
    pub fn status_string(&self) -> String {
        format!(
            "started={}, {}",
            self.is_started(),
            self.statistics_results()
        )
    }
}

impl MeasurementSink for Collector {
    fn accept_data(&self, measurement: f64) {
        Collector::accept_data(self, measurement);
    }
}
