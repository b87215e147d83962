//! Message period: time between consecutive arrivals

use core::fmt;
use core::marker::PhantomData;
use std::sync::atomic::{AtomicI64, Ordering};

use log::trace;

use crate::collector::{Collector, MetricDetails, StatisticsCollector};
use crate::error::HookError;
use crate::math;
use crate::topic::constants::{MILLISECOND_UNIT_NAME, MSG_PERIOD_STAT_NAME, UNINITIALIZED_TIME};
use crate::topic::TopicStatisticsCollector;

/// Collects the interval between received messages in milliseconds
///
/// The first message after construction or after [`start`] only sets the
/// baseline; every later message records `now - previous` and becomes the
/// new baseline. Message content is ignored.
///
/// Arrival times must come from one monotonic clock. They are not
/// validated.
///
/// Lock ownership: the baseline is an atomic swapped in a single step, so
/// it never needs the lifecycle or accumulator lock. The measurement is
/// recorded after the swap.
///
/// [`start`]: StatisticsCollector::start
///
/// # Example
///
/// ```
/// use topicstats::prelude::*;
///
/// let period = ReceivedMessagePeriodCollector::<String>::new();
/// period.start().unwrap();
///
/// for (i, now) in [1_000_000_000i64, 1_100_000_000, 1_300_000_000].iter().enumerate() {
///     period.on_message_received(&format!("msg {}", i), *now);
/// }
///
/// let data = period.statistics_results();
/// assert_eq!(data.sample_count, 2);
/// assert_eq!(data.min, 100.0);
/// assert_eq!(data.max, 200.0);
/// ```
pub struct ReceivedMessagePeriodCollector<M> {
    collector: Collector,
    last_received_nanos: AtomicI64,
    _marker: PhantomData<fn(&M)>,
}

impl<M> ReceivedMessagePeriodCollector<M> {
    /// Create a stopped collector with no baseline
    pub fn new() -> Self {
        Self {
            collector: Collector::new(),
            last_received_nanos: AtomicI64::new(UNINITIALIZED_TIME),
            _marker: PhantomData,
        }
    }

    fn reset_last_received(&self) {
        self.last_received_nanos
            .store(UNINITIALIZED_TIME, Ordering::Release);
    }
}

impl<M> Default for ReceivedMessagePeriodCollector<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for ReceivedMessagePeriodCollector<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceivedMessagePeriodCollector")
            .field("collector", &self.collector)
            .field("last_received_nanos", &self.last_received_nanos)
            .finish()
    }
}

impl<M> MetricDetails for ReceivedMessagePeriodCollector<M> {
    fn metric_name(&self) -> &str {
        MSG_PERIOD_STAT_NAME
    }

    fn metric_unit(&self) -> &str {
        MILLISECOND_UNIT_NAME
    }
}

impl<M> StatisticsCollector for ReceivedMessagePeriodCollector<M> {
    fn collector(&self) -> &Collector {
        &self.collector
    }

    fn setup_start(&self) -> Result<(), HookError> {
        self.reset_last_received();
        Ok(())
    }

    fn setup_stop(&self) -> Result<(), HookError> {
        self.reset_last_received();
        Ok(())
    }
}

impl<M> TopicStatisticsCollector<M> for ReceivedMessagePeriodCollector<M> {
    fn on_message_received(&self, _message: &M, now_nanos: i64) {
        let previous = self.last_received_nanos.swap(now_nanos, Ordering::AcqRel);

        if previous == UNINITIALIZED_TIME {
            trace!("message period baseline set at {}", now_nanos);
            return;
        }

        self.accept_data(math::millis_between(now_nanos, previous));
    }
}
