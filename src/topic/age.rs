//! Message age: arrival time minus the message's own header stamp

use core::fmt;
use core::marker::PhantomData;

use log::trace;

use crate::collector::{Collector, MetricDetails, StatisticsCollector};
use crate::math;
use crate::topic::constants::{MILLISECOND_UNIT_NAME, MSG_AGE_STAT_NAME};
use crate::topic::stamp::{TimestampExtractor, WithTimestamp};
use crate::topic::TopicStatisticsCollector;

/// Collects the age of each received message in milliseconds
///
/// The extraction strategy `X` is fixed per message type: with
/// [`WithTimestamp`] (the default) each message with a non-zero stamp,
/// observed at a non-zero time, yields one measurement. With
/// [`WithoutTimestamp`](crate::topic::WithoutTimestamp) the collector never
/// records anything.
///
/// No state besides the measurements is kept; every message is evaluated on
/// its own.
///
/// # Example
///
/// ```
/// use topicstats::prelude::*;
///
/// struct Image {
///     stamp: Timestamp,
/// }
///
/// impl HasHeaderStamp for Image {
///     fn header_stamp(&self) -> Timestamp {
///         self.stamp
///     }
/// }
///
/// let age = ReceivedMessageAgeCollector::<Image>::new();
/// age.start().unwrap();
///
/// let msg = Image { stamp: Timestamp::new(100, 0) };
/// age.on_message_received(&msg, 100_250_000_000);
///
/// assert_eq!(age.statistics_results().average, 250.0);
/// assert_eq!(age.metric_unit(), "ms");
/// ```
pub struct ReceivedMessageAgeCollector<M, X = WithTimestamp> {
    collector: Collector,
    _marker: PhantomData<fn(&M) -> X>,
}

impl<M, X: TimestampExtractor<M>> ReceivedMessageAgeCollector<M, X> {
    /// Create a stopped collector
    pub fn new() -> Self {
        Self {
            collector: Collector::new(),
            _marker: PhantomData,
        }
    }

    /// Whether messages of type `M` can ever produce a measurement
    pub fn has_timestamp(&self) -> bool {
        X::HAS_TIMESTAMP
    }
}

impl<M, X: TimestampExtractor<M>> Default for ReceivedMessageAgeCollector<M, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, X> fmt::Debug for ReceivedMessageAgeCollector<M, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceivedMessageAgeCollector")
            .field("collector", &self.collector)
            .finish()
    }
}

impl<M, X> MetricDetails for ReceivedMessageAgeCollector<M, X> {
    fn metric_name(&self) -> &str {
        MSG_AGE_STAT_NAME
    }

    fn metric_unit(&self) -> &str {
        MILLISECOND_UNIT_NAME
    }
}

impl<M, X> StatisticsCollector for ReceivedMessageAgeCollector<M, X>
where
    X: TimestampExtractor<M>,
{
    fn collector(&self) -> &Collector {
        &self.collector
    }
}

impl<M, X> TopicStatisticsCollector<M> for ReceivedMessageAgeCollector<M, X>
where
    X: TimestampExtractor<M>,
{
    fn on_message_received(&self, message: &M, now_nanos: i64) {
        if !X::HAS_TIMESTAMP {
            return;
        }
        let Some(stamp_nanos) = X::extract(message) else {
            return;
        };

        if stamp_nanos == 0 || now_nanos == 0 {
            trace!(
                "message age skipped: stamp={} now={}",
                stamp_nanos,
                now_nanos
            );
            return;
        }

        self.accept_data(math::millis_between(now_nanos, stamp_nanos));
    }
}
