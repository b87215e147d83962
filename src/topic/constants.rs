//! Metric names, units and parameter keys shared by topic collectors

/// Metric name of [`ReceivedMessageAgeCollector`](super::ReceivedMessageAgeCollector)
pub const MSG_AGE_STAT_NAME: &str = "message_age";

/// Metric name of [`ReceivedMessagePeriodCollector`](super::ReceivedMessagePeriodCollector)
pub const MSG_PERIOD_STAT_NAME: &str = "message_period";

pub const MILLISECOND_UNIT_NAME: &str = "ms";

/// Parameter naming the topic whose messages are measured
pub const COLLECT_STATS_TOPIC_NAME_PARAM: &str = "collect_topic_name";

/// Parameter naming the topic statistics are published on
pub const PUBLISH_STATS_TOPIC_NAME_PARAM: &str = "publish_topic_name";

/// Sentinel for "no message received yet"
pub const UNINITIALIZED_TIME: i64 = 0;
