//! Outbound statistics messages
//!
//! A [`MetricsMessage`] packages one [`StatisticData`] snapshot with the
//! metric's identity and the window it covers. Its payload always holds
//! exactly five data points, in this order: average, maximum, minimum,
//! sample count, standard deviation. Publishing and scheduling are left to
//! the caller.
//!
//! # Example
//!
//! ```
//! use topicstats::collector::{Collector, StatisticsCollector};
//! use topicstats::message::{MetricsMessage, StatisticDataType};
//! use topicstats::time::Timestamp;
//! use topicstats::traits::MetricDetails;
//!
//! #[derive(Default)]
//! struct FrameLatency {
//!     collector: Collector,
//! }
//!
//! impl MetricDetails for FrameLatency {
//!     fn metric_name(&self) -> &str {
//!         "frame_latency"
//!     }
//!
//!     fn metric_unit(&self) -> &str {
//!         "ms"
//!     }
//! }
//!
//! impl StatisticsCollector for FrameLatency {
//!     fn collector(&self) -> &Collector {
//!         &self.collector
//!     }
//! }
//!
//! let latency = FrameLatency::default();
//! latency.start().unwrap();
//! latency.accept_data(5.0);
//! latency.accept_data(15.0);
//!
//! let msg = MetricsMessage::from_collector(
//!     "camera_node",
//!     &latency,
//!     Timestamp::new(0, 0),
//!     Timestamp::new(1, 0),
//! );
//!
//! assert_eq!(msg.metrics_source, "frame_latency");
//! assert_eq!(msg.statistics.len(), 5);
//! assert_eq!(msg.value(StatisticDataType::Average), Some(10.0));
//! assert_eq!(msg.value(StatisticDataType::SampleCount), Some(2.0));
//! ```


use crate::collector::StatisticsCollector;
use crate::statistics::StatisticData;
use crate::time::Timestamp;

/// Kind of a single statistic in a [`MetricsMessage`]
///
/// Discriminants are the wire type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StatisticDataType {
    Uninitialized = 0,
    Average = 1,
    Minimum = 2,
    Maximum = 3,
    StdDev = 4,
    SampleCount = 5,
}

impl StatisticDataType {
    /// Wire type code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a wire type code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Uninitialized),
            1 => Some(Self::Average),
            2 => Some(Self::Minimum),
            3 => Some(Self::Maximum),
            4 => Some(Self::StdDev),
            5 => Some(Self::SampleCount),
            _ => None,
        }
    }
}

/// One typed value
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticDataPoint {
    pub data_type: StatisticDataType,
    pub data: f64,
}

/// Statistics of one metric over one window
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsMessage {
    /// Node or process that produced the measurements
    pub measurement_source_name: String,
    /// Metric name, e.g. `"message_age"`
    pub metrics_source: String,
    /// Unit of every value except the sample count
    pub unit: String,
    pub window_start: Timestamp,
    pub window_stop: Timestamp,
    /// Exactly five points: average, maximum, minimum, sample count, stddev
    pub statistics: Vec<StatisticDataPoint>,
}

/// Build the statistics message for one window
pub fn generate_statistics_message(
    node_name: &str,
    metric_name: &str,
    unit: &str,
    window_start: Timestamp,
    window_stop: Timestamp,
    data: &StatisticData,
) -> MetricsMessage {
    let statistics = vec![
        StatisticDataPoint {
            data_type: StatisticDataType::Average,
            data: data.average,
        },
        StatisticDataPoint {
            data_type: StatisticDataType::Maximum,
            data: data.max,
        },
        StatisticDataPoint {
            data_type: StatisticDataType::Minimum,
            data: data.min,
        },
        StatisticDataPoint {
            data_type: StatisticDataType::SampleCount,
            data: data.sample_count as f64,
        },
        StatisticDataPoint {
            data_type: StatisticDataType::StdDev,
            data: data.standard_deviation,
        },
    ];

    MetricsMessage {
        measurement_source_name: node_name.to_owned(),
        metrics_source: metric_name.to_owned(),
        unit: unit.to_owned(),
        window_start,
        window_stop,
        statistics,
    }
}

impl MetricsMessage {
    /// Snapshot `collector` and package it under its metric name and unit
    pub fn from_collector<C>(
        node_name: &str,
        collector: &C,
        window_start: Timestamp,
        window_stop: Timestamp,
    ) -> Self
    where
        C: StatisticsCollector + ?Sized,
    {
        generate_statistics_message(
            node_name,
            collector.metric_name(),
            collector.metric_unit(),
            window_start,
            window_stop,
            &collector.statistics_results(),
        )
    }

    /// First value of the given type
    pub fn value(&self, data_type: StatisticDataType) -> Option<f64> {
        self.statistics
            .iter()
            .find(|p| p.data_type == data_type)
            .map(|p| p.data)
    }
}
