//! # Topicstats
//!
//! Constant-memory online statistics for message streams.
//!
//! Topicstats turns a stream of scalar measurements into a running average,
//! minimum, maximum, population standard deviation and sample count, without
//! retaining any samples. On top of that engine it provides collectors that
//! derive measurements from inbound messages on a pub/sub topic.
//!
//! ## Features
//!
//! - **Online moments**: Welford's algorithm, O(1) time and memory per sample
//! - **Thread-safe accumulation**: many producers, one snapshotting reader
//! - **Lifecycle**: start/stop state machine that clears its window on stop
//! - **Message age**: delay between a message's header stamp and its arrival
//! - **Message period**: time between consecutive arrivals on one stream
//! - **Metrics messages**: five-entry statistics payload for publication
//!
//! ## Quick Start
//!
//! ```rust
//! use topicstats::prelude::*;
//!
//! let stats = MovingAverageStatistics::new();
//! for v in [1.0, 2.0, 3.0] {
//!     stats.add_measurement(v);
//! }
//!
//! let data = stats.get_statistics();
//! assert_eq!(data.sample_count, 3);
//! assert!((data.average - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Topic Statistics
//!
//! ```rust
//! use topicstats::prelude::*;
//!
//! struct Tick;
//!
//! let period = ReceivedMessagePeriodCollector::<Tick>::new();
//! period.start().unwrap();
//!
//! period.on_message_received(&Tick, 1_000_000_000);
//! period.on_message_received(&Tick, 1_010_000_000);
//!
//! let data = period.statistics_results();
//! assert_eq!(data.sample_count, 1);
//! assert!((data.average - 10.0).abs() < 1e-9);
//! assert_eq!(period.metric_name(), "message_period");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): lock-protected accumulator and collectors
//! - `topic` (default): message age and message period collectors
//! - `message` (default): statistics message generation
//! - `serde`: enable serialization of snapshots and messages
//! - `full`: enable everything
//!
//! Without `std` only [`RunningMoments`](statistics::RunningMoments) and the
//! snapshot types are available.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod statistics;
pub mod time;
pub mod traits;

mod math;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod collector;

#[cfg(feature = "topic")]
#[cfg_attr(docsrs, doc(cfg(feature = "topic")))]
pub mod topic;

#[cfg(feature = "message")]
#[cfg_attr(docsrs, doc(cfg(feature = "message")))]
pub mod message;

pub mod prelude {
    pub use crate::error::{HookError, LifecycleError};
    pub use crate::statistics::{RunningMoments, StatisticData};
    pub use crate::time::Timestamp;
    pub use crate::traits::*;

    #[cfg(feature = "std")]
    pub use crate::collector::{Collector, StatisticsCollector};
    #[cfg(feature = "std")]
    pub use crate::statistics::MovingAverageStatistics;

    #[cfg(feature = "topic")]
    pub use crate::topic::{
        HasHeaderStamp, ReceivedMessageAgeCollector, ReceivedMessagePeriodCollector,
        TimestampExtractor, TopicStatisticsCollector, WithTimestamp, WithoutTimestamp,
    };

    #[cfg(feature = "message")]
    pub use crate::message::{
        generate_statistics_message, MetricsMessage, StatisticDataPoint, StatisticDataType,
    };
}

pub use statistics::{RunningMoments, StatisticData};
pub use time::Timestamp;

#[cfg(feature = "std")]
pub use collector::Collector;
#[cfg(feature = "std")]
pub use statistics::MovingAverageStatistics;
