//! Statistics over messages received on a topic
//!
//! Each collector turns inbound messages, plus the time they were observed,
//! into millisecond measurements:
//!
//! - [`ReceivedMessageAgeCollector`]: arrival time minus header stamp
//! - [`ReceivedMessagePeriodCollector`]: time since the previous arrival
//!
//! Observation times are signed nanoseconds supplied by the caller. The
//! period collector needs them monotonic; the age collector needs them on
//! the same epoch as the header stamps.
//!
//! # Example
//!
//! ```
//! use topicstats::prelude::*;
//!
//! struct Reading {
//!     stamp: Timestamp,
//! }
//!
//! impl HasHeaderStamp for Reading {
//!     fn header_stamp(&self) -> Timestamp {
//!         self.stamp
//!     }
//! }
//!
//! let collectors: Vec<Box<dyn TopicStatisticsCollector<Reading>>> = vec![
//!     Box::new(ReceivedMessageAgeCollector::<Reading>::new()),
//!     Box::new(ReceivedMessagePeriodCollector::<Reading>::new()),
//! ];
//!
//! for c in &collectors {
//!     c.start().unwrap();
//! }
//!
//! for sec in 1..=3 {
//!     let msg = Reading { stamp: Timestamp::new(sec, 0) };
//!     let now = Timestamp::new(sec, 2_000_000).as_nanos();
//!     for c in &collectors {
//!         c.on_message_received(&msg, now);
//!     }
//! }
//!
//! let age = collectors[0].statistics_results();
//! let period = collectors[1].statistics_results();
//! assert_eq!(age.sample_count, 3);
//! assert!((age.average - 2.0).abs() < 1e-9);
//! assert_eq!(period.sample_count, 2);
//! assert!((period.average - 1000.0).abs() < 1e-9);
//! ```

mod age;
pub mod constants;
mod period;
mod stamp;

pub use crate::time::Timestamp;
pub use age::ReceivedMessageAgeCollector;
pub use period::ReceivedMessagePeriodCollector;
pub use stamp::{HasHeaderStamp, TimestampExtractor, WithTimestamp, WithoutTimestamp};

use crate::collector::StatisticsCollector;

/// A collector fed with every message received on one topic
pub trait TopicStatisticsCollector<M>: StatisticsCollector {
    /// Handle one message observed at `now_nanos`
    ///
    /// Safe to call concurrently from several producer threads. No ordering
    /// between concurrent calls is guaranteed.
    fn on_message_received(&self, message: &M, now_nanos: i64);
}
