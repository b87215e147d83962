//! Statistical summaries for streaming data
//!
//! This module provides algorithms for computing statistics over streams
//! in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use topicstats::statistics::MovingAverageStatistics;
//!
//! let stats = MovingAverageStatistics::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.add_measurement(value);
//! }
//!
//! let data = stats.get_statistics();
//! println!("Mean: {}", data.average);
//! println!("Stddev: {}", data.standard_deviation);
//! println!("Min: {}", data.min);
//! println!("Max: {}", data.max);
//! println!("{}", data);
//! ```

mod data;
mod moments;

#[cfg(feature = "std")]
mod moving_average;

pub use data::StatisticData;
pub use moments::RunningMoments;

#[cfg(feature = "std")]
pub use moving_average::MovingAverageStatistics;
