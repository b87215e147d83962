//! Immutable statistics snapshot

use core::fmt;

/// Snapshot of the statistics over one window of measurements
///
/// An empty window is represented by `sample_count == 0` with every other
/// field set to NaN. There is no separate "no data" wrapper.
///
/// Reporting code relies on these five fields one-to-one (average, maximum,
/// minimum, sample count, standard deviation), so their meaning is part of
/// the wire contract.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticData {
    /// Arithmetic mean
    pub average: f64,
    /// Smallest measurement
    pub min: f64,
    /// Largest measurement
    pub max: f64,
    /// Population standard deviation
    pub standard_deviation: f64,
    /// Number of measurements in the window
    pub sample_count: u64,
}

impl StatisticData {
    /// The snapshot of a window with no measurements
    pub const EMPTY: Self = Self {
        average: f64::NAN,
        min: f64::NAN,
        max: f64::NAN,
        standard_deviation: f64::NAN,
        sample_count: 0,
    };

    /// True if no measurement contributed to this snapshot
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }
}

impl Default for StatisticData {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Fixed six decimals, lowercase `nan`
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.6}", self.0)
        }
    }
}

impl fmt::Display for StatisticData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg={}, min={}, max={}, std_dev={}, count={}",
            Fixed(self.average),
            Fixed(self.min),
            Fixed(self.max),
            Fixed(self.standard_deviation),
            self.sample_count
        )
    }
}
