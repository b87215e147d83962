//! Wire time representation

/// Seconds plus nanoseconds since the clock's epoch
///
/// Matches the layout message headers use for their stamp. A zero stamp
/// means "not set".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    /// Whole seconds
    pub sec: i32,
    /// Nanoseconds within the second, `< 1_000_000_000`
    pub nanosec: u32,
}

const NANOS_PER_SEC: i64 = 1_000_000_000;

impl Timestamp {
    /// Create a timestamp from its parts
    pub const fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }

    /// Total nanoseconds since the epoch
    pub const fn as_nanos(&self) -> i64 {
        self.sec as i64 * NANOS_PER_SEC + self.nanosec as i64
    }

    /// Split nanoseconds into seconds and sub-second nanoseconds
    ///
    /// Negative inputs produce a negative `sec` with a non-negative
    /// `nanosec`. Returns `None` when the seconds do not fit in `i32`.
    pub fn from_nanos(nanos: i64) -> Option<Self> {
        let sec = i32::try_from(nanos.div_euclid(NANOS_PER_SEC)).ok()?;
        Some(Self {
            sec,
            nanosec: nanos.rem_euclid(NANOS_PER_SEC) as u32,
        })
    }

    /// True for the unset stamp
    pub const fn is_zero(&self) -> bool {
        self.sec == 0 && self.nanosec == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_nanos() {
        assert_eq!(Timestamp::new(0, 0).as_nanos(), 0);
        assert_eq!(Timestamp::new(1, 500).as_nanos(), 1_000_000_500);
        assert_eq!(Timestamp::new(-1, 0).as_nanos(), -1_000_000_000);
    }

    #[test]
    fn test_from_nanos() {
        assert_eq!(
            Timestamp::from_nanos(1_000_000_500),
            Some(Timestamp::new(1, 500))
        );
        assert_eq!(
            Timestamp::from_nanos(-1),
            Some(Timestamp::new(-1, 999_999_999))
        );
        assert_eq!(Timestamp::from_nanos(0), Some(Timestamp::default()));
    }

    #[test]
    fn test_from_nanos_out_of_range() {
        assert_eq!(Timestamp::from_nanos(i64::MAX), None);
        assert_eq!(Timestamp::from_nanos(i64::MIN), None);

        let top = Timestamp::new(i32::MAX, 999_999_999);
        assert_eq!(Timestamp::from_nanos(top.as_nanos()), Some(top));
        assert_eq!(Timestamp::from_nanos(top.as_nanos() + 1), None);

        let bottom = Timestamp::new(i32::MIN, 0);
        assert_eq!(Timestamp::from_nanos(bottom.as_nanos()), Some(bottom));
        assert_eq!(Timestamp::from_nanos(bottom.as_nanos() - 1), None);
    }

    #[test]
    fn test_is_zero() {
        assert!(Timestamp::default().is_zero());
        assert!(!Timestamp::new(0, 1).is_zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Timestamp::new(1, 0) > Timestamp::new(0, 999_999_999));
    }
}
