//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Fractional milliseconds from `then` to `now`
///
/// Widened to `i128` so any pair of `i64` nanosecond values is in range.
#[inline]
pub fn millis_between(now: i64, then: i64) -> f64 {
    (now as i128 - then as i128) as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_between() {
        assert_eq!(millis_between(0, 0), 0.0);
        assert_eq!(millis_between(1_000_000, 0), 1.0);
        assert_eq!(millis_between(2_500_000, 1_000_000), 1.5);
        assert_eq!(millis_between(0, 2_000_000), -2.0);
    }

    #[test]
    fn test_millis_between_full_range() {
        let span = (i64::MAX as f64 - i64::MIN as f64) / 1_000_000.0;
        assert_eq!(millis_between(i64::MAX, i64::MIN), span);
        assert_eq!(millis_between(i64::MIN, i64::MAX), -span);
        assert!(millis_between(i64::MAX, -1_000_000_000).is_finite());
    }
}
