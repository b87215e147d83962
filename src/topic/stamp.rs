//! Static selection of header timestamp extraction
//!
//! Whether a message type carries a header stamp is decided by the type, not
//! inspected per message. A collector is instantiated with one of two
//! [`TimestampExtractor`] strategies:
//!
//! - [`WithTimestamp`] for message types implementing [`HasHeaderStamp`]
//! - [`WithoutTimestamp`] for any other message type

use crate::time::Timestamp;

/// Message types whose header carries the time they were created
pub trait HasHeaderStamp {
    /// The header stamp, zero if unset
    fn header_stamp(&self) -> Timestamp;
}

/// Strategy for reading an embedded timestamp from a message of type `M`
pub trait TimestampExtractor<M: ?Sized> {
    /// Whether this strategy ever yields a timestamp
    const HAS_TIMESTAMP: bool;

    /// Embedded timestamp in nanoseconds, `None` if the type has none
    fn extract(message: &M) -> Option<i64>;
}

/// Reads [`HasHeaderStamp::header_stamp`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WithTimestamp;

/// For message types without a header stamp; never yields a timestamp
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WithoutTimestamp;

impl<M: HasHeaderStamp + ?Sized> TimestampExtractor<M> for WithTimestamp {
    const HAS_TIMESTAMP: bool = true;

    #[inline]
    fn extract(message: &M) -> Option<i64> {
        Some(message.header_stamp().as_nanos())
    }
}

impl<M: ?Sized> TimestampExtractor<M> for WithoutTimestamp {
    const HAS_TIMESTAMP: bool = false;

    #[inline]
    fn extract(_message: &M) -> Option<i64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stamped(Timestamp);

    impl HasHeaderStamp for Stamped {
        fn header_stamp(&self) -> Timestamp {
            self.0
        }
    }

    struct Bare;

    #[test]
    fn test_with_timestamp() {
        let msg = Stamped(Timestamp::new(2, 5));
        assert_eq!(
            <WithTimestamp as TimestampExtractor<Stamped>>::extract(&msg),
            Some(2_000_000_005)
        );
        assert!(<WithTimestamp as TimestampExtractor<Stamped>>::HAS_TIMESTAMP);
    }

    #[test]
    fn test_zero_stamp_is_still_extracted() {
        let msg = Stamped(Timestamp::default());
        assert_eq!(
            <WithTimestamp as TimestampExtractor<Stamped>>::extract(&msg),
            Some(0)
        );
    }

    #[test]
    fn test_without_timestamp() {
        assert_eq!(<WithoutTimestamp as TimestampExtractor<Bare>>::extract(&Bare), None);
        assert!(!<WithoutTimestamp as TimestampExtractor<Bare>>::HAS_TIMESTAMP);

        // also usable for stamped types
        let msg = Stamped(Timestamp::new(1, 0));
        assert_eq!(
            <WithoutTimestamp as TimestampExtractor<Stamped>>::extract(&msg),
            None
        );
    }
}
