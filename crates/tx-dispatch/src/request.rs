//! Booking requests.

use std::fmt;

use tx_core::{Hour, Location};

/// A customer's request for a taxi.
///
/// `pickup` and `drop` are already-validated locations; `pickup_time` is any
/// hour the caller supplies.  The allocator does not reject negative or
/// out-of-order hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookingRequest {
    pub pickup:      Location,
    pub drop:        Location,
    pub pickup_time: Hour,
}

impl BookingRequest {
    #[inline]
    pub fn new(pickup: Location, drop: Location, pickup_time: impl Into<Hour>) -> Self {
        Self { pickup, drop, pickup_time: pickup_time.into() }
    }

    /// Trip length in ordinal units.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.pickup.distance_to(self.drop)
    }

    /// `pickup_time + |drop − pickup|`, or `None` if that hour is past
    /// `i64::MAX`.
    #[inline]
    pub fn drop_time(&self) -> Option<Hour> {
        self.pickup_time.checked_offset(self.distance())
    }
}

impl fmt::Display for BookingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} at hour {}", self.pickup, self.drop, self.pickup_time)
    }
}
