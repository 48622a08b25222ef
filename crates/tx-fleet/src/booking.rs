//! Booking records.

use tx_core::{BookingId, CustomerId, Hour, Location};

/// One committed trip in a taxi's log.
///
/// Bookings are created only by [`FleetRegistry::commit`][crate::FleetRegistry::commit]
/// and are never mutated or removed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Booking {
    /// Sequence number within the owning taxi's log, starting at 1.
    pub booking_id:  BookingId,
    pub customer_id: CustomerId,
    pub pickup:      Location,
    pub drop:        Location,
    pub pickup_time: Hour,
    /// `pickup_time + |drop − pickup|`.
    pub drop_time:   Hour,
    pub amount:      u64,
}

/// A booking that has been priced but not yet appended to a taxi's log.
///
/// The per-taxi `booking_id` is assigned at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDraft {
    pub customer_id: CustomerId,
    pub pickup:      Location,
    pub drop:        Location,
    pub pickup_time: Hour,
    pub drop_time:   Hour,
    pub amount:      u64,
}

impl BookingDraft {
    pub(crate) fn into_booking(self, booking_id: BookingId) -> Booking {
        Booking {
            booking_id,
            customer_id: self.customer_id,
            pickup:      self.pickup,
            drop:        self.drop,
            pickup_time: self.pickup_time,
            drop_time:   self.drop_time,
            amount:      self.amount,
        }
    }
}

impl Booking {
    /// Trip length in ordinal units.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.pickup.distance_to(self.drop)
    }
}
