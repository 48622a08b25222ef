//! Per-taxi state.

use tx_core::{BookingId, Hour, Location, TaxiId};

use crate::{Booking, BookingDraft};

/// A single taxi and its booking history.
///
/// Fields are private: every change goes through [`Taxi::record`], called by
/// the registry's commit step, so `current_location` and `busy_until` always
/// mirror the most recent booking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Taxi {
    id:               TaxiId,
    current_location: Location,
    busy_until:       Hour,
    total_earnings:   u64,
    bookings:         Vec<Booking>,
}

impl Taxi {
    /// A fresh taxi parked at `start`, free from hour 0, with no bookings.
    pub fn new(id: TaxiId, start: Location) -> Self {
        Self {
            id,
            current_location: start,
            busy_until:       Hour::ZERO,
            total_earnings:   0,
            bookings:         Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> TaxiId {
        self.id
    }

    #[inline]
    pub fn current_location(&self) -> Location {
        self.current_location
    }

    #[inline]
    pub fn busy_until(&self) -> Hour {
        self.busy_until
    }

    #[inline]
    pub fn total_earnings(&self) -> u64 {
        self.total_earnings
    }

    /// Booking log in commit order.
    #[inline]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// `true` if the taxi can take a pickup at `at` (`at >= busy_until`).
    #[inline]
    pub fn is_available(&self, at: Hour) -> bool {
        at >= self.busy_until
    }

    /// Ordinal distance from the taxi's current location to `to`.
    #[inline]
    pub fn distance_to(&self, to: Location) -> u32 {
        self.current_location.distance_to(to)
    }

    /// The `booking_id` the next committed booking will receive.
    #[inline]
    pub fn next_booking_id(&self) -> BookingId {
        BookingId::from_index(self.bookings.len())
    }

    /// Append `draft` to the log and move the taxi to its drop point.
    pub(crate) fn record(&mut self, draft: BookingDraft) -> &Booking {
        let booking = draft.into_booking(self.next_booking_id());
        self.total_earnings   = self.total_earnings.saturating_add(booking.amount);
        self.current_location = booking.drop;
        self.busy_until       = booking.drop_time;
        self.bookings.push(booking);
        &self.bookings[self.bookings.len() - 1]
    }
}
