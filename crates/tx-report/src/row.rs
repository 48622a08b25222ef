//! Flat row types written by report backends.

use tx_core::TaxiId;
use tx_fleet::Booking;

/// One taxi's running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsRow {
    pub taxi_id:        u32,
    pub total_earnings: u64,
    pub bookings:       u64,
}

/// One committed booking, keyed by the taxi that served it.
///
/// `booking_id` restarts at 1 for every taxi, so `(taxi_id, booking_id)` is
/// the unique key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRow {
    pub taxi_id:     u32,
    pub booking_id:  u32,
    pub customer_id: u32,
    pub pickup:      char,
    pub drop:        char,
    pub pickup_time: i64,
    pub drop_time:   i64,
    pub amount:      u64,
}

impl BookingRow {
    pub fn new(taxi: TaxiId, booking: &Booking) -> Self {
        Self {
            taxi_id:     taxi.0,
            booking_id:  booking.booking_id.0,
            customer_id: booking.customer_id.0,
            pickup:      booking.pickup.as_char(),
            drop:        booking.drop.as_char(),
            pickup_time: booking.pickup_time.0,
            drop_time:   booking.drop_time.0,
            amount:      booking.amount,
        }
    }
}
