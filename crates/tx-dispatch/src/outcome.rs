//! Results of a booking request.

use tx_core::TaxiId;
use tx_fleet::Booking;

/// What happened to a booking request.
///
/// Rejection is an ordinary outcome, not an error: the caller tells the
/// customer and may retry with a later pickup hour.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookingOutcome {
    /// `taxi` took the trip; `booking` is the record appended to its log.
    Allocated {
        taxi:    TaxiId,
        booking: Booking,
    },

    /// No taxi was free at the requested hour.  No state changed.
    Rejected,
}

impl BookingOutcome {
    #[inline]
    pub fn is_allocated(&self) -> bool {
        matches!(self, BookingOutcome::Allocated { .. })
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, BookingOutcome::Rejected)
    }

    pub fn taxi(&self) -> Option<TaxiId> {
        match self {
            BookingOutcome::Allocated { taxi, .. } => Some(*taxi),
            BookingOutcome::Rejected => None,
        }
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            BookingOutcome::Allocated { booking, .. } => Some(booking),
            BookingOutcome::Rejected => None,
        }
    }
}

/// Running request counters for one dispatcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub requests:    u64,
    pub allocations: u64,
    pub rejections:  u64,
}

impl DispatchStats {
    pub(crate) fn record(&mut self, outcome: &BookingOutcome) {
        self.requests += 1;
        match outcome {
            BookingOutcome::Allocated { .. } => self.allocations += 1,
            BookingOutcome::Rejected => self.rejections += 1,
        }
    }
}
