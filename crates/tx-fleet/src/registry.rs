//! The `FleetRegistry`: every taxi and its booking log.

use tracing::{debug, warn};
use tx_core::TaxiId;

use crate::{Booking, BookingDraft, FleetBuilder, FleetError, FleetResult, Taxi};

/// Ordered collection of taxis, indexed by `TaxiId`.
///
/// `taxis[id.index()]` is the taxi with that id; ids run `1..=len()` with no
/// gaps.  The registry is built once per dispatch run and never grows or
/// shrinks afterwards.
#[derive(Debug, Clone, Default)]
pub struct FleetRegistry {
    taxis: Vec<Taxi>,
}

impl FleetRegistry {
    /// Create `n` taxis with ids `1..=n`, all parked at `A`, free from hour 0.
    ///
    /// `n <= 0` creates no taxis; every later booking will be rejected.
    pub fn initialize(n: i64) -> Self {
        if n <= 0 {
            warn!(taxi_count = n, "fleet initialised with no taxis; all bookings will be rejected");
            return Self::default();
        }
        FleetBuilder::new(n as usize).build()
    }

    pub(crate) fn from_taxis(taxis: Vec<Taxi>) -> Self {
        Self { taxis }
    }

    /// Every taxi in id order.  No filtering.
    #[inline]
    pub fn all_taxis(&self) -> &[Taxi] {
        &self.taxis
    }

    /// The taxi with `id`, or `None` if it is not part of the fleet.
    pub fn taxi(&self, id: TaxiId) -> Option<&Taxi> {
        if !id.is_valid() {
            return None;
        }
        self.taxis.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.taxis.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.taxis.is_empty()
    }

    /// Iterator over all `TaxiId`s in ascending order.
    pub fn taxi_ids(&self) -> impl Iterator<Item = TaxiId> + '_ {
        (0..self.taxis.len()).map(TaxiId::from_index)
    }

    /// Sum of every taxi's earnings.
    pub fn total_earnings(&self) -> u64 {
        self.taxis.iter().map(Taxi::total_earnings).fold(0, u64::saturating_add)
    }

    /// Total committed bookings across the fleet.
    pub fn booking_count(&self) -> usize {
        self.taxis.iter().map(|t| t.bookings().len()).sum()
    }

    /// Commit `draft` to taxi `id`.
    ///
    /// Assigns the per-taxi booking id (`log length + 1`), appends the
    /// booking, adds its amount to the taxi's earnings, and moves the taxi to
    /// `draft.drop`, busy until `draft.drop_time`.
    ///
    /// # Errors
    ///
    /// [`FleetError::UnknownTaxi`] if `id` is not in the fleet.  Nothing is
    /// mutated in that case.
    pub fn commit(&mut self, id: TaxiId, draft: BookingDraft) -> FleetResult<&Booking> {
        if !id.is_valid() || id.index() >= self.taxis.len() {
            return Err(FleetError::UnknownTaxi(id));
        }
        let taxi = &mut self.taxis[id.index()];
        let booking = taxi.record(draft);
        debug!(
            taxi = %id,
            booking_id = %booking.booking_id,
            location = %booking.drop,
            busy_until = %booking.drop_time,
            "booking committed"
        );
        Ok(booking)
    }
}
