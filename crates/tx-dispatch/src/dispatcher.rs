//! The `Dispatcher` — fleet owner and booking allocator.

use tracing::{info, warn};
use tx_core::{CustomerId, CustomerIdPolicy, DispatchConfig, FareSchedule, Hour, Location};
use tx_fleet::{BookingDraft, FleetRegistry};

use crate::{
    BookingOutcome, BookingRequest, DispatchError, DispatchObserver, DispatchResult,
    DispatchStats, DispatcherBuilder, NearestIdleSelector, NoopObserver, TaxiSelector,
};

/// Owns the fleet and the customer counter, and turns booking requests into
/// committed bookings.
///
/// Construct with [`DispatcherBuilder`] (or [`Dispatcher::initialize`] for
/// the default configuration), then call [`request_booking`][Self::request_booking]
/// once per customer.
pub struct Dispatcher<S: TaxiSelector = NearestIdleSelector> {
    pub(crate) fleet:         FleetRegistry,
    pub(crate) selector:      S,
    pub(crate) fare:          FareSchedule,
    pub(crate) policy:        CustomerIdPolicy,
    pub(crate) next_customer: CustomerId,
    pub(crate) stats:         DispatchStats,
}

impl Dispatcher<NearestIdleSelector> {
    /// A dispatcher with `taxi_count` taxis and every other setting at its
    /// default.  `taxi_count <= 0` yields an empty fleet that rejects every
    /// request.
    pub fn initialize(taxi_count: i64) -> Self {
        Self {
            fleet:         FleetRegistry::initialize(taxi_count),
            selector:      NearestIdleSelector,
            fare:          FareSchedule::default(),
            policy:        CustomerIdPolicy::default(),
            next_customer: CustomerId::FIRST,
            stats:         DispatchStats::default(),
        }
    }

    /// Shorthand for `DispatcherBuilder::new(config).build()`.
    pub fn new(config: DispatchConfig) -> DispatchResult<Self> {
        DispatcherBuilder::new(config).build()
    }
}

impl<S: TaxiSelector> Dispatcher<S> {
    /// Book a taxi from `pickup` to `drop` at `pickup_time`.
    ///
    /// Returns [`BookingOutcome::Rejected`] when no taxi is free at that
    /// hour; nothing is mutated in that case (apart from the customer
    /// counter under [`CustomerIdPolicy::PerRequest`]).
    ///
    /// # Errors
    ///
    /// [`DispatchError::HourOverflow`] if the drop time would pass
    /// `i64::MAX`, or a custom [`TaxiSelector`] returned a taxi that is not
    /// in the fleet or is busy.  Nothing is mutated on error, the customer
    /// counter included.
    pub fn request_booking(
        &mut self,
        pickup:      Location,
        drop:        Location,
        pickup_time: impl Into<Hour>,
    ) -> DispatchResult<BookingOutcome> {
        self.submit(BookingRequest::new(pickup, drop, pickup_time), &mut NoopObserver)
    }

    /// Resolve `request` and report the result to `observer`.
    pub fn submit<O: DispatchObserver>(
        &mut self,
        request:  BookingRequest,
        observer: &mut O,
    ) -> DispatchResult<BookingOutcome> {
        let customer_id = self.next_customer;

        let Some(taxi_id) = self.selector.select(self.fleet.all_taxis(), &request) else {
            warn!(%request, "booking rejected: no taxi available");
            if self.policy == CustomerIdPolicy::PerRequest {
                self.next_customer = customer_id.next();
            }
            let outcome = BookingOutcome::Rejected;
            self.stats.record(&outcome);
            observer.on_rejected(&request);
            return Ok(outcome);
        };

        match self.fleet.taxi(taxi_id) {
            Some(taxi) if !taxi.is_available(request.pickup_time) => {
                return Err(DispatchError::Ineligible { taxi: taxi_id, at: request.pickup_time });
            }
            _ => {}
        }

        let Some(drop_time) = request.drop_time() else {
            return Err(DispatchError::HourOverflow { request });
        };

        let draft = BookingDraft {
            customer_id,
            pickup:      request.pickup,
            drop:        request.drop,
            pickup_time: request.pickup_time,
            drop_time,
            amount:      self.fare.fare(request.pickup, request.drop),
        };

        let booking = *self.fleet.commit(taxi_id, draft)?;
        self.next_customer = customer_id.next();

        info!(
            taxi = %taxi_id,
            customer = %booking.customer_id,
            %request,
            amount = booking.amount,
            drop_time = booking.drop_time.0,
            "taxi allocated"
        );

        let outcome = BookingOutcome::Allocated { taxi: taxi_id, booking };
        self.stats.record(&outcome);
        observer.on_allocated(taxi_id, &booking);
        Ok(outcome)
    }

    /// Submit every request in order, stopping at the first error.
    pub fn submit_all<O, I>(&mut self, requests: I, observer: &mut O) -> DispatchResult<Vec<BookingOutcome>>
    where
        O: DispatchObserver,
        I: IntoIterator<Item = BookingRequest>,
    {
        requests
            .into_iter()
            .map(|request| self.submit(request, observer))
            .collect()
    }

    /// Read-only view of the fleet, for selection snapshots and reporting.
    #[inline]
    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    #[inline]
    pub fn fare(&self) -> &FareSchedule {
        &self.fare
    }

    #[inline]
    pub fn customer_id_policy(&self) -> CustomerIdPolicy {
        self.policy
    }

    /// The customer id the next request (or booking, under
    /// [`CustomerIdPolicy::PerBooking`]) will receive.
    #[inline]
    pub fn next_customer_id(&self) -> CustomerId {
        self.next_customer
    }

    #[inline]
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }
}
