//! Unit and scenario tests for tx-dispatch.

use tx_core::{CustomerId, CustomerIdPolicy, DispatchConfig, Hour, Location, TaxiId};
use tx_fleet::{Booking, Taxi};

use crate::{
    BookingOutcome, BookingRequest, DispatchObserver, Dispatcher, DispatcherBuilder, NoopObserver,
};

use Location::{A, B, C, D, E, F};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn allocated(outcome: BookingOutcome) -> (TaxiId, Booking) {
    match outcome {
        BookingOutcome::Allocated { taxi, booking } => (taxi, booking),
        BookingOutcome::Rejected => panic!("expected an allocation, got a rejection"),
    }
}

fn book(d: &mut Dispatcher, pickup: Location, drop: Location, at: i64) -> BookingOutcome {
    d.request_booking(pickup, drop, at).unwrap()
}

fn with_policy(taxis: i64, policy: CustomerIdPolicy) -> Dispatcher {
    DispatcherBuilder::new(DispatchConfig {
        taxi_count: taxis,
        customer_id_policy: policy,
        ..DispatchConfig::default()
    })
    .build()
    .unwrap()
}

/// Observable per-taxi state, for before/after comparisons.
fn snapshot(taxis: &[Taxi]) -> Vec<(Location, Hour, u64, usize)> {
    taxis
        .iter()
        .map(|t| (t.current_location(), t.busy_until(), t.total_earnings(), t.bookings().len()))
        .collect()
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn first_booking_goes_to_lowest_id() {
        let mut d = Dispatcher::initialize(2);
        let (taxi, booking) = allocated(book(&mut d, A, C, 0));

        assert_eq!(taxi, TaxiId(1));
        assert_eq!(booking.amount, 120);
        assert_eq!(booking.drop_time, Hour(2));
        assert_eq!(booking.booking_id.0, 1);
        assert_eq!(booking.customer_id, CustomerId(1));

        let t1 = d.fleet().taxi(TaxiId(1)).unwrap();
        assert_eq!(t1.current_location(), C);
        assert_eq!(t1.busy_until(), Hour(2));
    }

    #[test]
    fn busy_taxi_is_skipped() {
        let mut d = Dispatcher::initialize(2);
        let _ = book(&mut d, A, C, 0);
        let (taxi, booking) = allocated(book(&mut d, A, B, 1));

        assert_eq!(taxi, TaxiId(2));
        assert_eq!(booking.amount, 110);
        assert_eq!(booking.drop_time, Hour(2));
        assert_eq!(booking.customer_id, CustomerId(2));
    }

    #[test]
    fn single_busy_taxi_rejects() {
        let mut d = Dispatcher::initialize(1);
        let (_, first) = allocated(book(&mut d, D, A, 5));
        assert_eq!(first.drop_time, Hour(8));

        let outcome = book(&mut d, A, F, 3);
        assert_eq!(outcome, BookingOutcome::Rejected);
        assert!(outcome.taxi().is_none());
        assert!(outcome.booking().is_none());
    }

    #[test]
    fn taxi_free_again_at_drop_time() {
        let mut d = Dispatcher::initialize(1);
        let _ = book(&mut d, D, A, 5);
        assert!(book(&mut d, A, F, 7).is_rejected());
        assert!(book(&mut d, A, F, 8).is_allocated());
    }
}

// ── Selection rule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;
    use crate::select_nearest_idle;

    #[test]
    fn nearest_wins_over_lower_earnings() {
        let mut d = Dispatcher::initialize(2);
        let _ = book(&mut d, A, C, 0); // Taxi-1 → C, 120
        let _ = book(&mut d, A, E, 0); // Taxi-2 → E, 140

        // F is 3 from C and 1 from E.
        let (taxi, _) = allocated(book(&mut d, F, A, 10));
        assert_eq!(taxi, TaxiId(2));
    }

    #[test]
    fn equal_distance_prefers_lower_earnings() {
        let mut d = Dispatcher::initialize(2);
        let _ = book(&mut d, A, C, 0); // Taxi-1 → C, 120
        let _ = book(&mut d, A, E, 0); // Taxi-2 → E, 140

        // D is 1 from both.
        let (taxi, _) = allocated(book(&mut d, D, A, 10));
        assert_eq!(taxi, TaxiId(1));
    }

    #[test]
    fn lower_earnings_beats_lower_id() {
        let mut d = Dispatcher::initialize(2);
        let _ = book(&mut d, A, F, 0); // Taxi-1 → F, 150
        let _ = book(&mut d, A, B, 0); // Taxi-2 → B, 110

        // D is 2 from both F and B.
        let (taxi, _) = allocated(book(&mut d, D, A, 10));
        assert_eq!(taxi, TaxiId(2));
    }

    #[test]
    fn full_tie_goes_to_lowest_id() {
        let mut d = Dispatcher::initialize(3);
        let _ = book(&mut d, A, C, 0);
        let _ = book(&mut d, A, C, 0);
        let _ = book(&mut d, A, C, 0);
        for t in d.fleet().all_taxis() {
            assert_eq!((t.current_location(), t.total_earnings()), (C, 120));
        }
        let (taxi, _) = allocated(book(&mut d, C, A, 5));
        assert_eq!(taxi, TaxiId(1));
    }

    #[test]
    fn pure_selection_does_not_mutate() {
        let d = Dispatcher::initialize(3);
        let before = snapshot(d.fleet().all_taxis());
        assert_eq!(select_nearest_idle(d.fleet().all_taxis(), B, Hour(0)), Some(TaxiId(1)));
        assert_eq!(snapshot(d.fleet().all_taxis()), before);
    }

    #[test]
    fn empty_snapshot_selects_nothing() {
        assert_eq!(select_nearest_idle(&[], A, Hour(0)), None);
    }

    #[test]
    fn negative_hour_finds_no_fresh_taxi() {
        let mut d = Dispatcher::initialize(2);
        assert!(book(&mut d, A, B, -1).is_rejected());
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;
    use crate::{DispatchError, RequestGenerator};

    #[test]
    fn fare_and_drop_time_follow_trip_distance() {
        let mut d = Dispatcher::initialize(1);
        let mut at = 0;
        for pickup in Location::ALL {
            for drop in Location::ALL {
                // Ten hours apart, so the single taxi is always free again.
                let (_, b) = allocated(book(&mut d, pickup, drop, at));
                let distance = pickup.distance_to(drop);
                assert_eq!(b.drop_time - b.pickup_time, distance as i64);
                assert_eq!(b.amount, 100 + 10 * distance as u64);
                at += 10;
            }
        }
        assert_eq!(d.fleet().booking_count(), 36);
    }

    #[test]
    fn rejection_mutates_nothing() {
        let mut d = Dispatcher::initialize(2);
        let _ = book(&mut d, A, F, 10);
        let _ = book(&mut d, A, F, 10);
        let before = snapshot(d.fleet().all_taxis());
        let next_customer = d.next_customer_id();

        for at in [-100, 0, 11, 14] {
            assert!(book(&mut d, C, D, at).is_rejected());
        }
        assert_eq!(snapshot(d.fleet().all_taxis()), before);
        assert_eq!(d.next_customer_id(), next_customer);
    }

    #[test]
    fn busy_until_is_monotonic_and_state_tracks_log() {
        let mut d = Dispatcher::initialize(3);
        let mut last_busy = vec![Hour(i64::MIN); 3];

        for request in RequestGenerator::new(99).max_gap(1).take(300) {
            let outcome = d.submit(request, &mut NoopObserver).unwrap();
            if let BookingOutcome::Allocated { taxi, booking } = outcome {
                let t = d.fleet().taxi(taxi).unwrap();
                assert!(t.busy_until() >= last_busy[taxi.index()]);
                last_busy[taxi.index()] = t.busy_until();

                assert_eq!(t.current_location(), booking.drop);
                assert_eq!(t.busy_until(), booking.drop_time);
                assert_eq!(t.bookings().last(), Some(&booking));
                assert_eq!(t.total_earnings(), t.bookings().iter().map(|b| b.amount).sum::<u64>());
            }
        }
        assert!(d.stats().allocations > 0);
    }

    #[test]
    fn drop_time_past_last_hour_is_refused() {
        let mut d = Dispatcher::initialize(1);
        let before = snapshot(d.fleet().all_taxis());

        let err = d.request_booking(A, F, i64::MAX - 1).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::HourOverflow { request } if request.pickup_time == Hour(i64::MAX - 1)
        ));
        assert_eq!(snapshot(d.fleet().all_taxis()), before);
        assert_eq!(d.next_customer_id(), CustomerId(1));
        assert_eq!(d.stats().requests, 0);
    }

    #[test]
    fn drop_time_exact_at_last_hour() {
        let mut d = Dispatcher::initialize(1);
        let (_, b) = allocated(book(&mut d, A, F, i64::MAX - 5));
        assert_eq!(b.drop_time, Hour(i64::MAX));
        assert_eq!(b.drop_time - b.pickup_time, 5);

        // Zero-length trip at the very last hour still fits.
        let (_, b) = allocated(book(&mut d, F, F, i64::MAX));
        assert_eq!(b.drop_time, Hour(i64::MAX));
    }

    #[test]
    fn empty_fleet_rejects_everything() {
        for n in [0, -3] {
            let mut d = Dispatcher::initialize(n);
            assert!(d.fleet().is_empty());
            assert!(book(&mut d, A, B, 0).is_rejected());
            assert!(book(&mut d, A, B, 1_000).is_rejected());
        }
    }

    #[test]
    fn stats_count_outcomes() {
        let mut d = Dispatcher::initialize(1);
        let _ = book(&mut d, A, C, 0);
        let _ = book(&mut d, A, C, 1);
        let _ = book(&mut d, C, A, 2);
        let stats = d.stats();
        assert_eq!(stats.requests, 3);
        assert_eq!(stats.allocations, 2);
        assert_eq!(stats.rejections, 1);
    }
}

// ── Customer-id policy ────────────────────────────────────────────────────────

#[cfg(test)]
mod customer_id_tests {
    use super::*;

    #[test]
    fn per_booking_skips_rejections() {
        let mut d = with_policy(1, CustomerIdPolicy::PerBooking);
        let _ = book(&mut d, D, A, 5);
        assert!(book(&mut d, A, F, 3).is_rejected());
        let (_, b) = allocated(book(&mut d, A, F, 8));
        assert_eq!(b.customer_id, CustomerId(2));
        assert_eq!(d.next_customer_id(), CustomerId(3));
    }

    #[test]
    fn per_request_consumes_on_rejection() {
        let mut d = with_policy(1, CustomerIdPolicy::PerRequest);
        let (_, first) = allocated(book(&mut d, D, A, 5));
        assert_eq!(first.customer_id, CustomerId(1));
        assert!(book(&mut d, A, F, 3).is_rejected());
        let (_, b) = allocated(book(&mut d, A, F, 8));
        assert_eq!(b.customer_id, CustomerId(3));
    }

    #[test]
    fn customer_ids_are_global_across_taxis() {
        let mut d = Dispatcher::initialize(2);
        let (_, b1) = allocated(book(&mut d, A, C, 0));
        let (_, b2) = allocated(book(&mut d, A, C, 0));
        assert_eq!(b1.customer_id, CustomerId(1));
        assert_eq!(b2.customer_id, CustomerId(2));
        // ...while booking ids restart per taxi.
        assert_eq!(b1.booking_id, b2.booking_id);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::DispatchError;
    use tx_core::FareSchedule;

    #[test]
    fn start_location_from_config() {
        let d = Dispatcher::new(DispatchConfig {
            taxi_count: 2,
            start_location: D,
            ..DispatchConfig::default()
        })
        .unwrap();
        assert!(d.fleet().all_taxis().iter().all(|t| t.current_location() == D));
    }

    #[test]
    fn custom_fare_applies() {
        let mut d = DispatcherBuilder::new(DispatchConfig::with_taxi_count(1))
            .fare(FareSchedule::new(50, 5))
            .build()
            .unwrap();
        let (_, b) = allocated(book(&mut d, A, F, 0));
        assert_eq!(b.amount, 75);
    }

    #[test]
    fn overflowing_fare_is_config_error() {
        let result = DispatcherBuilder::new(DispatchConfig::with_taxi_count(1))
            .fare(FareSchedule::new(1, u64::MAX))
            .build();
        assert!(matches!(result, Err(DispatchError::Config(_))));
    }

    #[test]
    fn non_positive_count_builds_empty_fleet() {
        let d = Dispatcher::new(DispatchConfig::with_taxi_count(0)).unwrap();
        assert!(d.fleet().is_empty());
    }
}

// ── Custom selectors ──────────────────────────────────────────────────────────

#[cfg(test)]
mod selector_tests {
    use super::*;
    use crate::{DispatchError, TaxiSelector};
    use tx_fleet::FleetError;

    /// Always picks the same taxi, busy or not.
    struct Always(TaxiId);

    impl TaxiSelector for Always {
        fn select(&self, _taxis: &[Taxi], _request: &BookingRequest) -> Option<TaxiId> {
            Some(self.0)
        }
    }

    fn dispatcher(pick: TaxiId) -> Dispatcher<Always> {
        DispatcherBuilder::new(DispatchConfig::with_taxi_count(2))
            .selector(Always(pick))
            .build()
            .unwrap()
    }

    #[test]
    fn unknown_taxi_is_fleet_error() {
        let mut d = dispatcher(TaxiId(9));
        let err = d.request_booking(A, B, 0).unwrap_err();
        assert!(matches!(err, DispatchError::Fleet(FleetError::UnknownTaxi(TaxiId(9)))));
        assert_eq!(d.next_customer_id(), CustomerId(1));
    }

    #[test]
    fn busy_pick_is_refused_without_mutation() {
        let mut d = dispatcher(TaxiId(1));
        assert!(d.request_booking(A, F, 0).unwrap().is_allocated());
        let before = snapshot(d.fleet().all_taxis());

        let err = d.request_booking(A, B, 1).unwrap_err();
        assert!(matches!(err, DispatchError::Ineligible { taxi: TaxiId(1), at: Hour(1) }));
        assert_eq!(snapshot(d.fleet().all_taxis()), before);
    }

    #[test]
    fn per_request_counter_untouched_by_errors() {
        let mut d = DispatcherBuilder::new(DispatchConfig {
            taxi_count:         2,
            customer_id_policy: CustomerIdPolicy::PerRequest,
            ..DispatchConfig::default()
        })
        .selector(Always(TaxiId(1)))
        .build()
        .unwrap();

        assert!(d.request_booking(A, F, 0).unwrap().is_allocated());
        assert_eq!(d.next_customer_id(), CustomerId(2));

        // Busy pick, then an overflowing drop time: neither consumes an id.
        assert!(matches!(d.request_booking(A, B, 1), Err(DispatchError::Ineligible { .. })));
        assert!(matches!(
            d.request_booking(A, B, i64::MAX),
            Err(DispatchError::HourOverflow { .. })
        ));
        assert_eq!(d.next_customer_id(), CustomerId(2));

        let (_, b) = allocated(d.request_booking(A, B, 5).unwrap());
        assert_eq!(b.customer_id, CustomerId(2));
    }

    #[test]
    fn per_request_counter_untouched_by_unknown_taxi() {
        let mut d = DispatcherBuilder::new(DispatchConfig {
            taxi_count:         1,
            customer_id_policy: CustomerIdPolicy::PerRequest,
            ..DispatchConfig::default()
        })
        .selector(Always(TaxiId(4)))
        .build()
        .unwrap();

        assert!(matches!(d.request_booking(A, B, 0), Err(DispatchError::Fleet(_))));
        assert_eq!(d.next_customer_id(), CustomerId(1));
    }

    #[test]
    fn default_selector_is_nearest_idle() {
        let d = Dispatcher::initialize(1);
        let request = BookingRequest::new(A, B, 0);
        assert_eq!(d.selector().select(d.fleet().all_taxis(), &request), Some(TaxiId(1)));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        allocated: Vec<(TaxiId, CustomerId)>,
        rejected:  Vec<BookingRequest>,
    }

    impl DispatchObserver for Recorder {
        fn on_allocated(&mut self, taxi: TaxiId, booking: &Booking) {
            self.allocated.push((taxi, booking.customer_id));
        }

        fn on_rejected(&mut self, request: &BookingRequest) {
            self.rejected.push(*request);
        }
    }

    #[test]
    fn observer_sees_every_outcome() {
        let mut d = Dispatcher::initialize(1);
        let mut rec = Recorder::default();
        let requests = [
            BookingRequest::new(A, C, 0),
            BookingRequest::new(A, B, 1),
            BookingRequest::new(C, A, 2),
        ];
        let outcomes = d.submit_all(requests, &mut rec).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(rec.allocated, [(TaxiId(1), CustomerId(1)), (TaxiId(1), CustomerId(2))]);
        assert_eq!(rec.rejected, [BookingRequest::new(A, B, 1)]);
    }
}

// ── Request loader ────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{DispatchError, load_requests_reader};

    #[test]
    fn loads_rows_in_order() {
        let csv = "pickup,drop,pickup_time\nA,C,0\nb,a,-4\nF,F,12\n";
        let requests = load_requests_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            requests,
            [
                BookingRequest::new(A, C, 0),
                BookingRequest::new(B, A, -4),
                BookingRequest::new(F, F, 12),
            ]
        );
    }

    #[test]
    fn header_only_is_empty() {
        let requests = load_requests_reader(Cursor::new("pickup,drop,pickup_time\n")).unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn bad_location_reports_line() {
        let csv = "pickup,drop,pickup_time\nA,C,0\nA,G,1\n";
        match load_requests_reader(Cursor::new(csv)) {
            Err(DispatchError::Parse(msg)) => assert!(msg.starts_with("line 3"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_hour_is_parse_error() {
        let csv = "pickup,drop,pickup_time\nA,C,soon\n";
        assert!(matches!(
            load_requests_reader(Cursor::new(csv)),
            Err(DispatchError::Parse(_))
        ));
    }

    #[test]
    fn scripted_run_matches_interactive() {
        let csv = "pickup,drop,pickup_time\nA,C,0\nA,B,1\n";
        let requests = load_requests_reader(Cursor::new(csv)).unwrap();
        let mut d = Dispatcher::initialize(2);
        let outcomes = d.submit_all(requests, &mut NoopObserver).unwrap();
        assert_eq!(outcomes[0].taxi(), Some(TaxiId(1)));
        assert_eq!(outcomes[1].taxi(), Some(TaxiId(2)));
    }
}

// ── Request generator ─────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::RequestGenerator;

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = RequestGenerator::new(1).take(50).collect();
        let b: Vec<_> = RequestGenerator::new(1).take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn hours_non_decreasing_and_trips_non_empty() {
        let requests: Vec<_> = RequestGenerator::new(5)
            .starting_at(Hour(10))
            .max_gap(3)
            .take(200)
            .collect();
        assert_eq!(requests[0].pickup_time, Hour(10));
        for pair in requests.windows(2) {
            let gap = pair[1].pickup_time - pair[0].pickup_time;
            assert!((0..=3).contains(&gap));
        }
        assert!(requests.iter().all(|r| r.pickup != r.drop));
    }
}
