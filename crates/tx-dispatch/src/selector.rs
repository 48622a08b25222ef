//! Taxi selection, the only decision-making step in the allocator.

use tracing::debug;
use tx_core::{Hour, Location, TaxiId};
use tx_fleet::Taxi;

use crate::BookingRequest;

/// Pluggable taxi-selection rule.
///
/// Implementations receive a read-only snapshot of the fleet (in id order)
/// and return the winner's id, or `None` to reject the request.  They must
/// not return a taxi that is busy at `request.pickup_time`; the dispatcher
/// refuses to commit such a pick.
pub trait TaxiSelector {
    fn select(&self, taxis: &[Taxi], request: &BookingRequest) -> Option<TaxiId>;
}

/// The default rule: nearest idle taxi, fewest earnings on a tie, lowest id
/// after that.  See [`select_nearest_idle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestIdleSelector;

impl TaxiSelector for NearestIdleSelector {
    fn select(&self, taxis: &[Taxi], request: &BookingRequest) -> Option<TaxiId> {
        select_nearest_idle(taxis, request.pickup, request.pickup_time)
    }
}

/// Pick the taxi that should serve a pickup at `pickup` at hour `at`.
///
/// Candidates are the taxis with `at >= busy_until`.  Among them the winner
/// minimises, in order:
///
/// 1. `|current_location − pickup|`
/// 2. `total_earnings`
///
/// Remaining ties go to the first taxi in `taxis` order (lowest id), since
/// only a strictly better candidate replaces the current best.
///
/// Returns `None` when no taxi is free at `at`.
pub fn select_nearest_idle(taxis: &[Taxi], pickup: Location, at: Hour) -> Option<TaxiId> {
    let mut best: Option<(&Taxi, u32)> = None;

    for taxi in taxis.iter().filter(|t| t.is_available(at)) {
        let distance = taxi.distance_to(pickup);
        let better = match best {
            None => true,
            Some((current, best_distance)) => {
                distance < best_distance
                    || (distance == best_distance
                        && taxi.total_earnings() < current.total_earnings())
            }
        };
        if better {
            best = Some((taxi, distance));
        }
    }

    if let Some((winner, distance)) = best {
        debug!(
            taxi = %winner.id(),
            distance,
            earnings = winner.total_earnings(),
            %pickup,
            at = at.0,
            "selected taxi"
        );
    }
    best.map(|(taxi, _)| taxi.id())
}
