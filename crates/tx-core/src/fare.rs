//! Fare model: flat base fare plus a per-unit-distance rate.
//!
//! Only the trip length (`pickup → drop`) is charged; the distance the taxi
//! drives to reach the pickup is free.

use crate::Location;

/// Base fare charged on every trip, in rupees.
pub const BASE_FARE: u64 = 100;

/// Rate per unit of ordinal distance, in rupees.
pub const PER_UNIT_RATE: u64 = 10;

/// Pricing parameters for a dispatch run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FareSchedule {
    pub base_fare: u64,
    pub per_unit:  u64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            per_unit:  PER_UNIT_RATE,
        }
    }
}

impl FareSchedule {
    pub fn new(base_fare: u64, per_unit: u64) -> Self {
        Self { base_fare, per_unit }
    }

    /// `base_fare + per_unit × |drop − pickup|`.
    #[inline]
    pub fn fare(&self, pickup: Location, drop: Location) -> u64 {
        self.fare_for_distance(pickup.distance_to(drop))
    }

    #[inline]
    pub fn fare_for_distance(&self, distance: u32) -> u64 {
        self.base_fare.saturating_add(self.per_unit.saturating_mul(distance as u64))
    }

    /// Most expensive possible trip (`A → F`).
    pub fn max_fare(&self) -> u64 {
        self.fare(Location::A, Location::F)
    }
}
