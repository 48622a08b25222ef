//! Dispatch run configuration.
//!
//! Typically built from defaults or loaded from a JSON file by the console
//! application and handed to `tx_dispatch::DispatcherBuilder`.

use crate::{FareSchedule, Location, TxError, TxResult};

/// When the global customer counter advances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CustomerIdPolicy {
    /// Only committed bookings consume a customer id.  Customer ids in the
    /// booking logs are gap-free.
    #[default]
    PerBooking,
    /// Every request consumes a customer id, rejected or not.  Rejections
    /// leave gaps in the sequence.
    PerRequest,
}

/// Top-level dispatch configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Number of taxis created at start-up.  `<= 0` yields an empty fleet
    /// that rejects every booking.
    pub taxi_count: i64,

    /// Where every taxi starts.  Default: `A`.
    pub start_location: Location,

    pub fare: FareSchedule,

    pub customer_id_policy: CustomerIdPolicy,

    /// Seed for the demo request generator.  The same seed always produces
    /// the same request stream.
    pub seed: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            taxi_count:         4,
            start_location:     Location::A,
            fare:               FareSchedule::default(),
            customer_id_policy: CustomerIdPolicy::default(),
            seed:               42,
        }
    }
}

impl DispatchConfig {
    pub fn with_taxi_count(taxi_count: i64) -> Self {
        Self { taxi_count, ..Self::default() }
    }

    /// Reject fare schedules whose longest trip does not fit in a `u64`.
    pub fn validate(&self) -> TxResult<()> {
        let longest = Location::A.distance_to(Location::F) as u64;
        self.fare
            .per_unit
            .checked_mul(longest)
            .and_then(|v| v.checked_add(self.fare.base_fare))
            .map(|_| ())
            .ok_or_else(|| {
                TxError::Config(format!(
                    "fare schedule overflows: base_fare={} per_unit={}",
                    self.fare.base_fare, self.fare.per_unit
                ))
            })
    }

    /// Number of taxis to create, clamped at zero.
    pub fn fleet_size(&self) -> usize {
        self.taxi_count.max(0) as usize
    }
}
