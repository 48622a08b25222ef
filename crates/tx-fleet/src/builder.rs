//! Fluent builder for constructing a `FleetRegistry`.
//!
//! # Usage
//!
//! ```rust
//! use tx_core::{Location, TaxiId};
//! use tx_fleet::FleetBuilder;
//!
//! let fleet = FleetBuilder::new(3)
//!     .start_location(Location::C)
//!     .build();
//!
//! assert_eq!(fleet.len(), 3);
//! assert_eq!(fleet.taxi(TaxiId(3)).unwrap().current_location(), Location::C);
//! ```

use tx_core::{Location, TaxiId};

use crate::{FleetRegistry, Taxi};

/// Fluent builder for [`FleetRegistry`].
pub struct FleetBuilder {
    count: usize,
    start: Location,
}

impl FleetBuilder {
    /// Create a builder for `count` taxis, parked at `A` by default.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            start: Location::A,
        }
    }

    /// Park every taxi at `start` instead of `A`.
    pub fn start_location(mut self, start: Location) -> Self {
        self.start = start;
        self
    }

    /// Allocate the taxis with ids `1..=count`, each free from hour 0 with
    /// zero earnings and an empty log.
    pub fn build(self) -> FleetRegistry {
        let taxis = (0..self.count)
            .map(|i| Taxi::new(TaxiId::from_index(i), self.start))
            .collect();
        FleetRegistry::from_taxis(taxis)
    }
}
