//! Seeded synthetic booking traffic for demos and soak tests.

use tx_core::{Hour, SimRng};

use crate::BookingRequest;

/// Infinite, deterministic stream of booking requests.
///
/// Pickup and drop are drawn uniformly with `drop != pickup`.  Pickup hours
/// start at `Hour::ZERO` and advance by `0..=max_gap` hours per request, so
/// the stream is chronological.
///
/// ```rust
/// use tx_dispatch::RequestGenerator;
///
/// let a: Vec<_> = RequestGenerator::new(7).take(5).collect();
/// let b: Vec<_> = RequestGenerator::new(7).take(5).collect();
/// assert_eq!(a, b);
/// ```
pub struct RequestGenerator {
    rng:     SimRng,
    clock:   Hour,
    max_gap: u32,
}

impl RequestGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng:     SimRng::new(seed),
            clock:   Hour::ZERO,
            max_gap: 2,
        }
    }

    /// Largest number of hours between consecutive pickups.  Default: 2.
    pub fn max_gap(mut self, max_gap: u32) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// First pickup hour.  Default: 0.
    pub fn starting_at(mut self, start: Hour) -> Self {
        self.clock = start;
        self
    }
}

impl Iterator for RequestGenerator {
    type Item = BookingRequest;

    fn next(&mut self) -> Option<BookingRequest> {
        let pickup = self.rng.location();
        let drop = self.rng.location_other_than(pickup);
        let request = BookingRequest { pickup, drop, pickup_time: self.clock };
        self.clock = self.clock + self.rng.gen_range(0..=self.max_gap);
        Some(request)
    }
}
