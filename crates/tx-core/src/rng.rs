//! Deterministic simulation-level RNG.
//!
//! Used only by the demo request generator; the dispatch core itself is
//! fully deterministic and never draws random numbers.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Location;

/// Seeded RNG for generating synthetic booking traffic.
///
/// The same seed always yields the same sequence of draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniformly chosen location `A..=F`.
    pub fn location(&mut self) -> Location {
        let n = self.0.gen_range(0..Location::ALL.len());
        Location::ALL[n]
    }

    /// Uniformly chosen location different from `other`.
    pub fn location_other_than(&mut self, other: Location) -> Location {
        let n = self.0.gen_range(0..Location::ALL.len() - 1);
        let pick = Location::ALL[n];
        if pick >= other { Location::ALL[n + 1] } else { pick }
    }
}
