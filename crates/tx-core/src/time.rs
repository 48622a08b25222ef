//! Simulation time model.
//!
//! Time is a signed hour counter.  Callers may supply any integer as a
//! pickup time (negative or non-chronological values included); the core
//! never validates it.  A taxi that has never been booked is free from
//! `Hour::ZERO`.

use std::fmt;

/// An absolute hour on the dispatch clock.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hour(pub i64);

impl Hour {
    pub const ZERO: Hour = Hour(0);

    /// Return the hour `n` steps after `self`, saturating at `i64::MAX`.
    #[inline]
    pub fn offset(self, n: u32) -> Hour {
        Hour(self.0.saturating_add(n as i64))
    }

    /// Return the hour `n` steps after `self`, or `None` past `i64::MAX`.
    #[inline]
    pub fn checked_offset(self, n: u32) -> Option<Hour> {
        self.0.checked_add(n as i64).map(Hour)
    }

    /// Signed hours elapsed from `earlier` to `self`, saturating at the
    /// `i64` bounds.
    #[inline]
    pub fn since(self, earlier: Hour) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u32> for Hour {
    type Output = Hour;
    #[inline]
    fn add(self, rhs: u32) -> Hour {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Hour {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Hour) -> i64 {
        self.since(rhs)
    }
}

impl From<i64> for Hour {
    fn from(h: i64) -> Hour {
        Hour(h)
    }
}

impl From<i32> for Hour {
    fn from(h: i32) -> Hour {
        Hour(h as i64)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
