//! Strongly typed, zero-cost identifier wrappers.
//!
//! All ids are 1-based: the first taxi is `TaxiId(1)`, the first customer is
//! `CustomerId(1)`, and the first booking in a taxi's log is `BookingId(1)`.
//! `0` is reserved as the `INVALID` sentinel.  Use `.index()` to get the
//! 0-based slot for indexing into a `Vec`.

use std::fmt;

/// Generate a typed, 1-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(0);

            /// The first id handed out.
            pub const FIRST: $name = $name(1);

            /// 0-based slot for direct use as a `Vec` index.
            ///
            /// # Panics
            /// Panics in debug mode on `INVALID`.
            #[inline(always)]
            pub fn index(self) -> usize {
                (self.0 - 1) as usize
            }

            /// Id for the 0-based slot `index`.
            #[inline(always)]
            pub fn from_index(index: usize) -> $name {
                $name(index as $inner + 1)
            }

            /// The id immediately after `self`.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "{}"), self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0 as u64
            }
        }
    };
}

typed_id! {
    /// Fleet-wide taxi number, assigned at fleet creation.  Displays as `Taxi-N`.
    pub struct TaxiId(u32) => "Taxi-";
}

typed_id! {
    /// Global auto-increment customer number.  Never reused within a run.
    pub struct CustomerId(u32) => "";
}

typed_id! {
    /// Position of a booking within one taxi's log (scoped per taxi).
    pub struct BookingId(u32) => "";
}
