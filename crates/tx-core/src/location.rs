//! The six pickup/drop points served by the fleet.
//!
//! Locations sit on a single line, `A` through `F`.  Distance between two
//! locations is the absolute difference of their ordinals; there is no road
//! network.

use std::fmt;
use std::str::FromStr;

use crate::TxError;

/// One of the six discrete points `A..=F`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// Every taxi starts here.
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Location {
    /// All locations in ordinal order.
    pub const ALL: [Location; 6] = [
        Location::A,
        Location::B,
        Location::C,
        Location::D,
        Location::E,
        Location::F,
    ];

    /// Position on the line, `A = 0` .. `F = 5`.
    #[inline]
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Ordinal distance `|self − other|`.
    #[inline]
    pub fn distance_to(self, other: Location) -> u32 {
        self.ordinal().abs_diff(other.ordinal())
    }

    /// Location at ordinal `n`, or `None` past `F`.
    pub fn from_ordinal(n: u32) -> Option<Location> {
        Self::ALL.get(n as usize).copied()
    }

    pub fn as_char(self) -> char {
        match self {
            Location::A => 'A',
            Location::B => 'B',
            Location::C => 'C',
            Location::D => 'D',
            Location::E => 'E',
            Location::F => 'F',
        }
    }
}

impl TryFrom<char> for Location {
    type Error = TxError;

    fn try_from(c: char) -> Result<Location, TxError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Location::A),
            'B' => Ok(Location::B),
            'C' => Ok(Location::C),
            'D' => Ok(Location::D),
            'E' => Ok(Location::E),
            'F' => Ok(Location::F),
            _ => Err(TxError::InvalidLocation(c.to_string())),
        }
    }
}

impl FromStr for Location {
    type Err = TxError;

    /// Accepts exactly one character `A`-`F` (either case) after trimming.
    /// `"F."`, `"AB"` and `""` are all rejected.
    fn from_str(s: &str) -> Result<Location, TxError> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Location::try_from(c)
                .map_err(|_| TxError::InvalidLocation(s.to_owned())),
            _ => Err(TxError::InvalidLocation(s.to_owned())),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
