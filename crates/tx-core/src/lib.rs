//! `tx-core` — foundational types for the `taxi_dispatch` simulator.
//!
//! This crate is a dependency of every other `tx-*` crate.  It has no `tx-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TaxiId`, `CustomerId`, `BookingId`                   |
//! | [`location`]    | `Location` (A..F), ordinal distance                   |
//! | [`time`]        | `Hour`                                                |
//! | [`fare`]        | `FareSchedule` (base fare + per-unit rate)            |
//! | [`config`]      | `DispatchConfig`, `CustomerIdPolicy`                  |
//! | [`rng`]         | `SimRng` (seeded, for demo traffic)                   |
//! | [`error`]       | `TxError`, `TxResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod fare;
pub mod ids;
pub mod location;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CustomerIdPolicy, DispatchConfig};
pub use error::{TxError, TxResult};
pub use fare::FareSchedule;
pub use ids::{BookingId, CustomerId, TaxiId};
pub use location::Location;
pub use rng::SimRng;
pub use time::Hour;
