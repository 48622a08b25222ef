//! `tx-fleet` — the fleet registry for the `taxi_dispatch` simulator.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`booking`]    | `Booking` (immutable record), `BookingDraft`              |
//! | [`taxi`]       | `Taxi`: location, busy-until hour, earnings, booking log  |
//! | [`registry`]   | `FleetRegistry`, owner of every taxi and the commit step  |
//! | [`builder`]    | `FleetBuilder` (fluent construction)                      |
//! | [`error`]      | `FleetError`, `FleetResult<T>`                            |
//!
//! # Ownership
//!
//! `FleetRegistry` exclusively owns all `Taxi` records and their logs.  Read
//! access is through shared borrows; the single write path is
//! [`FleetRegistry::commit`], which keeps each taxi's location, busy-until
//! hour and earnings in step with its most recent booking.

pub mod booking;
pub mod builder;
pub mod error;
pub mod registry;
pub mod taxi;


pub use booking::{Booking, BookingDraft};
pub use builder::FleetBuilder;
pub use error::{FleetError, FleetResult};
pub use registry::FleetRegistry;
pub use taxi::Taxi;
