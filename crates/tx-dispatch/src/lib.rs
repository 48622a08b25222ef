//! `tx-dispatch` — the booking allocator for the `taxi_dispatch` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`request`]     | `BookingRequest` (pickup, drop, pickup hour)                 |
//! | [`selector`]    | `TaxiSelector` trait, `NearestIdleSelector`, `select_nearest_idle` |
//! | [`outcome`]     | `BookingOutcome` (`Allocated` / `Rejected`), `DispatchStats` |
//! | [`observer`]    | `DispatchObserver` trait, `NoopObserver`                     |
//! | [`dispatcher`]  | `Dispatcher<S>`: owns the fleet, prices and commits bookings |
//! | [`builder`]     | `DispatcherBuilder` (fluent construction from `DispatchConfig`) |
//! | [`loader`]      | CSV request loader for scripted runs                         |
//! | [`generator`]   | `RequestGenerator`: seeded synthetic request stream          |
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                         |
//!
//! # Request flow
//!
//! ```text
//! request_booking(pickup, drop, at):
//!   ① Select  — pure scan over fleet.all_taxis(): eligible iff at >= busy_until,
//!               minimise distance to pickup, then earnings, then id.
//!   ② Price   — drop_time = at + |drop − pickup|,
//!               amount    = base_fare + per_unit × |drop − pickup|.
//!   ③ Commit  — FleetRegistry::commit appends the booking and moves the taxi.
//! ```
//!
//! Selection and commit happen inside one `&mut self` call, so two requests
//! can never both select the same taxi before either commits.
//!
//! # Quick-start
//!
//! ```rust
//! use tx_core::{Location, TaxiId};
//! use tx_dispatch::{BookingOutcome, Dispatcher};
//!
//! let mut dispatcher = Dispatcher::initialize(2);
//! let outcome = dispatcher.request_booking(Location::A, Location::C, 0).unwrap();
//! assert_eq!(outcome.taxi(), Some(TaxiId(1)));
//! assert_eq!(outcome.booking().map(|b| b.amount), Some(120));
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod loader;
pub mod observer;
pub mod outcome;
pub mod request;
pub mod selector;

#[cfg(test)]
mod tests;

pub use builder::DispatcherBuilder;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use generator::RequestGenerator;
pub use loader::{load_requests_csv, load_requests_reader};
pub use observer::{DispatchObserver, NoopObserver};
pub use outcome::{BookingOutcome, DispatchStats};
pub use request::BookingRequest;
pub use selector::{NearestIdleSelector, TaxiSelector, select_nearest_idle};
