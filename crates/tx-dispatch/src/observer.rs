//! Dispatch observer trait for journaling and progress reporting.

use tx_core::TaxiId;
use tx_fleet::Booking;

use crate::BookingRequest;

/// Callbacks invoked by [`Dispatcher::submit`][crate::Dispatcher::submit]
/// after each request is resolved.
///
/// Both methods default to no-ops so implementors only override what they
/// care about.
///
/// # Example
///
/// ```rust
/// use tx_dispatch::{BookingRequest, DispatchObserver};
///
/// struct Rejections(usize);
///
/// impl DispatchObserver for Rejections {
///     fn on_rejected(&mut self, _request: &BookingRequest) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called after `booking` has been committed to `taxi`.
    fn on_allocated(&mut self, _taxi: TaxiId, _booking: &Booking) {}

    /// Called when no taxi was free for `request`.
    fn on_rejected(&mut self, _request: &BookingRequest) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
