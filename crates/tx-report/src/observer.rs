//! `JournalObserver<W>` — bridges `DispatchObserver` to a `ReportWriter`.

use tx_core::TaxiId;
use tx_dispatch::{BookingRequest, DispatchObserver};
use tx_fleet::Booking;

use crate::row::BookingRow;
use crate::writer::ReportWriter;
use crate::{ReportError, ReportResult};

/// A [`DispatchObserver`] that appends every committed booking to a
/// [`ReportWriter`] as soon as the dispatcher allocates it.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check them with [`take_error`][Self::take_error]
/// once the run is over, or call [`finish`][Self::finish], which reports the
/// first stored error before flushing.
pub struct JournalObserver<W: ReportWriter> {
    writer:     W,
    written:    u64,
    rejected:   u64,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> JournalObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written:    0,
            rejected:   0,
            last_error: None,
        }
    }

    /// Bookings successfully handed to the writer.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Rejected requests seen so far.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Surface any stored error, then finish the writer.
    pub fn finish(&mut self) -> ReportResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to export the end-of-run totals).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> DispatchObserver for JournalObserver<W> {
    fn on_allocated(&mut self, taxi: TaxiId, booking: &Booking) {
        let result = self.writer.write_bookings(&[BookingRow::new(taxi, booking)]);
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_rejected(&mut self, _request: &BookingRequest) {
        self.rejected += 1;
    }
}
