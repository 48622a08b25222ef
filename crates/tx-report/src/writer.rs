//! The `ReportWriter` trait implemented by all export backends.

use crate::{BookingRow, EarningsRow, ReportResult};

/// Trait implemented by the CSV and SQLite writers.
pub trait ReportWriter {
    /// Write one row per taxi.
    fn write_earnings(&mut self, rows: &[EarningsRow]) -> ReportResult<()>;

    /// Write a batch of bookings.
    fn write_bookings(&mut self, rows: &[BookingRow]) -> ReportResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> ReportResult<()>;
}
