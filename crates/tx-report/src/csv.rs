//! CSV export backend.
//!
//! Creates two files in the output directory:
//! - `earnings.csv`: one row per taxi
//! - `bookings.csv`: one row per committed booking

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{BookingRow, EarningsRow, ReportResult};

/// Writes a fleet report to two CSV files.
pub struct CsvReportWriter {
    earnings: Writer<File>,
    bookings: Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Create the two CSV files in `dir` (truncating any previous run) and
    /// write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut earnings = Writer::from_path(dir.join("earnings.csv"))?;
        earnings.write_record(["taxi_id", "total_earnings", "bookings"])?;

        let mut bookings = Writer::from_path(dir.join("bookings.csv"))?;
        bookings.write_record([
            "taxi_id",
            "booking_id",
            "customer_id",
            "pickup",
            "drop",
            "pickup_time",
            "drop_time",
            "amount",
        ])?;

        Ok(Self {
            earnings,
            bookings,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_earnings(&mut self, rows: &[EarningsRow]) -> ReportResult<()> {
        for row in rows {
            self.earnings.write_record(&[
                row.taxi_id.to_string(),
                row.total_earnings.to_string(),
                row.bookings.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_bookings(&mut self, rows: &[BookingRow]) -> ReportResult<()> {
        for row in rows {
            self.bookings.write_record(&[
                row.taxi_id.to_string(),
                row.booking_id.to_string(),
                row.customer_id.to_string(),
                row.pickup.to_string(),
                row.drop.to_string(),
                row.pickup_time.to_string(),
                row.drop_time.to_string(),
                row.amount.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.earnings.flush()?;
        self.bookings.flush()?;
        Ok(())
    }
}
