//! `FleetReport` — a read-only snapshot of the fleet for display and export.

use tx_core::TaxiId;
use tx_fleet::{Booking, FleetRegistry};

use crate::writer::ReportWriter;
use crate::{BookingRow, EarningsRow, ReportResult};

/// One taxi's section of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxiReport {
    pub taxi:           TaxiId,
    pub total_earnings: u64,
    /// In append order; `booking_id` runs 1..=len.
    pub bookings:       Vec<Booking>,
}

/// Every taxi in id order, with its earnings and booking log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetReport {
    pub taxis: Vec<TaxiReport>,
}

impl FleetReport {
    /// Snapshot `fleet`.  Pure read; the registry is not touched.
    pub fn generate(fleet: &FleetRegistry) -> Self {
        let taxis = fleet
            .all_taxis()
            .iter()
            .map(|taxi| TaxiReport {
                taxi:           taxi.id(),
                total_earnings: taxi.total_earnings(),
                bookings:       taxi.bookings().to_vec(),
            })
            .collect();
        Self { taxis }
    }

    pub fn is_empty(&self) -> bool {
        self.taxis.is_empty()
    }

    /// Sum of every taxi's earnings (saturating).
    pub fn total_earnings(&self) -> u64 {
        self.taxis
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.total_earnings))
    }

    pub fn booking_count(&self) -> usize {
        self.taxis.iter().map(|t| t.bookings.len()).sum()
    }

    pub fn earnings_rows(&self) -> Vec<EarningsRow> {
        self.taxis
            .iter()
            .map(|t| EarningsRow {
                taxi_id:        t.taxi.0,
                total_earnings: t.total_earnings,
                bookings:       t.bookings.len() as u64,
            })
            .collect()
    }

    /// All bookings, grouped by taxi in id order.
    pub fn booking_rows(&self) -> Vec<BookingRow> {
        self.taxis
            .iter()
            .flat_map(|t| t.bookings.iter().map(move |b| BookingRow::new(t.taxi, b)))
            .collect()
    }

    /// Export the whole report through `writer` and finish it.
    pub fn write_to<W: ReportWriter>(&self, writer: &mut W) -> ReportResult<()> {
        writer.write_earnings(&self.earnings_rows())?;
        writer.write_bookings(&self.booking_rows())?;
        writer.finish()
    }
}
