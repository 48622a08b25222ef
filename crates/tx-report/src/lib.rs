//! `tx-report` — fleet reports for the `taxi_dispatch` simulator.
//!
//! A [`FleetReport`] is a read-only snapshot of every taxi's earnings and
//! booking log.  It can be rendered as the console table or exported through
//! a [`ReportWriter`] backend:
//!
//! | Feature   | Backend  | Files created                    |
//! |-----------|----------|----------------------------------|
//! | *(none)*  | CSV      | `earnings.csv`, `bookings.csv`   |
//! | `sqlite`  | SQLite   | `report.db`                      |
//!
//! [`JournalObserver`] streams bookings to a writer as they are committed,
//! instead of waiting for the end-of-run report.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tx_report::{CsvReportWriter, FleetReport, render_table};
//!
//! let report = FleetReport::generate(dispatcher.fleet());
//! print!("{}", render_table(&report));
//!
//! let mut writer = CsvReportWriter::new(Path::new("./out"))?;
//! report.write_to(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod table;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use crate::csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use observer::JournalObserver;
pub use report::{FleetReport, TaxiReport};
pub use row::{BookingRow, EarningsRow};
pub use table::render_table;
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReportWriter;
