//! SQLite export backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the output directory with two
//! tables: `earnings` and `bookings`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{BookingRow, EarningsRow, ReportResult};

/// Writes a fleet report to an SQLite database.
pub struct SqliteReportWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReportWriter {
    /// Open (or create) `report.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS earnings (
                 taxi_id        INTEGER PRIMARY KEY,
                 total_earnings INTEGER NOT NULL,
                 bookings       INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS bookings (
                 taxi_id     INTEGER NOT NULL,
                 booking_id  INTEGER NOT NULL,
                 customer_id INTEGER NOT NULL,
                 pickup      TEXT    NOT NULL,
                 drop_point  TEXT    NOT NULL,
                 pickup_time INTEGER NOT NULL,
                 drop_time   INTEGER NOT NULL,
                 amount      INTEGER NOT NULL,
                 PRIMARY KEY (taxi_id, booking_id)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReportWriter {
    fn write_earnings(&mut self, rows: &[EarningsRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            // Re-exporting a fleet replaces its previous totals.
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO earnings (taxi_id, total_earnings, bookings) \
                 VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.taxi_id,
                    sql_int(row.total_earnings),
                    sql_int(row.bookings),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_bookings(&mut self, rows: &[BookingRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO bookings \
                 (taxi_id, booking_id, customer_id, pickup, drop_point, pickup_time, drop_time, amount) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.taxi_id,
                    row.booking_id,
                    row.customer_id,
                    row.pickup.to_string(),
                    row.drop.to_string(),
                    row.pickup_time,
                    row.drop_time,
                    sql_int(row.amount),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

/// SQLite integers are signed; clamp the (saturating) u64 totals.
fn sql_int(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
