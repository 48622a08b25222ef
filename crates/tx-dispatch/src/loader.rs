//! CSV request loader for scripted dispatch runs.
//!
//! # CSV format
//!
//! One row per booking request, submitted in file order.
//!
//! ```csv
//! pickup,drop,pickup_time
//! A,C,0
//! A,B,1
//! D,A,5
//! ```
//!
//! `pickup` and `drop` must be a single letter `A`-`F` (either case).
//! `pickup_time` is any signed integer hour.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tx_core::{Hour, Location};

use crate::{BookingRequest, DispatchError, DispatchResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RequestRecord {
    pickup:      String,
    drop:        String,
    pickup_time: i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load booking requests from a CSV file.
pub fn load_requests_csv(path: &Path) -> DispatchResult<Vec<BookingRequest>> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
pub fn load_requests_reader<R: Read>(reader: R) -> DispatchResult<Vec<BookingRequest>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut requests = Vec::new();

    for (row, result) in csv_reader.deserialize::<RequestRecord>().enumerate() {
        // +2: header is line 1, first record is line 2.
        let line = row + 2;
        let record = result.map_err(|e| DispatchError::Parse(format!("line {line}: {e}")))?;
        requests.push(BookingRequest {
            pickup:      parse_location(&record.pickup, line)?,
            drop:        parse_location(&record.drop, line)?,
            pickup_time: Hour(record.pickup_time),
        });
    }

    Ok(requests)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_location(s: &str, line: usize) -> DispatchResult<Location> {
    s.parse::<Location>()
        .map_err(|e| DispatchError::Parse(format!("line {line}: {e}")))
}
