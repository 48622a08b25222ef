//! Plain-text rendering of a [`FleetReport`] for the console.

use std::fmt::Write;

use crate::FleetReport;

/// Render `report` as the console table.
///
/// For each taxi:
///
/// ```text
/// Taxi-1 Total Earnings: Rs.120
/// BookingID  CustomerID From  To    PickupTime   DropTime  Amount
/// 1          1          A     C     0            2         120
///
/// ```
///
/// Columns are left-aligned to fixed widths (10, 10, 5, 5, 12, 9, 6) and
/// every taxi section ends with a blank line.  An empty fleet renders as the
/// empty string.
pub fn render_table(report: &FleetReport) -> String {
    let mut out = String::new();
    for taxi in &report.taxis {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} Total Earnings: Rs.{}", taxi.taxi, taxi.total_earnings);
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:<5} {:<5} {:<12} {:<9} {:<6}",
            "BookingID", "CustomerID", "From", "To", "PickupTime", "DropTime", "Amount"
        );
        for b in &taxi.bookings {
            let _ = writeln!(
                out,
                "{:<10} {:<10} {:<5} {:<5} {:<12} {:<9} {:<6}",
                b.booking_id.0,
                b.customer_id.0,
                b.pickup.as_char(),
                b.drop.as_char(),
                b.pickup_time.0,
                b.drop_time.0,
                b.amount
            );
        }
        out.push('\n');
    }
    out
}
