//! The interactive booking desk: menu loop over a [`Prompter`].

use std::io::{BufRead, Write};

use anyhow::Result;
use tx_dispatch::{
    BookingOutcome, BookingRequest, DispatchError, DispatchObserver, Dispatcher, TaxiSelector,
};
use tx_report::{FleetReport, render_table};

use crate::input::{Prompter, parse_int, parse_location};

const MENU: &str = "\n1. Book Taxi\n2. Display Taxi Details\n3. Exit";

/// What the user sees after a booking attempt.
pub fn outcome_message(outcome: &BookingOutcome) -> String {
    match outcome {
        BookingOutcome::Allocated { taxi, .. } => format!("{taxi} is allocated."),
        BookingOutcome::Rejected => "Booking rejected. No taxis available.".to_owned(),
    }
}

/// Run the menu until the user picks `3` or the input ends.
pub fn run_desk<S, R, W, O>(
    dispatcher: &mut Dispatcher<S>,
    prompter:   &mut Prompter<R, W>,
    observer:   &mut O,
) -> Result<()>
where
    S: TaxiSelector,
    R: BufRead,
    W: Write,
    O: DispatchObserver,
{
    loop {
        writeln!(prompter.output(), "{MENU}")?;
        let Some(choice) = prompter.ask("Enter your choice: ", parse_int)? else {
            return Ok(());
        };

        match choice {
            1 => {
                if !book(dispatcher, prompter, observer)? {
                    return Ok(());
                }
            }
            2 => {
                let table = render_table(&FleetReport::generate(dispatcher.fleet()));
                write!(prompter.output(), "{table}")?;
            }
            3 => {
                writeln!(prompter.output(), "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(prompter.output(), "Invalid choice. Try again.")?,
        }
    }
}

/// Ask for one booking and submit it.  `Ok(false)` if the input ended
/// mid-way; nothing is submitted in that case.
fn book<S, R, W, O>(
    dispatcher: &mut Dispatcher<S>,
    prompter:   &mut Prompter<R, W>,
    observer:   &mut O,
) -> Result<bool>
where
    S: TaxiSelector,
    R: BufRead,
    W: Write,
    O: DispatchObserver,
{
    let Some(pickup) = prompter.ask("Enter Pickup Point (A-F): ", parse_location)? else {
        return Ok(false);
    };
    let Some(drop) = prompter.ask("Enter Drop Point (A-F): ", parse_location)? else {
        return Ok(false);
    };
    let Some(at) = prompter.ask("Enter Pickup Time (in hours, integer): ", parse_int)? else {
        return Ok(false);
    };

    match dispatcher.submit(BookingRequest::new(pickup, drop, at), observer) {
        Ok(outcome) => writeln!(prompter.output(), "{}", outcome_message(&outcome))?,
        Err(DispatchError::HourOverflow { .. }) => {
            writeln!(prompter.output(), "Pickup time too large. Booking rejected.")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(true)
}
