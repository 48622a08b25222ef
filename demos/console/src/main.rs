//! console — taxi booking desk for the taxi_dispatch simulator.
//!
//! Interactive by default: asks for the fleet size, then loops over the
//! book / report / exit menu.  With `--script` or `--random` it runs a batch
//! of requests without prompting and prints the final report.
//!
//! Logs go to stderr; set `RUST_LOG` (default `info`) to change the level,
//! e.g. `RUST_LOG=tx_dispatch=debug` to see selection detail.

mod cli;
mod desk;
mod input;


use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tx_core::{DispatchConfig, TaxiId};
use tx_dispatch::{
    BookingRequest, DispatchObserver, Dispatcher, RequestGenerator, load_requests_csv,
};
use tx_fleet::{Booking, FleetRegistry};
use tx_report::{CsvReportWriter, FleetReport, JournalObserver, ReportWriter, render_table};

use cli::{Options, USAGE};
use desk::{outcome_message, run_desk};
use input::{Prompter, parse_int};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Forwards to the booking journal when `--out` is given.
#[derive(Default)]
struct ConsoleObserver {
    journal: Option<JournalObserver<CsvReportWriter>>,
}

impl DispatchObserver for ConsoleObserver {
    fn on_allocated(&mut self, taxi: TaxiId, booking: &Booking) {
        if let Some(journal) = &mut self.journal {
            journal.on_allocated(taxi, booking);
        }
    }

    fn on_rejected(&mut self, request: &BookingRequest) {
        if let Some(journal) = &mut self.journal {
            journal.on_rejected(request);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let opts = Options::parse(std::env::args().skip(1))?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut config = load_config(opts.config.as_deref())?;
    if let Some(taxis) = opts.taxis {
        config.taxi_count = taxis;
    }

    let mut observer = ConsoleObserver::default();
    if let Some(dir) = &opts.out {
        let writer = CsvReportWriter::new(dir)
            .with_context(|| format!("creating report files in {}", dir.display()))?;
        observer.journal = Some(JournalObserver::new(writer));
    }

    let dispatcher = if opts.is_batch() {
        run_batch(&opts, config, &mut observer)?
    } else {
        run_interactive(config, opts.taxis.is_some() || opts.config.is_some(), &mut observer)?
    };

    if let Some(journal) = observer.journal {
        finish_journal(journal, dispatcher.fleet())?;
        if let Some(dir) = &opts.out {
            info!(dir = %dir.display(), "report exported");
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DispatchConfig> {
    let Some(path) = path else {
        return Ok(DispatchConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: DispatchConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), taxis = config.taxi_count, "config loaded");
    Ok(config)
}

// ── Modes ─────────────────────────────────────────────────────────────────────

fn run_interactive(
    mut config:   DispatchConfig,
    size_known:   bool,
    observer:     &mut ConsoleObserver,
) -> Result<Dispatcher> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    if !size_known {
        match prompter.ask("Enter number of taxis: ", parse_int)? {
            Some(n) => config.taxi_count = n,
            None => return Ok(Dispatcher::new(config)?),
        }
    }

    let mut dispatcher = Dispatcher::new(config)?;
    run_desk(&mut dispatcher, &mut prompter, observer)?;
    prompter.into_output().flush()?;
    Ok(dispatcher)
}

fn run_batch(opts: &Options, config: DispatchConfig, observer: &mut ConsoleObserver) -> Result<Dispatcher> {
    let seed = config.seed;
    let mut dispatcher = Dispatcher::new(config)?;

    let requests: Vec<BookingRequest> = match (&opts.script, opts.random) {
        (Some(path), _) => load_requests_csv(path)
            .with_context(|| format!("loading requests from {}", path.display()))?,
        (None, Some(count)) => RequestGenerator::new(seed).take(count).collect(),
        (None, None) => Vec::new(),
    };
    info!(requests = requests.len(), taxis = dispatcher.fleet().len(), "batch run starting");

    let outcomes = dispatcher.submit_all(requests.iter().copied(), observer)?;
    for (request, outcome) in requests.iter().zip(&outcomes) {
        println!("{request}: {}", outcome_message(outcome));
    }
    println!();
    print!("{}", render_table(&FleetReport::generate(dispatcher.fleet())));

    let stats = dispatcher.stats();
    println!(
        "{} requests, {} allocated, {} rejected, fleet earnings Rs.{}",
        stats.requests,
        stats.allocations,
        stats.rejections,
        dispatcher.fleet().total_earnings()
    );
    Ok(dispatcher)
}

/// Surface any journal error, then append the end-of-run earnings.
fn finish_journal(mut journal: JournalObserver<CsvReportWriter>, fleet: &FleetRegistry) -> Result<()> {
    if let Some(e) = journal.take_error() {
        return Err(e).context("writing booking journal");
    }
    let mut writer = journal.into_writer();
    writer.write_earnings(&FleetReport::generate(fleet).earnings_rows())?;
    writer.finish()?;
    Ok(())
}
