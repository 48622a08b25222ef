//! Command-line options.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

pub const USAGE: &str = "\
usage: console [--taxis N] [--config FILE.json] [--script FILE.csv | --random COUNT] [--out DIR]

  --taxis N        fleet size (overrides the config file; asked for if omitted)
  --config FILE    DispatchConfig as JSON
  --script FILE    run the pickup,drop,pickup_time rows of a CSV, then report
  --random COUNT   run COUNT seeded random requests, then report
  --out DIR        write bookings.csv and earnings.csv to DIR";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub taxis:  Option<i64>,
    pub config: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub random: Option<usize>,
    pub out:    Option<PathBuf>,
    pub help:   bool,
}

impl Options {
    /// Parse everything after the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut opts = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            let mut value = || args.next().with_context(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--taxis" => {
                    let v = value()?;
                    opts.taxis = Some(v.parse().with_context(|| format!("--taxis: bad number {v:?}"))?);
                }
                "--random" => {
                    let v = value()?;
                    opts.random = Some(v.parse().with_context(|| format!("--random: bad count {v:?}"))?);
                }
                "--config" => opts.config = Some(value()?.into()),
                "--script" => opts.script = Some(value()?.into()),
                "--out" => opts.out = Some(value()?.into()),
                "-h" | "--help" => opts.help = true,
                other => bail!("unknown argument {other:?}\n\n{USAGE}"),
            }
        }

        if opts.script.is_some() && opts.random.is_some() {
            bail!("--script and --random cannot be combined");
        }
        Ok(opts)
    }

    /// Script or random mode: no prompts.
    pub fn is_batch(&self) -> bool {
        self.script.is_some() || self.random.is_some()
    }
}
