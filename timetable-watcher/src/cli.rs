//! Command-line arguments.

use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::timetable::TimetableConfig;

/// Check train timetable availability between two stations on a date.
///
/// Every value can be given in position or as an option:
///
///   timetable-watcher paris-gare-du-nord london-st-pancras 2023-12-30 "ES 9047"
///
///   timetable-watcher --start paris-gare-du-nord --dest london-st-pancras --date 2023-12-30
#[derive(Debug, Parser)]
#[command(name = "timetable-watcher", version, about)]
pub struct Args {
    /// START DEST DATE [TRAIN], in that order, skipping any given as options
    #[arg(value_name = "ARGS")]
    pub values: Vec<String>,

    /// Origin station, e.g. paris-gare-du-nord
    #[arg(long)]
    pub start: Option<String>,

    /// Destination station, e.g. london-st-pancras
    #[arg(long)]
    pub dest: Option<String>,

    /// Travel date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Train to highlight, e.g. "ES 9047"
    #[arg(long)]
    pub train: Option<String>,

    /// Override the timetable base URL
    #[arg(long, env = "TIMETABLE_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

/// The four check values, resolved from positions and options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub start: String,
    pub dest: String,
    pub date: NaiveDate,
    pub train: Option<String>,
}

impl Invocation {
    pub fn train(&self) -> Option<&str> {
        self.train.as_deref()
    }
}

impl Args {
    /// Resolve the four check values.
    ///
    /// Positional values fill, in order, whichever of start, dest, date and
    /// train were not given as options. Missing required values and leftover
    /// positionals are usage errors.
    pub fn invocation(&self) -> Result<Invocation, clap::Error> {
        let mut positional = self.values.iter();

        let start = self.start.clone().or_else(|| positional.next().cloned());
        let dest = self.dest.clone().or_else(|| positional.next().cloned());
        let date = match self.date {
            Some(date) => Some(date),
            None => positional
                .next()
                .map(|s| parse_date(s).map_err(|e| usage_error(ErrorKind::ValueValidation, e)))
                .transpose()?,
        };
        let train = self.train.clone().or_else(|| positional.next().cloned());

        if let Some(extra) = positional.next() {
            return Err(usage_error(
                ErrorKind::UnknownArgument,
                format!("unexpected argument `{extra}`"),
            ));
        }

        let (Some(start), Some(dest), Some(date)) = (start, dest, date) else {
            return Err(usage_error(
                ErrorKind::MissingRequiredArgument,
                "START, DEST and DATE are required, in position or as --start/--dest/--date",
            ));
        };

        Ok(Invocation {
            start,
            dest,
            date,
            train,
        })
    }

    /// Client configuration from the flags.
    pub fn timetable_config(&self) -> TimetableConfig {
        let config = TimetableConfig::new().with_timeout(self.timeout_secs);
        match &self.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
}

fn usage_error(kind: ErrorKind, message: impl std::fmt::Display) -> clap::Error {
    Args::command().error(kind, message)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date `{s}`, expected YYYY-MM-DD: {e}"))
}
