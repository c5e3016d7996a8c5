//! The timetable check pipeline.
//!
//! Stages run strictly forward: validate stations, fetch the page, extract
//! cards, render and print. Validation failures stop the run before any
//! network activity; a failed fetch prints nothing.

use std::io::Write;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::Query;
use crate::error::WatchError;
use crate::render::{extract_entries, render};
use crate::stations::StationRegistry;
use crate::timetable::TimetableSource;

/// Runs timetable checks against a station registry and a page source.
#[derive(Debug)]
pub struct Watcher<S> {
    registry: StationRegistry,
    source: S,
}

impl<S: TimetableSource> Watcher<S> {
    pub fn new(registry: StationRegistry, source: S) -> Self {
        Self { registry, source }
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validate raw input, then check the timetable.
    ///
    /// Returns the number of lines written to `out`.
    pub async fn check(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        train: Option<&str>,
        out: &mut impl Write,
    ) -> Result<usize, WatchError> {
        let query = self.registry.query(origin, destination, date, train)?;
        self.check_query(&query, out).await
    }

    /// Fetch, extract, render, and print the timetable for a validated query.
    ///
    /// Zero cards is a successful check with no output.
    pub async fn check_query(
        &self,
        query: &Query,
        out: &mut impl Write,
    ) -> Result<usize, WatchError> {
        info!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date_param(),
            train = query.train.as_ref().map(|t| t.as_str()),
            "checking timetable"
        );

        let page = self.source.fetch_page(query).await?;
        let entries = extract_entries(&page);
        let lines = render(&entries, query.train.as_ref());

        for line in &lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        info!(entries = lines.len(), "timetable check complete");
        Ok(lines.len())
    }
}
