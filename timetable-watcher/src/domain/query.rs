//! Timetable query type.

use chrono::NaiveDate;

use super::{Station, TrainDesignator};

/// One timetable check: a route, a travel date, and optionally a train to
/// highlight.
///
/// Stations are already validated by the time a `Query` exists; see
/// [`StationRegistry::query`](crate::stations::StationRegistry::query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub origin: Station,
    pub destination: Station,
    pub date: NaiveDate,
    pub train: Option<TrainDesignator>,
}

impl Query {
    pub fn new(
        origin: Station,
        destination: Station,
        date: NaiveDate,
        train: Option<TrainDesignator>,
    ) -> Self {
        Self {
            origin,
            destination,
            date,
            train,
        }
    }

    /// Returns the travel date in ISO 8601 form (`YYYY-MM-DD`).
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
