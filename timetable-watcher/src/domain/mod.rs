//! Domain types for the timetable watcher.
//!
//! Values here are validated at construction time and carry no state
//! beyond a single run: a query is built, answered, and dropped.

mod designator;
mod entry;
mod query;
mod station;

pub use designator::TrainDesignator;
pub use entry::TimetableEntry;
pub use query::Query;
pub use station::{Station, StationCode};
