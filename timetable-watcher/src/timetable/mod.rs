//! Timetable page fetcher.
//!
//! Builds the booking site's timetable URL for a route and date and
//! performs a single GET for it. There is no caching and no retry: every
//! check is one fresh round-trip, and any status other than 200 fails.

mod client;
mod error;
mod mock;
mod source;

pub use client::{TimetableClient, TimetableConfig, timetable_url};
pub use error::TimetableError;
pub use mock::MockTimetableClient;
pub use source::TimetableSource;
