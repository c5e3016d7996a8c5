//! The fetcher seam used by the pipeline.

use crate::domain::Query;

use super::error::TimetableError;

/// Anything that can answer a [`Query`] with a raw timetable page.
///
/// [`TimetableClient`](super::TimetableClient) talks to the real site;
/// [`MockTimetableClient`](super::MockTimetableClient) serves a canned page.
pub trait TimetableSource {
    /// Fetch the HTML timetable page for `query`, unmodified.
    fn fetch_page(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<String, TimetableError>> + Send;
}
