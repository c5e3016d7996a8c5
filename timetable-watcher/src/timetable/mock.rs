//! Mock timetable client for testing without network access.
//!
//! Serves one canned page (or one canned failure status) for every query
//! and records what was asked for, so callers can assert on call counts.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Query;

use super::client::timetable_url;
use super::error::TimetableError;
use super::source::TimetableSource;

/// Base URL the mock pretends to serve, used only for recorded URLs.
const MOCK_BASE_URL: &str = "https://timetable.mock/";

/// Mock timetable client that answers every query the same way.
#[derive(Debug)]
pub struct MockTimetableClient {
    status: u16,
    body: String,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MockTimetableClient {
    /// A mock that answers 200 with `body`.
    pub fn with_page(body: impl Into<String>) -> Self {
        Self::with_response(200, body)
    }

    /// A mock that answers with `status` and an empty body.
    pub fn with_status(status: u16) -> Self {
        Self::with_response(status, "")
    }

    /// A mock that answers with `status` and `body`.
    pub fn with_response(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Number of fetches attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// URLs requested so far, in order, relative to a fixed mock base.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl TimetableSource for MockTimetableClient {
    async fn fetch_page(&self, query: &Query) -> Result<String, TimetableError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let url = timetable_url(MOCK_BASE_URL, query);
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.clone());

        if self.status != 200 {
            return Err(TimetableError::FetchFailed {
                status: self.status,
                url,
            });
        }

        Ok(self.body.clone())
    }
}
