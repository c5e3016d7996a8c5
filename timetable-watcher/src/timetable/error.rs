//! Timetable fetcher error types.

/// Errors from fetching a timetable page.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Connection-level failure (DNS, TLS, timeout) or client setup failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The site answered with a status other than 200
    #[error("could not retrieve the timetable page: HTTP {status} from {url}")]
    FetchFailed { status: u16, url: String },
}

impl TimetableError {
    /// The HTTP status, if the site answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TimetableError::FetchFailed { status, .. } => Some(*status),
            TimetableError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
