//! Booking site HTTP client.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::domain::Query;

use super::error::TimetableError;
use super::source::TimetableSource;

/// Default base URL for the Eurostar timetable pages.
const DEFAULT_BASE_URL: &str = "https://www.eurostar.com/be-en/travel-info/timetable/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the timetable URL for a query.
///
/// Path segments are, in order: origin code, destination code, origin slug,
/// destination slug; the date goes in the `date` query parameter. A trailing
/// slash on `base_url` is optional.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timetable_watcher::stations::StationRegistry;
/// use timetable_watcher::timetable::timetable_url;
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
/// let query = StationRegistry::eurostar()
///     .query("paris-gare-du-nord", "london-st-pancras", date, None)
///     .unwrap();
///
/// assert_eq!(
///     timetable_url("https://www.eurostar.com/be-en/travel-info/timetable/", &query),
///     "https://www.eurostar.com/be-en/travel-info/timetable/8727100/7015400/paris-gare-du-nord/london-st-pancras/?date=2023-12-30"
/// );
/// ```
pub fn timetable_url(base_url: &str, query: &Query) -> String {
    format!(
        "{}/{}/{}/{}/{}/?date={}",
        base_url.trim_end_matches('/'),
        query.origin.code(),
        query.destination.code(),
        query.origin.slug(),
        query.destination.slug(),
        query.date_param(),
    )
}

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct TimetableConfig {
    /// Base URL of the timetable pages
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TimetableConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the booking site's timetable pages.
///
/// Sends no custom headers and no credentials; one GET per query.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    base_url: String,
}

impl TimetableClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TimetableConfig) -> Result<Self, TimetableError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The URL this client requests for `query`.
    pub fn url(&self, query: &Query) -> String {
        timetable_url(&self.base_url, query)
    }
}

impl TimetableSource for TimetableClient {
    async fn fetch_page(&self, query: &Query) -> Result<String, TimetableError> {
        let url = self.url(query);
        info!(%url, "fetching timetable");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "timetable response received");

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), %url, "timetable request failed");
            return Err(TimetableError::FetchFailed {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}
