//! Top-level error type for a timetable check.

use crate::stations::InvalidStation;
use crate::timetable::TimetableError;

/// Everything that can stop a check.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// A station slug is not in the registry; nothing was fetched
    #[error(transparent)]
    InvalidStation(#[from] InvalidStation),

    /// The timetable page could not be retrieved
    #[error(transparent)]
    Timetable(#[from] TimetableError),

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WatchError::from(InvalidStation::new("invalid-station"));
        assert_eq!(
            err.to_string(),
            "start or destination station is invalid: unknown station `invalid-station`"
        );

        let err = WatchError::from(TimetableError::FetchFailed {
            status: 500,
            url: "http://localhost/".into(),
        });
        assert_eq!(
            err.to_string(),
            "could not retrieve the timetable page: HTTP 500 from http://localhost/"
        );

        let err = WatchError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.to_string(), "failed to write report: pipe closed");
    }
}
