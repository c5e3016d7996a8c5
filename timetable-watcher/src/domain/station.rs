//! Station value types.

use std::fmt;

/// Numeric station code used by the booking site's URL scheme.
///
/// Distinct from the human-readable slug: the site addresses a route by
/// both, codes first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode(u32);

impl StationCode {
    pub const fn new(code: u32) -> Self {
        StationCode(code)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station known to the booking site.
///
/// Stations are pure data: a slug such as `paris-gare-du-nord` paired with
/// its numeric code. The set of valid stations lives in
/// [`StationRegistry`](crate::stations::StationRegistry).
///
/// # Examples
///
/// ```
/// use timetable_watcher::domain::{Station, StationCode};
///
/// let paris = Station::new("paris-gare-du-nord", StationCode::new(8727100));
/// assert_eq!(paris.slug(), "paris-gare-du-nord");
/// assert_eq!(paris.code().get(), 8727100);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Station {
    slug: &'static str,
    code: StationCode,
}

impl Station {
    pub const fn new(slug: &'static str, code: StationCode) -> Self {
        Self { slug, code }
    }

    /// Returns the URL slug identifying this station.
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    /// Returns the numeric code the remote timetable uses for this station.
    pub fn code(&self) -> StationCode {
        self.code
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({} = {})", self.slug, self.code)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug)
    }
}
