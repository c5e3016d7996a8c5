//! Fixed station lookup table.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Query, Station, StationCode, TrainDesignator};

use super::error::{InvalidStation, RegistryError};

/// Stations served by the Eurostar timetable pages.
pub const EUROSTAR_STATIONS: &[Station] = &[
    Station::new("paris-gare-du-nord", StationCode::new(8727100)),
    Station::new("london-st-pancras", StationCode::new(7015400)),
];

/// Immutable slug → station lookup.
///
/// Lookups are total only for members of the table: unknown slugs yield
/// `None`/`false`, and the decision to fail is left to the caller.
///
/// # Examples
///
/// ```
/// use timetable_watcher::stations::StationRegistry;
///
/// let registry = StationRegistry::eurostar();
/// assert!(registry.contains("paris-gare-du-nord"));
/// assert_eq!(registry.code("london-st-pancras").map(|c| c.get()), Some(7015400));
/// assert!(registry.lookup("brussels-midi-zuid").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StationRegistry {
    /// Stations in declaration order.
    stations: Vec<Station>,
    by_slug: HashMap<&'static str, Station>,
}

impl StationRegistry {
    /// Build a registry from an arbitrary fixed list of stations.
    ///
    /// Fails if two stations share a slug.
    pub fn from_stations(
        stations: impl IntoIterator<Item = Station>,
    ) -> Result<Self, RegistryError> {
        let stations: Vec<Station> = stations.into_iter().collect();
        let mut by_slug = HashMap::with_capacity(stations.len());

        for station in &stations {
            if by_slug.insert(station.slug(), *station).is_some() {
                return Err(RegistryError::DuplicateStation(station.slug()));
            }
        }

        Ok(Self { stations, by_slug })
    }

    /// The registry of Eurostar stations.
    pub fn eurostar() -> Self {
        let stations = EUROSTAR_STATIONS.to_vec();
        let by_slug = stations.iter().map(|s| (s.slug(), *s)).collect();
        Self { stations, by_slug }
    }

    /// Look up a station by slug.
    pub fn lookup(&self, slug: &str) -> Option<Station> {
        self.by_slug.get(slug).copied()
    }

    /// Whether `slug` names a known station.
    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Look up a station's numeric code by slug.
    pub fn code(&self, slug: &str) -> Option<StationCode> {
        self.lookup(slug).map(|s| s.code())
    }

    /// All known stations, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Validate both ends of a route.
    ///
    /// The origin is checked first; the error names the first unknown slug.
    pub fn validate_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<(Station, Station), InvalidStation> {
        let origin = self
            .lookup(origin)
            .ok_or_else(|| InvalidStation::new(origin))?;
        let destination = self
            .lookup(destination)
            .ok_or_else(|| InvalidStation::new(destination))?;

        debug!(%origin, %destination, "route validated");
        Ok((origin, destination))
    }

    /// Build a [`Query`] from raw user input.
    ///
    /// A blank `train` is treated as absent.
    pub fn query(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        train: Option<&str>,
    ) -> Result<Query, InvalidStation> {
        let (origin, destination) = self.validate_route(origin, destination)?;
        let train = train.and_then(TrainDesignator::parse);
        Ok(Query::new(origin, destination, date, train))
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::eurostar()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Slugs outside the table are never found
        #[test]
        fn unknown_slugs_rejected(s in "[a-z-]{0,30}") {
            let registry = StationRegistry::eurostar();
            prop_assume!(EUROSTAR_STATIONS.iter().all(|st| st.slug() != s));
            prop_assert!(!registry.contains(&s));
            prop_assert!(registry.lookup(&s).is_none());
            prop_assert!(registry.validate_route(&s, "london-st-pancras").is_err());
            prop_assert!(registry.validate_route("london-st-pancras", &s).is_err());
        }

        /// Every member of the table resolves to its own code
        #[test]
        fn known_slugs_resolve(idx in 0..EUROSTAR_STATIONS.len()) {
            let registry = StationRegistry::eurostar();
            let station = EUROSTAR_STATIONS[idx];
            prop_assert!(registry.contains(station.slug()));
            prop_assert_eq!(registry.code(station.slug()), Some(station.code()));
        }
    }
}
