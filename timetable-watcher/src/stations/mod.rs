//! Station registry and route validation.
//!
//! The booking site addresses a route by numeric station codes plus URL
//! slugs. The registry is the fixed table of stations the watcher knows
//! about; anything outside it is rejected before any network activity.

mod error;
mod registry;

pub use error::{InvalidStation, RegistryError};
pub use registry::{EUROSTAR_STATIONS, StationRegistry};
