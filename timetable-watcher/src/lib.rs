//! Train timetable watcher.
//!
//! Checks the booking site's timetable for a route and date and prints one
//! colorized line per departure, optionally marking a specific train.

pub mod cli;
pub mod domain;
pub mod error;
pub mod render;
pub mod stations;
pub mod timetable;
pub mod watcher;

pub use error::WatchError;
pub use watcher::Watcher;
