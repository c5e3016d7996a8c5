//! Result renderer.
//!
//! Pulls timetable cards out of the booking site's HTML and turns each one
//! into a terminal line: statuses colored, the requested train marked.

mod cards;
mod highlight;

pub use cards::{CARD_SELECTOR, extract_entries};
pub use highlight::{
    CANCELLED, Color, Highlight, ON_TIME, RESET, STATUS_HIGHLIGHTS, UNMARKED, marker, render,
    render_line,
};
