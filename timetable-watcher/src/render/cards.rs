//! Timetable card extraction.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::TimetableEntry;

/// CSS selector for one timetable row on the booking site.
///
/// Matches on the test id attribute alone, whatever the element or its
/// position in the document.
pub const CARD_SELECTOR: &str = r#"[data-testid="clickable-card"]"#;

static CARDS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CARD_SELECTOR).expect("card selector is valid CSS"));

/// Extract every timetable card from an HTML page, in document order.
///
/// Missing markup is not an error: a page without cards yields no entries.
///
/// # Examples
///
/// ```
/// use timetable_watcher::render::extract_entries;
///
/// let html = r#"<ul>
///     <li data-testid="clickable-card"><b>ES 9014</b> <span>On time</span></li>
/// </ul>"#;
///
/// let entries = extract_entries(html);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].text(), "ES 9014 On time");
/// ```
pub fn extract_entries(html: &str) -> Vec<TimetableEntry> {
    let document = Html::parse_document(html);
    let entries: Vec<TimetableEntry> = document
        .select(&CARDS)
        .map(|card| TimetableEntry::from_fragments(card.text()))
        .collect();

    debug!(cards = entries.len(), "extracted timetable cards");
    entries
}
