//! Timetable entry type.

use std::fmt;

/// One timetable row as shown on the booking site.
///
/// Only the visible text is kept, with whitespace normalized: every run of
/// whitespace collapsed to one space and both ends trimmed. Status
/// ("On time", "Train cancelled", delays) is embedded in that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableEntry(String);

impl TimetableEntry {
    /// Build an entry from raw text, normalizing its whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_watcher::domain::TimetableEntry;
    ///
    /// let entry = TimetableEntry::from_text("  08:01 \n  ES 9014\tOn time ");
    /// assert_eq!(entry.text(), "08:01 ES 9014 On time");
    /// ```
    pub fn from_text(raw: &str) -> Self {
        Self::from_fragments(std::iter::once(raw))
    }

    /// Build an entry from text fragments (e.g. the text nodes of an element).
    pub fn from_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> Self {
        let words: Vec<&str> = fragments
            .into_iter()
            .flat_map(str::split_whitespace)
            .collect();
        TimetableEntry(words.join(" "))
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TimetableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
