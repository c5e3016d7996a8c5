//! Status highlighting and train marking.
//!
//! Each line goes through the status highlights in order (on time first,
//! then cancelled), then gets either the train marker or a plain indent.

use crate::domain::{TimetableEntry, TrainDesignator};

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";


/// Prefix for every other row.
pub const UNMARKED: &str = "  ";

/// Terminal colors used in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Blue,
}

impl Color {
    /// The ANSI escape sequence selecting this color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Green => "\x1b[92m",
            Color::Red => "\x1b[91m",
            Color::Blue => "\x1b[94m",
        }
    }

    /// Wrap `text` in this color, resetting afterwards.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.code(), text, RESET)
    }
}

/// Prefix for rows matching the requested train: a blue asterisk.
pub fn marker() -> String {
    Color::Blue.paint("* ")
}

/// A literal substring to wrap in a color wherever it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub needle: &'static str,
    pub color: Color,
}

impl Highlight {
    pub const fn new(needle: &'static str, color: Color) -> Self {
        Self { needle, color }
    }

    /// Wrap every occurrence of the needle; other text is left as is.
    pub fn apply(&self, text: &str) -> String {
        if !text.contains(self.needle) {
            return text.to_string();
        }
        text.replace(self.needle, &self.color.paint(self.needle))
    }
}

/// Departure running on schedule.
pub const ON_TIME: Highlight = Highlight::new("On time", Color::Green);

/// Departure cancelled.
pub const CANCELLED: Highlight = Highlight::new("Train cancelled", Color::Red);

/// Status highlights, in the order they are applied.
pub const STATUS_HIGHLIGHTS: &[Highlight] = &[ON_TIME, CANCELLED];

/// Render one timetable entry as a terminal line.
///
/// The train designator is matched against the plain card text, before any
/// escape sequences are inserted, so a designator can never match (or be
/// broken up by) the color codes.
///
/// # Examples
///
/// ```
/// use timetable_watcher::domain::{TimetableEntry, TrainDesignator};
/// use timetable_watcher::render::render_line;
///
/// let entry = TimetableEntry::from_text("ES 9047 On time");
/// let train = TrainDesignator::parse("ES 9047");
///
/// assert_eq!(
///     render_line(&entry, train.as_ref()),
///     "\x1b[94m* \x1b[0mES 9047 \x1b[92mOn time\x1b[0m"
/// );
/// assert_eq!(render_line(&entry, None), "  ES 9047 \x1b[92mOn time\x1b[0m");
/// ```
pub fn render_line(entry: &TimetableEntry, train: Option<&TrainDesignator>) -> String {
    let marked = train.is_some_and(|t| t.matches(entry.text()));

    let text = STATUS_HIGHLIGHTS
        .iter()
        .fold(entry.text().to_string(), |text, rule| rule.apply(&text));

    if marked {
        format!("{}{text}", marker())
    } else {
        format!("{UNMARKED}{text}")
    }
}

/// Render every entry, preserving order. Nothing is filtered out.
pub fn render(entries: &[TimetableEntry], train: Option<&TrainDesignator>) -> Vec<String> {
    entries.iter().map(|e| render_line(e, train)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Text with no status passes through, just indented
        #[test]
        fn plain_text_unchanged(s in "[a-z0-9: ]{0,60}") {
            let e = TimetableEntry::from_text(&s);
            let line = render_line(&e, None);
            prop_assert_eq!(line, format!("  {}", e.text()));
        }

        /// Without a designator, no line is ever marked
        #[test]
        fn absent_train_never_marks(s in "[A-Za-z0-9: ]{0,60}") {
            let line = render_line(&TimetableEntry::from_text(&s), None);
            prop_assert!(line.starts_with(UNMARKED));
            prop_assert!(!line.starts_with(&marker()));
        }

        /// Blank designators behave like no designator
        #[test]
        fn blank_train_never_marks(s in "[A-Za-z0-9: ]{0,60}", blank in "[ ]{0,4}") {
            let train = TrainDesignator::parse(&blank);
            let line = render_line(&TimetableEntry::from_text(&s), train.as_ref());
            prop_assert!(line.starts_with(UNMARKED));
        }

        /// A line is marked exactly when its plain text contains the designator
        #[test]
        fn marked_iff_contains(s in "[A-Z0-9 ]{0,40}", d in "[A-Z0-9]{1,3}") {
            let e = TimetableEntry::from_text(&s);
            let train = TrainDesignator::parse(&d);
            let line = render_line(&e, train.as_ref());
            prop_assert_eq!(line.starts_with(&marker()), e.text().contains(d.as_str()));
        }

        /// Stripping escapes and prefix recovers the entry text
        #[test]
        fn highlighting_is_non_destructive(
            parts in proptest::collection::vec(
                prop_oneof![
                    Just("On time".to_string()),
                    Just("Train cancelled".to_string()),
                    "[a-z0-9:]{1,8}",
                ],
                0..8,
            )
        ) {
            let e = TimetableEntry::from_text(&parts.join(" "));
            let line = render_line(&e, None);
            let stripped = line
                .replace(Color::Green.code(), "")
                .replace(Color::Red.code(), "")
                .replace(RESET, "");
            prop_assert_eq!(stripped, format!("  {}", e.text()));
        }
    }
}
