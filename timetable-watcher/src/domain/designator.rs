//! Train designator type.

use std::fmt;

/// Free text naming one specific train, e.g. `"ES 9047"`.
///
/// Designators only highlight matching timetable rows; they never filter.
/// There is no fixed format, so any non-blank string is accepted.
///
/// `TrainDesignator::parse` returns `None` for empty or whitespace-only input,
/// so every row stays unmarked. Whitespace-only input is a deliberate
/// departure from plain substring matching, under which `" "` would mark
/// every row containing a space.
///
/// # Examples
///
/// ```
/// use timetable_watcher::domain::TrainDesignator;
///
/// let train = TrainDesignator::parse("ES 9047").unwrap();
/// assert!(train.matches("ES 9047 Paris Gare du Nord 08:01"));
///
/// assert!(TrainDesignator::parse("").is_none());
/// assert!(TrainDesignator::parse("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrainDesignator(String);

impl TrainDesignator {
    /// Parse a designator, returning `None` when it is blank.
    ///
    /// Surrounding whitespace is kept: the designator is matched verbatim.
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().is_empty() {
            return None;
        }
        Some(TrainDesignator(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `text` contains this designator as a substring.
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.0.as_str())
    }
}

impl fmt::Debug for TrainDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainDesignator({:?})", self.0)
    }
}

impl fmt::Display for TrainDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_non_blank() {
        assert!(TrainDesignator::parse("ES 9047").is_some());
        assert!(TrainDesignator::parse("9047").is_some());
        assert!(TrainDesignator::parse("x").is_some());
    }

    #[test]
    fn reject_blank() {
        assert!(TrainDesignator::parse("").is_none());
        assert!(TrainDesignator::parse(" ").is_none());
        assert!(TrainDesignator::parse("\t\n").is_none());
    }

    #[test]
    fn matches_substring() {
        let train = TrainDesignator::parse("ES 9047").unwrap();
        assert!(train.matches("ES 9047"));
        assert!(train.matches("08:01 ES 9047 On time"));
        assert!(!train.matches("08:01 ES 9014 On time"));
        assert!(!train.matches("ES  9047"));
    }

    #[test]
    fn match_is_case_sensitive() {
        let train = TrainDesignator::parse("ES 9047").unwrap();
        assert!(!train.matches("es 9047"));
    }

    #[test]
    fn display_and_debug() {
        let train = TrainDesignator::parse("ES 9047").unwrap();
        assert_eq!(format!("{}", train), "ES 9047");
        assert_eq!(format!("{:?}", train), "TrainDesignator(\"ES 9047\")");
    }
}
