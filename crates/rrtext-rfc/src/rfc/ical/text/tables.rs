//! English lookup tables for rendering recurrence rules.

use crate::error::{TextError, TextResult};
use crate::rfc::ical::core::{Ordinal, Weekday};

/// Ordinal words, in the order `1, 2, 3, 4, -1`.
pub const ORDINAL_WORDS: [(Ordinal, &str); 5] = [
    (Ordinal::First, "first"),
    (Ordinal::Second, "second"),
    (Ordinal::Third, "third"),
    (Ordinal::Fourth, "fourth"),
    (Ordinal::Last, "last"),
];

/// English weekday names, Sunday first.
pub const WEEKDAY_NAMES: [(Weekday, &str); 7] = [
    (Weekday::Sunday, "Sunday"),
    (Weekday::Monday, "Monday"),
    (Weekday::Tuesday, "Tuesday"),
    (Weekday::Wednesday, "Wednesday"),
    (Weekday::Thursday, "Thursday"),
    (Weekday::Friday, "Friday"),
    (Weekday::Saturday, "Saturday"),
];

/// Interval phrases indexed by `interval - 1`.
pub const INTERVAL_PHRASES: [&str; 12] = [
    "each",
    "every other",
    "every third",
    "every fourth",
    "every fifth",
    "every sixth",
    "every seventh",
    "every eighth",
    "every ninth",
    "every tenth",
    "every eleventh",
    "every twelfth",
];

/// Returns the ordinal word ("first" .. "fourth", "last").
#[must_use]
pub const fn ordinal_word(ordinal: Ordinal) -> &'static str {
    match ordinal {
        Ordinal::First => ORDINAL_WORDS[0].1,
        Ordinal::Second => ORDINAL_WORDS[1].1,
        Ordinal::Third => ORDINAL_WORDS[2].1,
        Ordinal::Fourth => ORDINAL_WORDS[3].1,
        Ordinal::Last => ORDINAL_WORDS[4].1,
    }
}

/// Returns the English name of the weekday.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday as usize].1
}

/// ## Summary
/// Returns the phrase for "every Nth period": 1 is "each", 2 is "every other",
/// 12 is "every twelfth".
///
/// ## Errors
/// Returns `TextError::UnsupportedInterval` when `interval` is outside 1..=12.
pub fn interval_phrase(interval: u32) -> TextResult<&'static str> {
    usize::try_from(interval)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| INTERVAL_PHRASES.get(idx).copied())
        .ok_or(TextError::UnsupportedInterval(interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_words_match_table_order() {
        for (ordinal, word) in ORDINAL_WORDS {
            assert_eq!(ordinal_word(ordinal), word);
        }
        assert_eq!(ordinal_word(Ordinal::Third), "third");
        assert_eq!(ordinal_word(Ordinal::Last), "last");
    }

    #[test]
    fn weekday_names_cover_every_day() {
        for day in Weekday::all() {
            let expected = WEEKDAY_NAMES
                .iter()
                .find(|(d, _)| *d == day)
                .map(|(_, name)| *name);
            assert_eq!(Some(weekday_name(day)), expected);
        }
        assert_eq!(weekday_name(Weekday::Sunday), "Sunday");
        assert_eq!(weekday_name(Weekday::Thursday), "Thursday");
    }

    #[test]
    fn interval_phrases() {
        assert_eq!(interval_phrase(1), Ok("each"));
        assert_eq!(interval_phrase(2), Ok("every other"));
        assert_eq!(interval_phrase(3), Ok("every third"));
        assert_eq!(interval_phrase(12), Ok("every twelfth"));
    }

    #[test]
    fn interval_out_of_range_is_rejected() {
        assert_eq!(interval_phrase(0), Err(TextError::UnsupportedInterval(0)));
        assert_eq!(interval_phrase(13), Err(TextError::UnsupportedInterval(13)));
        assert_eq!(
            interval_phrase(u32::MAX),
            Err(TextError::UnsupportedInterval(u32::MAX))
        );
    }
}
