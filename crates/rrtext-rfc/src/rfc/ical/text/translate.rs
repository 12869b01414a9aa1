//! Rendering of MONTHLY recurrence rules as English token sequences.

use std::fmt::{self, Write as _};

use chrono::NaiveDateTime;
use rrtext_core::config::FormatConfig;
use rrtext_core::constants::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use serde::Serialize;

use super::number::number_to_words;
use super::tables::{interval_phrase, ordinal_word, weekday_name};
use crate::error::{TextError, TextResult};
use crate::rfc::ical::core::{Frequency, RecurrenceRule, WeekdayOrdinal};

/// Ordered words and short phrases describing a recurrence rule.
///
/// `Display` joins the tokens with single spaces; serialization yields a
/// JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Description {
    tokens: Vec<String>,
}

impl Description {
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Formats `value` with a chrono `strftime` pattern.
///
/// Chrono reports unusable patterns as a `fmt::Error` from `Display`, which
/// would panic inside `to_string`.
fn render(value: &NaiveDateTime, pattern: &str) -> TextResult<String> {
    let mut out = String::new();
    write!(out, "{}", value.format(pattern))
        .map_err(|fmt::Error| TextError::InvalidFormat(pattern.to_string()))?;
    Ok(out)
}

/// Tokens for one weekday/ordinal pair: "third Friday at 12:00 AM".
fn pair_unit(pair: WeekdayOrdinal, time: &str) -> Vec<String> {
    vec![
        ordinal_word(pair.ordinal).to_string(),
        weekday_name(pair.weekday).to_string(),
        "at".to_string(),
        time.to_string(),
    ]
}

/// ## Summary
/// Describes a MONTHLY recurrence rule as an ordered list of English tokens.
///
/// The leading token is the interval phrase. Each weekday/ordinal pair
/// contributes its ordinal, weekday name, `"at"` and the start time rendered
/// with `time_format`; pairs are separated by `"and"` plus the interval
/// phrase, in the order given. A non-zero count adds the spelled-out count
/// and `"times"`; otherwise an until date adds `"until"` and the date
/// rendered with `date_format`.
///
/// ## Errors
/// - `TextError::UnsupportedFrequency` if the rule is not MONTHLY.
/// - `TextError::UnsupportedInterval` if the interval is outside 1..=12.
/// - `TextError::InvalidFormat` if chrono cannot render a pattern.
///
/// No tokens are returned on error.
#[tracing::instrument(
    skip(rule),
    fields(frequency = %rule.frequency, pairs = rule.by_weekday_ordinal.len())
)]
pub fn translate(
    rule: &RecurrenceRule,
    date_format: &str,
    time_format: &str,
) -> TextResult<Description> {
    if rule.frequency != Frequency::Monthly {
        tracing::warn!("Only MONTHLY rules can be described");
        return Err(TextError::UnsupportedFrequency(rule.frequency.to_string()));
    }

    let phrase = interval_phrase(rule.interval)?;
    let mut tokens = vec![phrase.to_string()];

    if !rule.by_weekday_ordinal.is_empty() {
        let time = render(&rule.start, time_format)?;
        let units: Vec<Vec<String>> = rule
            .by_weekday_ordinal
            .iter()
            .map(|pair| pair_unit(*pair, &time))
            .collect();
        tracing::trace!(count = units.len(), "Built weekday units");

        let separator = ["and".to_string(), phrase.to_string()];
        tokens.extend(units.join(&separator[..]));
    }

    match (rule.count, rule.until) {
        (Some(count), _) if count != 0 => {
            tokens.push(number_to_words(u64::from(count)));
            tokens.push("times".to_string());
        }
        (_, Some(until)) => {
            tokens.push("until".to_string());
            tokens.push(render(&until, date_format)?);
        }
        _ => {}
    }

    tracing::debug!(count = tokens.len(), "Recurrence rule described");
    Ok(Description { tokens })
}

/// Translator bound to a pair of format patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    date_format: String,
    time_format: String,
}

impl Translator {
    #[must_use]
    pub fn new(date_format: impl Into<String>, time_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            time_format: time_format.into(),
        }
    }

    /// Builds a translator from the `formats` section of the settings.
    #[must_use]
    pub fn from_config(formats: &FormatConfig) -> Self {
        Self::new(formats.date.clone(), formats.time.clone())
    }

    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    #[must_use]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// ## Summary
    /// Describes `rule` with this translator's formats. See [`translate`].
    ///
    /// ## Errors
    /// Returns the same errors as [`translate`].
    pub fn describe(&self, rule: &RecurrenceRule) -> TextResult<Description> {
        translate(rule, &self.date_format, &self.time_format)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT)
    }
}
