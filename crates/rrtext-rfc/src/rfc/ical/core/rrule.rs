//! Recurrence rule value type (RFC 5545 §3.3.10, §3.8.5.3).

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{RuleError, TextError};

/// Recurrence frequency (RFC 5545 §3.3.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutely,
    Secondly,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "YEARLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
            Self::Hourly => "HOURLY",
            Self::Minutely => "MINUTELY",
            Self::Secondly => "SECONDLY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "YEARLY" => Self::Yearly,
            "MONTHLY" => Self::Monthly,
            "WEEKLY" => Self::Weekly,
            "DAILY" => Self::Daily,
            "HOURLY" => Self::Hourly,
            "MINUTELY" => Self::Minutely,
            "SECONDLY" => Self::Secondly,
            _ => return None,
        })
    }

    /// Maps the conventional numeric frequency codes (0 = yearly through
    /// 6 = secondly) used by many recurrence libraries.
    ///
    /// ## Errors
    /// Returns `TextError::UnsupportedFrequency` for any other code, since an
    /// unrecognised frequency can never be described.
    pub fn from_code(code: i64) -> Result<Self, TextError> {
        Ok(match code {
            0 => Self::Yearly,
            1 => Self::Monthly,
            2 => Self::Weekly,
            3 => Self::Daily,
            4 => Self::Hourly,
            5 => Self::Minutely,
            6 => Self::Secondly,
            other => return Err(TextError::UnsupportedFrequency(other.to_string())),
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<rrule::Frequency> for Frequency {
    fn from(freq: rrule::Frequency) -> Self {
        match freq {
            rrule::Frequency::Yearly => Self::Yearly,
            rrule::Frequency::Monthly => Self::Monthly,
            rrule::Frequency::Weekly => Self::Weekly,
            rrule::Frequency::Daily => Self::Daily,
            rrule::Frequency::Hourly => Self::Hourly,
            rrule::Frequency::Minutely => Self::Minutely,
            rrule::Frequency::Secondly => Self::Secondly,
        }
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SU" => Self::Sunday,
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            _ => return None,
        })
    }

    /// Returns all weekdays in order (Sunday through Saturday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Ordinal {
    /// Returns the signed BYDAY prefix (`1`..`4`, or `-1` for last).
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => -1,
        }
    }
}

impl TryFrom<i16> for Ordinal {
    type Error = RuleError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::First,
            2 => Self::Second,
            3 => Self::Third,
            4 => Self::Fourth,
            -1 => Self::Last,
            other => return Err(RuleError::InvalidOrdinal(other)),
        })
    }
}

/// Weekday with its occurrence number inside the month.
///
/// Corresponds to BYDAY entries such as `3FR` or `-1SU` on a MONTHLY rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayOrdinal {
    pub weekday: Weekday,
    pub ordinal: Ordinal,
}

impl WeekdayOrdinal {
    #[must_use]
    pub const fn new(ordinal: Ordinal, weekday: Weekday) -> Self {
        Self { weekday, ordinal }
    }
}

impl fmt::Display for WeekdayOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ordinal.as_i16(), self.weekday)
    }
}

/// Recurrence rule (RFC 5545 §3.3.10, §3.8.5.3).
///
/// Equality is structural: two rules that happen to read the same in
/// English still differ if any field differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,

    /// Number of frequency periods between occurrences (default: 1).
    pub interval: u32,

    /// Week start day (default: Monday).
    pub week_start: Weekday,

    /// Anchor of the recurrence. Only the time of day is rendered.
    pub start: NaiveDateTime,

    /// Named zone of `start`, if any.
    pub timezone: Option<chrono_tz::Tz>,

    /// Last possible occurrence (mutually exclusive with count).
    pub until: Option<NaiveDateTime>,

    /// Number of occurrences (mutually exclusive with until).
    pub count: Option<u32>,

    pub by_month: Vec<u8>,
    pub by_week_no: Vec<i8>,
    pub by_year_day: Vec<i16>,

    /// Weekdays without an ordinal (`BYDAY=MO,WE`).
    pub by_weekday: Vec<Weekday>,

    /// Weekdays with an ordinal, in the order they were given.
    pub by_weekday_ordinal: Vec<WeekdayOrdinal>,

    pub by_month_day: Vec<i8>,
    /// Negative month days (`BYMONTHDAY=-1`).
    pub by_n_month_day: Vec<i8>,
    pub by_set_pos: Vec<i32>,
    pub by_hour: Vec<u8>,
    pub by_minute: Vec<u8>,
    pub by_second: Vec<u8>,
}

impl RecurrenceRule {
    /// Creates a rule with the given frequency anchored at `start`.
    #[must_use]
    pub fn new(frequency: Frequency, start: NaiveDateTime) -> Self {
        Self {
            frequency,
            interval: 1,
            week_start: Weekday::Monday,
            start,
            timezone: None,
            until: None,
            count: None,
            by_month: Vec::new(),
            by_week_no: Vec::new(),
            by_year_day: Vec::new(),
            by_weekday: Vec::new(),
            by_weekday_ordinal: Vec::new(),
            by_month_day: Vec::new(),
            by_n_month_day: Vec::new(),
            by_set_pos: Vec::new(),
            by_hour: Vec::new(),
            by_minute: Vec::new(),
            by_second: Vec::new(),
        }
    }

    /// Creates a monthly recurrence rule.
    #[must_use]
    pub fn monthly(start: NaiveDateTime) -> Self {
        Self::new(Frequency::Monthly, start)
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self.until = None; // Mutually exclusive
        self
    }

    /// Sets the until date-time.
    #[must_use]
    pub fn with_until(mut self, until: NaiveDateTime) -> Self {
        self.until = Some(until);
        self.count = None; // Mutually exclusive
        self
    }

    /// Appends a weekday/ordinal pair, keeping insertion order.
    #[must_use]
    pub fn with_weekday_ordinal(mut self, ordinal: Ordinal, weekday: Weekday) -> Self {
        self.by_weekday_ordinal.push(WeekdayOrdinal::new(ordinal, weekday));
        self
    }

    /// Sets the week start day.
    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the named timezone of `start`.
    #[must_use]
    pub fn with_timezone(mut self, timezone: chrono_tz::Tz) -> Self {
        self.timezone = Some(timezone);
        self
    }
}
