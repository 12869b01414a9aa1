//! Conversion from the `rrule` crate's parsed recurrence sets.

use chrono::DateTime;
use rrule::{NWeekday, RRule, RRuleSet, Tz};

use crate::error::{RuleError, RuleResult};
use crate::rfc::ical::core::{Ordinal, RecurrenceRule, Weekday, WeekdayOrdinal};

/// ## Summary
/// Parses RRULE text anchored by a DTSTART line, for example
/// `"DTSTART:20110815T000000\nRRULE:FREQ=MONTHLY;BYDAY=3FR;COUNT=10"`.
///
/// ## Errors
/// Returns `RuleError::ParseError` if the `rrule` crate rejects the text, and
/// the errors of [`rule_from_parts`] otherwise.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_rule(text: &str) -> RuleResult<RecurrenceRule> {
    let set = text
        .parse::<RRuleSet>()
        .map_err(|e| RuleError::ParseError(e.to_string()))?;
    tracing::debug!(rules = set.get_rrule().len(), "Parsed recurrence set");

    RecurrenceRule::try_from(&set)
}

/// ## Summary
/// Builds a `RecurrenceRule` from a single RRULE and its DTSTART.
///
/// Times are kept as wall-clock values in the DTSTART zone; named zones are
/// recorded in `timezone`, the process-local zone is not.
///
/// ## Errors
/// Returns `RuleError::InvalidOrdinal` if a BYDAY ordinal is not 1-4 or -1.
pub fn rule_from_parts(rrule: &RRule, dt_start: &DateTime<Tz>) -> RuleResult<RecurrenceRule> {
    let mut by_weekday: Vec<Weekday> = Vec::new();
    let mut by_weekday_ordinal = Vec::new();
    for day in rrule.get_by_weekday() {
        match *day {
            NWeekday::Every(weekday) => by_weekday.push(weekday.into()),
            NWeekday::Nth(n, weekday) => {
                let ordinal = Ordinal::try_from(n)?;
                by_weekday_ordinal.push(WeekdayOrdinal::new(ordinal, weekday.into()));
            }
        }
    }

    let timezone = match dt_start.timezone() {
        Tz::Tz(tz) => Some(tz),
        Tz::Local(_) => None,
    };

    Ok(RecurrenceRule {
        frequency: rrule.get_freq().into(),
        interval: u32::from(rrule.get_interval()),
        week_start: rrule.get_week_start().into(),
        start: dt_start.naive_local(),
        timezone,
        until: rrule.get_until().map(DateTime::naive_local),
        count: rrule.get_count(),
        by_month: rrule.get_by_month().to_vec(),
        by_week_no: rrule.get_by_week_no().to_vec(),
        by_year_day: rrule.get_by_year_day().to_vec(),
        by_weekday,
        by_weekday_ordinal,
        by_month_day: rrule.get_by_month_day().to_vec(),
        by_n_month_day: rrule.get_by_n_month_day().to_vec(),
        by_set_pos: rrule.get_by_set_pos().to_vec(),
        by_hour: rrule.get_by_hour().to_vec(),
        by_minute: rrule.get_by_minute().to_vec(),
        by_second: rrule.get_by_second().to_vec(),
    })
}

impl TryFrom<&RRuleSet> for RecurrenceRule {
    type Error = RuleError;

    /// Uses the first RRULE of the set; RDATE and EXDATE only affect
    /// expansion and are ignored.
    fn try_from(set: &RRuleSet) -> Result<Self, Self::Error> {
        let rrule = set.get_rrule().first().ok_or(RuleError::MissingRule)?;
        rule_from_parts(rrule, set.get_dt_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::Frequency;
    use chrono::NaiveDate;

    #[test_log::test]
    fn monthly_nth_weekday_is_extracted() {
        let rule = parse_rule("DTSTART:20110815T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=3FR;COUNT=10")
            .expect("valid rule");

        assert_eq!(rule.frequency, Frequency::Monthly);
        assert_eq!(rule.interval, 1);
        assert_eq!(rule.count, Some(10));
        assert_eq!(rule.until, None);
        assert_eq!(
            rule.by_weekday_ordinal,
            vec![WeekdayOrdinal::new(Ordinal::Third, Weekday::Friday)]
        );
        assert!(rule.by_weekday.is_empty());
        assert_eq!(rule.timezone, Some(chrono_tz::UTC));
        assert_eq!(
            rule.start,
            NaiveDate::from_ymd_opt(2011, 8, 15)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid date")
        );
    }

    #[test]
    fn pair_order_follows_the_text() {
        let rule = parse_rule(
            "DTSTART:20110815T090000Z\nRRULE:FREQ=MONTHLY;INTERVAL=2;BYDAY=-1MO,1WE",
        )
        .expect("valid rule");

        assert_eq!(rule.interval, 2);
        assert_eq!(
            rule.by_weekday_ordinal,
            vec![
                WeekdayOrdinal::new(Ordinal::Last, Weekday::Monday),
                WeekdayOrdinal::new(Ordinal::First, Weekday::Wednesday),
            ]
        );
    }

    #[test]
    fn until_is_kept_as_wall_time() {
        let rule = parse_rule(
            "DTSTART:20110815T210000Z\nRRULE:FREQ=MONTHLY;BYDAY=1SU;UNTIL=20120815T000000Z",
        )
        .expect("valid rule");

        assert_eq!(
            rule.until,
            NaiveDate::from_ymd_opt(2012, 8, 15).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(rule.count, None);
    }

    #[test]
    fn plain_weekdays_are_separate_from_pairs() {
        let rule = parse_rule("DTSTART:20110815T000000Z\nRRULE:FREQ=WEEKLY;BYDAY=MO,FR")
            .expect("valid rule");

        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.by_weekday, vec![Weekday::Monday, Weekday::Friday]);
        assert!(rule.by_weekday_ordinal.is_empty());
    }

    #[test]
    fn unsupported_ordinal_is_rejected() {
        let result = parse_rule("DTSTART:20110815T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=5FR");

        assert!(matches!(result, Err(RuleError::InvalidOrdinal(5))));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let result = parse_rule("DTSTART:20110815T000000Z\nRRULE:FREQ=SOMETIMES");

        assert!(matches!(result, Err(RuleError::ParseError(_))));
    }
}
