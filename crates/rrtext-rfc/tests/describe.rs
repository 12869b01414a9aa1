//! End-to-end descriptions of recurrence rules.

use chrono::{NaiveDate, NaiveDateTime};
use rrtext_rfc::error::TextError;
use rrtext_rfc::rfc::ical::core::{Frequency, Ordinal, RecurrenceRule, Weekday};
use rrtext_rfc::rfc::ical::parse::parse_rule;
use rrtext_rfc::rfc::ical::text::{Translator, translate};

const DATE_FORMAT: &str = "%B %d, %Y";
const TIME_FORMAT: &str = "%I:%M %p";

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, 0, 0))
        .expect("valid date")
}

fn every_other_first_sunday() -> RecurrenceRule {
    RecurrenceRule::monthly(at(2011, 8, 15, 21))
        .with_interval(2)
        .with_weekday_ordinal(Ordinal::First, Weekday::Sunday)
        .with_until(at(2012, 8, 15, 0))
}

#[test_log::test]
fn third_friday_with_count() {
    let rule = RecurrenceRule::monthly(at(2011, 8, 15, 0))
        .with_weekday_ordinal(Ordinal::Third, Weekday::Friday)
        .with_count(10);

    let text = translate(&rule, DATE_FORMAT, TIME_FORMAT).expect("monthly rule");

    assert_eq!(
        text.tokens(),
        ["each", "third", "Friday", "at", "12:00 AM", "ten", "times"]
    );
}

#[test_log::test]
fn every_other_month_until_a_date() {
    let text = Translator::default()
        .describe(&every_other_first_sunday())
        .expect("monthly rule");

    assert_eq!(
        text.tokens(),
        [
            "every other",
            "first",
            "Sunday",
            "at",
            "09:00 PM",
            "until",
            "August 15, 2012"
        ]
    );
}

#[test]
fn date_format_controls_until_clause() {
    let text = translate(&every_other_first_sunday(), "%m/%d/%Y", TIME_FORMAT)
        .expect("monthly rule");

    assert_eq!(text.tokens().last().map(String::as_str), Some("08/15/2012"));
}

#[test]
fn time_format_controls_pair_time() {
    let text =
        translate(&every_other_first_sunday(), DATE_FORMAT, "%H:%M").expect("monthly rule");

    assert_eq!(text.tokens()[4], "21:00");
    assert_eq!(
        text.to_string(),
        "every other first Sunday at 21:00 until August 15, 2012"
    );
}

#[test_log::test]
fn weekly_and_yearly_rules_are_rejected() {
    for frequency in [Frequency::Weekly, Frequency::Yearly] {
        let rule =
            RecurrenceRule::new(frequency, at(2011, 8, 15, 0)).with_until(at(2012, 8, 15, 0));

        assert!(matches!(
            translate(&rule, DATE_FORMAT, TIME_FORMAT),
            Err(TextError::UnsupportedFrequency(_))
        ));
    }
}

#[test]
fn unknown_frequency_codes_are_rejected() {
    for code in [-1, 7, 42] {
        assert!(matches!(
            Frequency::from_code(code),
            Err(TextError::UnsupportedFrequency(_))
        ));
    }
}

#[test]
fn bare_monthly_rule_is_only_the_interval() {
    let rule = RecurrenceRule::monthly(at(2011, 8, 15, 0));

    let text = translate(&rule, DATE_FORMAT, TIME_FORMAT).expect("monthly rule");

    assert_eq!(text.tokens(), ["each"]);
}

#[test]
fn translation_is_idempotent() {
    let rule = every_other_first_sunday();

    let first = translate(&rule, DATE_FORMAT, TIME_FORMAT);
    let second = translate(&rule, DATE_FORMAT, TIME_FORMAT);

    assert_eq!(first, second);
}

#[test]
fn rules_differing_only_in_start_date_are_unequal() {
    let a = every_other_first_sunday();
    let b = RecurrenceRule {
        start: at(2011, 9, 15, 21),
        ..every_other_first_sunday()
    };

    assert_ne!(a, b);
    // Same wall-clock time, so the text is identical.
    assert_eq!(
        Translator::default().describe(&a),
        Translator::default().describe(&b)
    );
}

#[test_log::test]
fn rrule_text_to_description() {
    let rule = parse_rule(
        "DTSTART:20110815T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=3FR,4FR;COUNT=10",
    )
    .expect("valid rule");

    let text = Translator::default().describe(&rule).expect("monthly rule");

    assert_eq!(
        text.to_string(),
        "each third Friday at 12:00 AM and each fourth Friday at 12:00 AM ten times"
    );
}
