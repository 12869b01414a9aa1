//! Building recurrence rules from RRULE text.
//!
//! Parsing and validation are delegated to the `rrule` crate; this module only
//! maps its result onto [`RecurrenceRule`](crate::rfc::ical::core::RecurrenceRule).

mod rrule_set;

pub use rrule_set::{parse_rule, rule_from_parts};
