//! iCalendar recurrence models (RFC 5545).
//!
//! These types carry an already-validated recurrence rule. Parsing and
//! occurrence expansion live outside this module.

mod rrule;

pub use rrule::{Frequency, Ordinal, RecurrenceRule, Weekday, WeekdayOrdinal};
