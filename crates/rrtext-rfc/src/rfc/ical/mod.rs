//! iCalendar recurrence handling.
//!
//! - [`core`]: the recurrence rule model
//! - [`parse`]: building rules from RRULE text
//! - [`text`]: rendering MONTHLY rules as English

pub mod core;
pub mod parse;
pub mod text;
