//! RFC 5545 recurrence rules rendered as English text.

pub mod error;
pub mod rfc;
