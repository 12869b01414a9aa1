use thiserror::Error;

/// Errors raised while rendering a recurrence rule as text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Unsupported frequency: {0} (only MONTHLY rules can be described)")]
    UnsupportedFrequency(String),

    #[error("Unsupported interval: {0} (expected 1 through 12)")]
    UnsupportedInterval(u32),

    #[error("Invalid format pattern: {0}")]
    InvalidFormat(String),
}

pub type TextResult<T> = std::result::Result<T, TextError>;

/// Errors raised while building a `RecurrenceRule` from external input.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid weekday ordinal: {0} (expected 1, 2, 3, 4 or -1)")]
    InvalidOrdinal(i16),

    #[error("Recurrence set has no RRULE")]
    MissingRule,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error(transparent)]
    CoreError(#[from] rrtext_core::error::CoreError),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
