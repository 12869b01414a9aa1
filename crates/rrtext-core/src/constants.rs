/// Default `strftime` pattern for the UNTIL clause, e.g. "August 15, 2012".
pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

/// Default `strftime` pattern for the time of day, e.g. "09:00 PM".
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Optional configuration file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
