use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_DATE_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_TIME_FORMAT,
};
use crate::error::{CoreError, CoreResult};


#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub formats: FormatConfig,
    pub logging: LoggingConfig,
}

/// `strftime` patterns used when rendering a rule as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// Pattern for the UNTIL date.
    pub date: String,
    /// Pattern for the time of day attached to each weekday.
    pub time: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_FORMAT.to_string(),
            time: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`
    /// into a `Settings`. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the result fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("formats.date", DEFAULT_DATE_FORMAT)?
            .set_default("formats.time", DEFAULT_TIME_FORMAT)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Environment, e.g. RRTEXT__FORMATS__DATE
            .add_source(
                config::Environment::with_prefix("RRTEXT")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks that every configured value is usable.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` when a format pattern is blank and
    /// `CoreError::InvalidInput` when the log level is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.formats.date.trim().is_empty() {
            return Err(CoreError::ConfigError("formats.date must not be empty".into()));
        }
        if self.formats.time.trim().is_empty() {
            return Err(CoreError::ConfigError("formats.time must not be empty".into()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidInput("logging.level must not be empty".into()));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(formats = ?settings.formats, "Configuration resolved");
    Ok(settings)
}
