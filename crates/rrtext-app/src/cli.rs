use clap::Parser;
use rrtext_core::config::{FormatConfig, Settings};
use rrtext_rfc::rfc::ical::parse::parse_rule;
use rrtext_rfc::rfc::ical::text::Translator;

use crate::error::AppResult;

#[derive(Parser, Debug)]
#[command(
    name = "rrtext",
    version,
    about = "Describe monthly recurrence rules in plain English"
)]
pub struct Cli {
    /// RRULE value, with or without the "RRULE:" prefix
    #[arg(short, long)]
    pub rrule: String,

    /// DTSTART as YYYYMMDDTHHMMSS, with a trailing Z for UTC
    #[arg(short, long)]
    pub dtstart: String,

    /// strftime pattern for the UNTIL date (overrides configuration)
    #[arg(long)]
    pub date_format: Option<String>,

    /// strftime pattern for times of day (overrides configuration)
    #[arg(long)]
    pub time_format: Option<String>,

    /// Print the tokens as a JSON array instead of a sentence
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Joins DTSTART and RRULE into the text form the `rrule` crate parses.
    #[must_use]
    pub fn rule_text(&self) -> String {
        let rrule = self.rrule.trim();
        let rrule = rrule.strip_prefix("RRULE:").unwrap_or(rrule);
        format!("DTSTART:{}\nRRULE:{rrule}", self.dtstart.trim())
    }

    /// Builds a translator, preferring command line formats over configuration.
    #[must_use]
    pub fn translator(&self, formats: &FormatConfig) -> Translator {
        Translator::new(
            self.date_format.as_deref().unwrap_or(&formats.date),
            self.time_format.as_deref().unwrap_or(&formats.time),
        )
    }
}

/// ## Summary
/// Parses the rule given on the command line and renders its description.
///
/// ## Errors
/// Returns an error if the rule cannot be parsed, cannot be described, or the
/// JSON output cannot be encoded.
#[tracing::instrument(skip(cli, settings))]
pub fn run(cli: &Cli, settings: &Settings) -> AppResult<String> {
    let rule = parse_rule(&cli.rule_text())?;
    tracing::debug!(frequency = %rule.frequency, interval = rule.interval, "Rule parsed");

    let description = cli.translator(&settings.formats).describe(&rule)?;

    if cli.json {
        Ok(serde_json::to_string(&description)?)
    } else {
        Ok(description.to_string())
    }
}
