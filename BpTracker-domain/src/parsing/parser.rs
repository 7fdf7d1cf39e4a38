use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::errors::ParseFailure;
use super::extractor::{extract_diastolic, extract_pulse, extract_systolic};
use super::normalizer::normalize;
use super::validator::{validate, ValidatedValues};
use crate::config::ParserConfig;
use crate::entities::{ParseOutcome, Reading, ReadingSource};

/// Turns free text such as "one twenty over eighty pulse seventy two" into a reading
#[derive(Debug, Clone, Default)]
pub struct VoiceParser {
    config: ParserConfig,
}

impl VoiceParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse transcribed voice text, stamping the reading with the current time
    pub fn parse(&self, raw_text: &str) -> ParseOutcome {
        self.parse_at(raw_text, ReadingSource::Voice, Utc::now())
    }

    /// Parse text with an explicit source and recording time
    pub fn parse_at(
        &self,
        raw_text: &str,
        source: ReadingSource,
        recorded_at: DateTime<Utc>,
    ) -> ParseOutcome {
        match self.extract_values(raw_text) {
            Ok(values) => {
                let message = success_message(&values);
                info!(
                    systolic = values.systolic,
                    diastolic = values.diastolic,
                    pulse = ?values.pulse,
                    "Parsed reading from text"
                );
                ParseOutcome::Parsed {
                    reading: Reading::new(
                        values.systolic,
                        values.diastolic,
                        values.pulse,
                        recorded_at,
                        source,
                    ),
                    raw_text: raw_text.to_string(),
                    message,
                }
            }
            Err(failure) => {
                warn!(kind = failure.kind(), reason = %failure, "Rejected reading text");
                ParseOutcome::Rejected {
                    raw_text: raw_text.to_string(),
                    failure,
                }
            }
        }
    }

    fn extract_values(&self, raw_text: &str) -> Result<ValidatedValues, ParseFailure> {
        if raw_text.trim().is_empty() {
            return Err(ParseFailure::EmptyInput);
        }

        let length = raw_text.chars().count();
        if length > self.config.max_input_chars {
            return Err(ParseFailure::ParseError(format!(
                "input is {} characters long, the limit is {}",
                length, self.config.max_input_chars
            )));
        }

        let normalized = normalize(raw_text);
        let systolic = extract_systolic(&normalized)?;
        let diastolic = extract_diastolic(&normalized)?;
        let pulse = extract_pulse(&normalized)?;

        validate(systolic, diastolic, pulse)
    }
}

fn success_message(values: &ValidatedValues) -> String {
    match values.pulse {
        Some(pulse) => format!(
            "Successfully parsed: {}/{} pulse {}",
            values.systolic, values.diastolic, pulse
        ),
        None => format!("Successfully parsed: {}/{}", values.systolic, values.diastolic),
    }
}

/// Parse text with the default configuration
pub fn parse(raw_text: &str) -> ParseOutcome {
    VoiceParser::default().parse(raw_text)
}
