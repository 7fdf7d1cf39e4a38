use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parsing::ParseFailure;

/// How a reading entered the system
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReadingSource {
    /// Typed in as separate fields
    #[default]
    Manual,
    /// Transcribed from speech
    Voice,
    /// Free text typed by the user
    Text,
}

impl fmt::Display for ReadingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingSource::Manual => write!(f, "MANUAL"),
            ReadingSource::Voice => write!(f, "VOICE"),
            ReadingSource::Text => write!(f, "TEXT"),
        }
    }
}

/// A single blood pressure reading
///
/// Readings are built either by the parser or from fields that were
/// validated elsewhere, and are only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Optional pulse rate in beats per minute
    pub pulse: Option<u16>,

    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,

    /// How the reading was captured
    pub source: ReadingSource,
}

impl Reading {
    /// Build a reading from already-valid fields
    pub fn new(
        systolic: u16,
        diastolic: u16,
        pulse: Option<u16>,
        recorded_at: DateTime<Utc>,
        source: ReadingSource,
    ) -> Self {
        Self {
            systolic,
            diastolic,
            pulse,
            recorded_at,
            source,
        }
    }
}

/// Result of parsing a piece of free text into a reading
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The text contained a plausible reading
    Parsed {
        reading: Reading,
        raw_text: String,
        message: String,
    },
    /// The text was rejected
    Rejected {
        raw_text: String,
        failure: ParseFailure,
    },
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Parsed { .. })
    }

    /// The text as the caller supplied it
    pub fn raw_text(&self) -> &str {
        match self {
            ParseOutcome::Parsed { raw_text, .. } | ParseOutcome::Rejected { raw_text, .. } => {
                raw_text
            }
        }
    }

    /// Confirmation message on success, rejection reason otherwise
    pub fn message(&self) -> String {
        match self {
            ParseOutcome::Parsed { message, .. } => message.clone(),
            ParseOutcome::Rejected { failure, .. } => failure.to_string(),
        }
    }

    pub fn reading(&self) -> Option<&Reading> {
        match self {
            ParseOutcome::Parsed { reading, .. } => Some(reading),
            ParseOutcome::Rejected { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<&ParseFailure> {
        match self {
            ParseOutcome::Parsed { .. } => None,
            ParseOutcome::Rejected { failure, .. } => Some(failure),
        }
    }

    /// Convert into a `Result`, keeping only the reading or the failure
    pub fn into_result(self) -> Result<Reading, ParseFailure> {
        match self {
            ParseOutcome::Parsed { reading, .. } => Ok(reading),
            ParseOutcome::Rejected { failure, .. } => Err(failure),
        }
    }
}
