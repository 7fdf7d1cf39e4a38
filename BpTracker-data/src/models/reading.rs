use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of the user owning a reading
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a stored reading was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReadingType {
    #[default]
    Manual,
    Voice,
    Text,
}

impl ReadingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingType::Manual => "MANUAL",
            ReadingType::Voice => "VOICE",
            ReadingType::Text => "TEXT",
        }
    }
}

impl fmt::Display for ReadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANUAL" => Ok(ReadingType::Manual),
            "VOICE" => Ok(ReadingType::Voice),
            "TEXT" => Ok(ReadingType::Text),
            other => Err(format!("Unknown reading type: {}", other)),
        }
    }
}

/// Storage model for a blood pressure reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReading {
    /// Unique identifier for the reading
    pub id: uuid::Uuid,

    /// Owner of the reading
    pub user_id: UserId,

    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Optional pulse rate in beats per minute
    pub pulse: Option<u16>,

    /// Optional notes about the reading
    pub notes: Option<String>,

    /// How the reading was captured
    pub reading_type: ReadingType,

    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,

    /// When the reading was stored
    pub created_at: DateTime<Utc>,
}

/// Input data for storing a new reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReading {
    pub systolic: u16,
    pub diastolic: u16,
    pub pulse: Option<u16>,
    pub notes: Option<String>,
    pub reading_type: ReadingType,
    pub recorded_at: DateTime<Utc>,
}
