use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for storing a manually entered reading
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReadingRequest {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 60, max = 250, message = "Systolic must be between 60 and 250"))]
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 40, max = 150, message = "Diastolic must be between 40 and 150"))]
    pub diastolic: u16,

    /// Optional pulse rate in beats per minute
    #[validate(range(min = 1, message = "Pulse must be a positive number"))]
    pub pulse: Option<u16>,

    /// Optional notes about the reading
    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub notes: Option<String>,

    /// When the reading was taken, as `YYYY-MM-DDTHH:MM:SS`. Defaults to now.
    pub recorded_at: Option<String>,

    /// `MANUAL`, `VOICE` or `TEXT`. Defaults to `MANUAL`.
    pub reading_type: Option<String>,
}

/// Request payload carrying transcribed voice text
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VoiceInputRequest {
    /// Transcribed text, e.g. "one hundred twenty over eighty pulse seventy"
    pub text: String,
}

/// Public representation of a stored reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadingResponse {
    /// Unique identifier for the reading
    pub id: Uuid,

    pub systolic: u16,
    pub diastolic: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the reading was taken, `YYYY-MM-DD HH:MM`
    pub recorded_at: String,

    /// How the reading was captured
    pub reading_type: String,

    /// Category of this single reading
    pub category: String,
}

/// Result of parsing voice text without storing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedReadingResponse {
    pub systolic: Option<u16>,
    pub diastolic: Option<u16>,
    pub pulse: Option<u16>,

    /// The text as submitted
    pub raw_text: String,

    pub success: bool,

    /// Confirmation or rejection reason
    pub message: String,
}

/// A single point for charting readings over time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GraphPointResponse {
    /// `YYYY-MM-DD HH:MM`
    pub timestamp: String,

    /// Short axis label, e.g. `Mar 01, 08:30`
    pub time_label: String,

    pub systolic: u16,
    pub diastolic: u16,

    /// Pulse, 0 when the reading has none
    pub pulse: u16,

    pub category: String,
}
