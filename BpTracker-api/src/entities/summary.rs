use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summary of readings in a time window
///
/// Numeric fields are zero when the window holds no readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub avg_systolic: f64,
    pub avg_diastolic: f64,
    pub avg_pulse: f64,
    pub max_systolic: u16,
    pub min_systolic: u16,
    pub max_diastolic: u16,
    pub min_diastolic: u16,
    pub max_pulse: u16,
    pub min_pulse: u16,

    /// Category of the averages, or "No Data"
    pub category: String,

    pub suggestion: String,

    /// Systolic trend with arrow, absent when there were no readings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,

    pub total_readings: usize,

    /// Range label as requested
    pub range: String,

    pub alerts: Vec<String>,
}
