use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BloodPressureCategory;

/// Descriptive statistics over a set of readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingStats {
    /// Average systolic reading, rounded to one decimal
    pub avg_systolic: f64,

    /// Average diastolic reading, rounded to one decimal
    pub avg_diastolic: f64,

    /// Average pulse over readings that carry one, 0 when none do
    pub avg_pulse: f64,

    pub min_systolic: u16,
    pub max_systolic: u16,
    pub min_diastolic: u16,
    pub max_diastolic: u16,

    /// Lowest pulse seen, 0 when no reading carries a pulse
    pub min_pulse: u16,

    /// Highest pulse seen, 0 when no reading carries a pulse
    pub max_pulse: u16,
}

/// Direction of systolic pressure across a reading window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "Increasing")]
    Increasing,
    #[serde(rename = "Decreasing")]
    Decreasing,
    #[serde(rename = "Stable")]
    Stable,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Increasing => "Increasing",
            Trend::Decreasing => "Decreasing",
            Trend::Stable => "Stable",
            Trend::InsufficientData => "Insufficient data",
        }
    }

    /// Arrow glyph for display, if the trend has a direction
    pub fn symbol(&self) -> Option<char> {
        match self {
            Trend::Increasing => Some('↑'),
            Trend::Decreasing => Some('↓'),
            Trend::Stable => Some('→'),
            Trend::InsufficientData => None,
        }
    }

    /// Label followed by the arrow glyph, e.g. `Increasing ↑`
    pub fn display_label(&self) -> String {
        match self.symbol() {
            Some(symbol) => format!("{} {}", self.label(), symbol),
            None => self.label().to_string(),
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary of the readings in a time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Averages and extremes; absent when there were no readings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ReadingStats>,

    /// Category of the averages
    pub category: BloodPressureCategory,

    /// Advisory text for the category
    pub suggestion: String,

    /// Systolic trend; absent when there were no readings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,

    /// Number of readings summarized
    pub total_readings: usize,

    /// Range label the caller asked for, echoed verbatim
    pub range: String,

    /// Alerts in fixed order
    pub alerts: Vec<String>,
}
