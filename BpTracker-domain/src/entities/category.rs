use serde::{Deserialize, Serialize};
use std::fmt;

/// Blood pressure category derived from a systolic/diastolic pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BloodPressureCategory {
    /// Normal blood pressure (systolic < 120 and diastolic < 80)
    #[serde(rename = "Normal")]
    Normal,

    /// Elevated blood pressure (systolic 120-129 and diastolic < 80)
    #[serde(rename = "Elevated")]
    Elevated,

    /// Stage 1 Hypertension (systolic 130-139 or diastolic 80-89)
    #[serde(rename = "High BP Stage 1")]
    HighBpStage1,

    /// Stage 2 Hypertension (systolic ≥ 140 or diastolic ≥ 90)
    #[serde(rename = "High BP Stage 2")]
    HighBpStage2,

    /// Hypertensive crisis (systolic > 180 and/or diastolic > 120)
    #[serde(rename = "Hypertensive Crisis")]
    HypertensiveCrisis,

    /// No classification rule matched
    #[serde(rename = "Unknown")]
    Unknown,

    /// Summary over an empty reading set
    #[serde(rename = "No Data")]
    NoData,
}

impl BloodPressureCategory {
    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::HighBpStage1 => "High BP Stage 1",
            BloodPressureCategory::HighBpStage2 => "High BP Stage 2",
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis",
            BloodPressureCategory::Unknown => "Unknown",
            BloodPressureCategory::NoData => "No Data",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
