use crate::entities::BloodPressureCategory;

/// Advisory text for a category
pub fn suggest(category: BloodPressureCategory) -> &'static str {
    match category {
        BloodPressureCategory::Normal => {
            "Excellent! Your blood pressure is in the optimal range. Keep up your healthy lifestyle with regular exercise and balanced diet."
        }
        BloodPressureCategory::Elevated => {
            "Your BP is slightly elevated. Consider reducing sodium intake, staying hydrated, and monitoring more frequently. Lifestyle changes can help bring it to normal."
        }
        BloodPressureCategory::HighBpStage1 => {
            "Your blood pressure is in Stage 1 Hypertension range. It is recommended to consult your doctor. Consider the DASH diet, regular aerobic exercise, and stress reduction techniques."
        }
        BloodPressureCategory::HighBpStage2 => {
            "Your blood pressure is in Stage 2 Hypertension range. Please consult your doctor promptly. Medication may be required alongside lifestyle modifications."
        }
        BloodPressureCategory::HypertensiveCrisis => {
            "URGENT: Your blood pressure readings indicate a hypertensive crisis. Seek immediate medical attention if you experience symptoms like chest pain, shortness of breath, or severe headache."
        }
        BloodPressureCategory::NoData => {
            "No readings found for this period. Start logging your BP!"
        }
        BloodPressureCategory::Unknown => "Please continue logging readings for better analysis.",
    }
}
