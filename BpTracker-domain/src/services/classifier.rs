use crate::entities::BloodPressureCategory;

/// Categorize a systolic/diastolic pair
///
/// The rules overlap and are evaluated top to bottom; the first that matches
/// wins. `Unknown` is only reached when a comparison cannot hold at all,
/// which in practice means a NaN average.
pub fn classify(systolic: f64, diastolic: f64) -> BloodPressureCategory {
    if systolic > 180.0 || diastolic > 120.0 {
        BloodPressureCategory::HypertensiveCrisis
    } else if systolic >= 140.0 || diastolic >= 90.0 {
        BloodPressureCategory::HighBpStage2
    } else if systolic >= 130.0 || diastolic >= 80.0 {
        BloodPressureCategory::HighBpStage1
    } else if systolic >= 120.0 && diastolic < 80.0 {
        BloodPressureCategory::Elevated
    } else if systolic < 120.0 && diastolic < 80.0 {
        BloodPressureCategory::Normal
    } else {
        BloodPressureCategory::Unknown
    }
}

/// Categorize a single integer reading
pub fn classify_reading(systolic: u16, diastolic: u16) -> BloodPressureCategory {
    classify(f64::from(systolic), f64::from(diastolic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bp_category_normal() {
        assert_eq!(classify(115.0, 75.0), BloodPressureCategory::Normal);
        assert_eq!(classify(119.9, 79.9), BloodPressureCategory::Normal);
    }

    #[test]
    fn test_bp_category_elevated() {
        assert_eq!(classify(125.0, 75.0), BloodPressureCategory::Elevated);
        assert_eq!(classify(120.0, 79.0), BloodPressureCategory::Elevated);
    }

    #[test]
    fn test_bp_category_stage1() {
        // Test systolic in range
        assert_eq!(classify(135.0, 75.0), BloodPressureCategory::HighBpStage1);

        // Test diastolic in range
        assert_eq!(classify(120.0, 85.0), BloodPressureCategory::HighBpStage1);
        assert_eq!(classify(110.0, 80.0), BloodPressureCategory::HighBpStage1);
    }

    #[test]
    fn test_bp_category_stage2() {
        assert_eq!(classify(145.0, 75.0), BloodPressureCategory::HighBpStage2);
        assert_eq!(classify(120.0, 95.0), BloodPressureCategory::HighBpStage2);
    }

    #[test]
    fn test_bp_category_crisis() {
        assert_eq!(classify(185.0, 70.0), BloodPressureCategory::HypertensiveCrisis);
        assert_eq!(classify(120.0, 125.0), BloodPressureCategory::HypertensiveCrisis);
    }

    #[test]
    fn test_rule_boundaries() {
        // Crisis uses strict comparisons, the stages use inclusive ones
        assert_eq!(classify(180.0, 120.0), BloodPressureCategory::HighBpStage2);
        assert_eq!(classify(180.1, 60.0), BloodPressureCategory::HypertensiveCrisis);
        assert_eq!(classify(140.0, 60.0), BloodPressureCategory::HighBpStage2);
        assert_eq!(classify(139.9, 89.9), BloodPressureCategory::HighBpStage1);
        assert_eq!(classify(130.0, 60.0), BloodPressureCategory::HighBpStage1);
        assert_eq!(classify(129.9, 79.9), BloodPressureCategory::Elevated);
        assert_eq!(classify(120.0, 80.0), BloodPressureCategory::HighBpStage1);
    }

    #[test]
    fn test_unknown_only_for_nan() {
        assert_eq!(classify(f64::NAN, 70.0), BloodPressureCategory::Unknown);
        assert_eq!(classify(125.0, f64::NAN), BloodPressureCategory::Unknown);

        // Finite pairs in the 120-130 / >= 80 corner are caught by stage 1
        for systolic in 120..130 {
            for diastolic in 80..90 {
                assert_eq!(
                    classify_reading(systolic, diastolic),
                    BloodPressureCategory::HighBpStage1
                );
            }
        }
    }
}
