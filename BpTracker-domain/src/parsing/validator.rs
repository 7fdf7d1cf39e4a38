use std::ops::RangeInclusive;

use super::errors::ParseFailure;

/// Plausible systolic values in mmHg
pub const SYSTOLIC_RANGE: RangeInclusive<u16> = 60..=250;

/// Plausible diastolic values in mmHg
pub const DIASTOLIC_RANGE: RangeInclusive<u16> = 40..=150;

/// Values that passed the physiological bounds check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedValues {
    pub systolic: u16,
    pub diastolic: u16,
    pub pulse: Option<u16>,
}

/// Check extracted values against the physiological bounds
///
/// Pulse is passed through as found; only the pressures are checked.
pub fn validate(
    systolic: Option<u16>,
    diastolic: Option<u16>,
    pulse: Option<u16>,
) -> Result<ValidatedValues, ParseFailure> {
    let (Some(systolic), Some(diastolic)) = (systolic, diastolic) else {
        return Err(ParseFailure::MissingValues);
    };

    if !SYSTOLIC_RANGE.contains(&systolic) || !DIASTOLIC_RANGE.contains(&diastolic) {
        return Err(ParseFailure::OutOfRange {
            systolic,
            diastolic,
        });
    }

    Ok(ValidatedValues {
        systolic,
        diastolic,
        pulse,
    })
}
