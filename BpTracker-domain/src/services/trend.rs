use crate::entities::{Reading, Trend};

/// Minimum number of readings needed to compare two halves
pub const MIN_TREND_READINGS: usize = 3;

/// Change in mean systolic pressure (mmHg) treated as a real movement
pub const TREND_THRESHOLD: f64 = 5.0;

fn mean_systolic(readings: &[Reading]) -> f64 {
    if readings.is_empty() {
        return 0.0;
    }
    let sum: f64 = readings.iter().map(|r| f64::from(r.systolic)).sum();
    sum / readings.len() as f64
}

/// Compare mean systolic pressure of the later half against the earlier half
///
/// `readings` must be in ascending chronological order. The split point is
/// `n / 2`, so with an odd count the later half is the larger one.
pub fn trend(readings: &[Reading]) -> Trend {
    if readings.len() < MIN_TREND_READINGS {
        return Trend::InsufficientData;
    }

    let (first_half, second_half) = readings.split_at(readings.len() / 2);
    let diff = mean_systolic(second_half) - mean_systolic(first_half);

    if diff > TREND_THRESHOLD {
        Trend::Increasing
    } else if diff < -TREND_THRESHOLD {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}
