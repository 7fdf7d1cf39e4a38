use crate::entities::{Reading, ReadingStats};

/// Round half-up to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Round half-up to the nearest integer
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn mean(values: &[u16]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| f64::from(*v)).sum();
    sum / values.len() as f64
}

/// Unrounded averages of a reading set
///
/// Classification and pulse alerts read these; only the reported
/// `ReadingStats` carry the one-decimal values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub systolic: f64,
    pub diastolic: f64,

    /// 0 when no reading carries a pulse
    pub pulse: f64,
}

/// Averages and extremes over a set of readings, `None` for an empty set
///
/// Pulse statistics only consider readings that carry a pulse and are all
/// zero when none do.
pub fn aggregate(readings: &[Reading]) -> Option<ReadingStats> {
    aggregate_with_averages(readings).map(|(stats, _)| stats)
}

/// Reported statistics together with the unrounded averages they came from
pub fn aggregate_with_averages(readings: &[Reading]) -> Option<(ReadingStats, Averages)> {
    if readings.is_empty() {
        return None;
    }

    let systolic: Vec<u16> = readings.iter().map(|r| r.systolic).collect();
    let diastolic: Vec<u16> = readings.iter().map(|r| r.diastolic).collect();
    let pulse: Vec<u16> = readings.iter().filter_map(|r| r.pulse).collect();

    let averages = Averages {
        systolic: mean(&systolic),
        diastolic: mean(&diastolic),
        pulse: mean(&pulse),
    };

    let stats = ReadingStats {
        avg_systolic: round_one_decimal(averages.systolic),
        avg_diastolic: round_one_decimal(averages.diastolic),
        avg_pulse: round_one_decimal(averages.pulse),
        min_systolic: systolic.iter().copied().min().unwrap_or(0),
        max_systolic: systolic.iter().copied().max().unwrap_or(0),
        min_diastolic: diastolic.iter().copied().min().unwrap_or(0),
        max_diastolic: diastolic.iter().copied().max().unwrap_or(0),
        min_pulse: pulse.iter().copied().min().unwrap_or(0),
        max_pulse: pulse.iter().copied().max().unwrap_or(0),
    };

    Some((stats, averages))
}
