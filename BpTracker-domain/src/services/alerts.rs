use super::aggregator::round_half_up;
use crate::entities::Reading;

/// Average pulse above this is reported as elevated
pub const HIGH_PULSE_BPM: f64 = 100.0;

/// Average pulse below this (and above zero) is reported as low
pub const LOW_PULSE_BPM: f64 = 50.0;

fn is_hypertensive(reading: &Reading) -> bool {
    reading.systolic >= 140 || reading.diastolic >= 90
}

/// Check if a reading indicates a hypertensive crisis
pub fn is_hypertensive_crisis(reading: &Reading) -> bool {
    reading.systolic > 180 || reading.diastolic > 120
}

/// Build the alert list for a set of readings
///
/// Order is fixed: hypertensive count, crisis count, then at most one pulse
/// alert. An `avg_pulse` of zero means no pulse data and raises nothing.
pub fn alerts(readings: &[Reading], avg_pulse: f64) -> Vec<String> {
    let mut alerts = Vec::new();

    let high_readings = readings.iter().filter(|r| is_hypertensive(r)).count();
    if high_readings > 0 {
        alerts.push(format!(
            "{} reading(s) in hypertensive range detected",
            high_readings
        ));
    }

    let crisis_readings = readings.iter().filter(|r| is_hypertensive_crisis(r)).count();
    if crisis_readings > 0 {
        alerts.push(format!(
            "⚠️ {} reading(s) in hypertensive crisis range!",
            crisis_readings
        ));
    }

    if avg_pulse > HIGH_PULSE_BPM {
        alerts.push(format!(
            "Average heart rate is elevated ({} bpm)",
            round_half_up(avg_pulse)
        ));
    } else if avg_pulse > 0.0 && avg_pulse < LOW_PULSE_BPM {
        alerts.push(format!(
            "Average heart rate is low ({} bpm)",
            round_half_up(avg_pulse)
        ));
    }

    alerts
}
