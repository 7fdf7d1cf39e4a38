use tracing::debug;

use super::aggregator::aggregate_with_averages;
use super::alerts::alerts;
use super::classifier::classify;
use super::suggestions::suggest;
use super::trend::trend;
use crate::entities::{BloodPressureCategory, Reading, Summary};

/// Summarize readings for a time window
///
/// `readings` must be in ascending chronological order. `range` is echoed
/// back unchanged. An empty set produces the "No Data" summary.
pub fn summarize(readings: &[Reading], range: &str) -> Summary {
    let Some((stats, averages)) = aggregate_with_averages(readings) else {
        debug!(range, "No readings to summarize");
        return no_data_summary(range);
    };

    // Thresholds apply to the unrounded means
    let category = classify(averages.systolic, averages.diastolic);
    debug!(
        range,
        total = readings.len(),
        category = %category,
        "Summarized readings"
    );

    Summary {
        stats: Some(stats),
        category,
        suggestion: suggest(category).to_string(),
        trend: Some(trend(readings)),
        total_readings: readings.len(),
        range: range.to_string(),
        alerts: alerts(readings, averages.pulse),
    }
}

fn no_data_summary(range: &str) -> Summary {
    Summary {
        stats: None,
        category: BloodPressureCategory::NoData,
        suggestion: suggest(BloodPressureCategory::NoData).to_string(),
        trend: None,
        total_readings: 0,
        range: range.to_string(),
        alerts: Vec::new(),
    }
}
