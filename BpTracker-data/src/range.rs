//! Mapping from short range labels ("7d", "1m", ...) to lookback windows

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Lookback window selected by a range label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    OneDay,
    ThreeDays,
    FiveDays,
    #[default]
    OneWeek,
    TwoWeeks,
    OneMonth,
    ThreeMonths,
    All,
}

impl TimeRange {
    /// Parse a range label, case-insensitively
    ///
    /// Unrecognized labels fall back to one week.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "1d" => TimeRange::OneDay,
            "3d" => TimeRange::ThreeDays,
            "5d" => TimeRange::FiveDays,
            "1w" | "7d" => TimeRange::OneWeek,
            "2w" => TimeRange::TwoWeeks,
            "1m" => TimeRange::OneMonth,
            "3m" => TimeRange::ThreeMonths,
            "all" => TimeRange::All,
            _ => TimeRange::OneWeek,
        }
    }

    /// Start of the window ending at `now`
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimeRange::OneDay => now - Duration::days(1),
            TimeRange::ThreeDays => now - Duration::days(3),
            TimeRange::FiveDays => now - Duration::days(5),
            TimeRange::OneWeek => now - Duration::weeks(1),
            TimeRange::TwoWeeks => now - Duration::weeks(2),
            TimeRange::OneMonth => months_before(now, 1),
            TimeRange::ThreeMonths => months_before(now, 3),
            TimeRange::All => months_before(now, 12 * 10),
        }
    }
}

fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeRange::from_label("1d"), TimeRange::OneDay);
        assert_eq!(TimeRange::from_label("3D"), TimeRange::ThreeDays);
        assert_eq!(TimeRange::from_label("5d"), TimeRange::FiveDays);
        assert_eq!(TimeRange::from_label("1W"), TimeRange::OneWeek);
        assert_eq!(TimeRange::from_label("7d"), TimeRange::OneWeek);
        assert_eq!(TimeRange::from_label("2w"), TimeRange::TwoWeeks);
        assert_eq!(TimeRange::from_label("1M"), TimeRange::OneMonth);
        assert_eq!(TimeRange::from_label("3m"), TimeRange::ThreeMonths);
        assert_eq!(TimeRange::from_label("ALL"), TimeRange::All);
    }

    #[test]
    fn test_unknown_label_is_one_week() {
        assert_eq!(TimeRange::from_label("fortnight"), TimeRange::OneWeek);
        assert_eq!(TimeRange::from_label(""), TimeRange::OneWeek);
    }

    #[test]
    fn test_windows() {
        let now = now();
        assert_eq!(TimeRange::OneDay.since(now), Utc.with_ymd_and_hms(2024, 3, 30, 12, 0, 0).unwrap());
        assert_eq!(TimeRange::TwoWeeks.since(now), Utc.with_ymd_and_hms(2024, 3, 17, 12, 0, 0).unwrap());
        // Month arithmetic clamps to the end of shorter months
        assert_eq!(TimeRange::OneMonth.since(now), Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
        assert_eq!(TimeRange::ThreeMonths.since(now), Utc.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap());
        assert_eq!(TimeRange::All.since(now), Utc.with_ymd_and_hms(2014, 3, 31, 12, 0, 0).unwrap());
    }
}
