// Testing utilities for building readings

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::entities::{Reading, ReadingSource};

/// Fixed base time so readings built here compare equal across runs
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Create a test blood pressure reading
pub fn reading(systolic: u16, diastolic: u16, pulse: Option<u16>) -> Reading {
    Reading::new(systolic, diastolic, pulse, base_time(), ReadingSource::Manual)
}

/// Readings one hour apart in ascending order, with a fixed diastolic of 80
pub fn readings_with_systolic(systolic: &[u16]) -> Vec<Reading> {
    systolic
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Reading::new(
                *value,
                80,
                None,
                base_time() + Duration::hours(i as i64),
                ReadingSource::Manual,
            )
        })
        .collect()
}
