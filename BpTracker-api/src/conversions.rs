use bp_tracker_data::models::{ReadingType, StoredReading};
use bp_tracker_domain::services::classify_reading;
use bp_tracker_domain::{ParseOutcome, Reading, ReadingSource, Summary};
use uuid::Uuid;

use crate::entities::{GraphPointResponse, ParsedReadingResponse, ReadingResponse, SummaryResponse};

// Conversion functions between data models, domain entities and public payloads
// These functions follow the pattern convert_to_[target]_[model_name]

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const TIME_LABEL_FORMAT: &str = "%b %d, %H:%M";

/// Helper function to safely parse a string ID to UUID
///
/// When an invalid UUID is provided, it returns a descriptive error message.
pub fn parse_string_to_uuid(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("Invalid UUID format: {}", id))
}

pub fn convert_to_domain_source(reading_type: ReadingType) -> ReadingSource {
    match reading_type {
        ReadingType::Manual => ReadingSource::Manual,
        ReadingType::Voice => ReadingSource::Voice,
        ReadingType::Text => ReadingSource::Text,
    }
}

pub fn convert_to_data_reading_type(source: ReadingSource) -> ReadingType {
    match source {
        ReadingSource::Manual => ReadingType::Manual,
        ReadingSource::Voice => ReadingType::Voice,
        ReadingSource::Text => ReadingType::Text,
    }
}

/// Convert from data model to domain entity for a reading
pub fn convert_to_domain_reading(stored: &StoredReading) -> Reading {
    Reading::new(
        stored.systolic,
        stored.diastolic,
        stored.pulse,
        stored.recorded_at,
        convert_to_domain_source(stored.reading_type),
    )
}

/// Convert from data model to public response for a reading
pub fn convert_to_reading_response(stored: &StoredReading) -> ReadingResponse {
    ReadingResponse {
        id: stored.id,
        systolic: stored.systolic,
        diastolic: stored.diastolic,
        pulse: stored.pulse,
        notes: stored.notes.clone(),
        recorded_at: stored.recorded_at.format(TIMESTAMP_FORMAT).to_string(),
        reading_type: stored.reading_type.to_string(),
        category: classify_reading(stored.systolic, stored.diastolic).to_string(),
    }
}

/// Convert from data model to a chart point
pub fn convert_to_graph_point(stored: &StoredReading) -> GraphPointResponse {
    GraphPointResponse {
        timestamp: stored.recorded_at.format(TIMESTAMP_FORMAT).to_string(),
        time_label: stored.recorded_at.format(TIME_LABEL_FORMAT).to_string(),
        systolic: stored.systolic,
        diastolic: stored.diastolic,
        pulse: stored.pulse.unwrap_or(0),
        category: classify_reading(stored.systolic, stored.diastolic).to_string(),
    }
}

/// Convert a parse outcome into the public parse response
pub fn convert_to_parsed_response(outcome: &ParseOutcome) -> ParsedReadingResponse {
    let reading = outcome.reading();
    ParsedReadingResponse {
        systolic: reading.map(|r| r.systolic),
        diastolic: reading.map(|r| r.diastolic),
        pulse: reading.and_then(|r| r.pulse),
        raw_text: outcome.raw_text().to_string(),
        success: outcome.is_success(),
        message: outcome.message(),
    }
}

/// Flatten a domain summary into the public summary response
pub fn convert_to_summary_response(summary: &Summary) -> SummaryResponse {
    let stats = summary.stats.unwrap_or_default();
    SummaryResponse {
        avg_systolic: stats.avg_systolic,
        avg_diastolic: stats.avg_diastolic,
        avg_pulse: stats.avg_pulse,
        max_systolic: stats.max_systolic,
        min_systolic: stats.min_systolic,
        max_diastolic: stats.max_diastolic,
        min_diastolic: stats.min_diastolic,
        max_pulse: stats.max_pulse,
        min_pulse: stats.min_pulse,
        category: summary.category.to_string(),
        suggestion: summary.suggestion.clone(),
        trend: summary.trend.map(|trend| trend.display_label()),
        total_readings: summary.total_readings,
        range: summary.range.clone(),
        alerts: summary.alerts.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_tracker_data::models::UserId;
    use bp_tracker_domain::services::summarize;
    use chrono::{TimeZone, Utc};

    fn stored(systolic: u16, diastolic: u16, pulse: Option<u16>) -> StoredReading {
        let recorded_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        StoredReading {
            id: Uuid::new_v4(),
            user_id: UserId::new("alice"),
            systolic,
            diastolic,
            pulse,
            notes: Some("after coffee".to_string()),
            reading_type: ReadingType::Voice,
            recorded_at,
            created_at: recorded_at,
        }
    }

    #[test]
    fn test_convert_to_domain_reading() {
        let data_reading = stored(128, 82, Some(70));
        let domain_reading = convert_to_domain_reading(&data_reading);

        assert_eq!(domain_reading.systolic, 128);
        assert_eq!(domain_reading.diastolic, 82);
        assert_eq!(domain_reading.pulse, Some(70));
        assert_eq!(domain_reading.recorded_at, data_reading.recorded_at);
        assert_eq!(domain_reading.source, ReadingSource::Voice);
    }

    #[test]
    fn test_convert_to_reading_response() {
        let response = convert_to_reading_response(&stored(145, 85, None));

        assert_eq!(response.recorded_at, "2024-03-01 08:30");
        assert_eq!(response.reading_type, "VOICE");
        assert_eq!(response.category, "High BP Stage 2");
        assert_eq!(response.notes.as_deref(), Some("after coffee"));
    }

    #[test]
    fn test_convert_to_graph_point() {
        let point = convert_to_graph_point(&stored(118, 76, None));

        assert_eq!(point.timestamp, "2024-03-01 08:30");
        assert_eq!(point.time_label, "Mar 01, 08:30");
        assert_eq!(point.pulse, 0);
        assert_eq!(point.category, "Normal");
    }

    #[test]
    fn test_source_round_trip() {
        for source in [ReadingSource::Manual, ReadingSource::Voice, ReadingSource::Text] {
            assert_eq!(convert_to_domain_source(convert_to_data_reading_type(source)), source);
        }
    }

    #[test]
    fn test_convert_empty_summary() {
        let response = convert_to_summary_response(&summarize(&[], "7d"));

        assert_eq!(response.category, "No Data");
        assert_eq!(response.total_readings, 0);
        assert_eq!(response.avg_systolic, 0.0);
        assert_eq!(response.trend, None);
        assert!(response.alerts.is_empty());
    }

    #[test]
    fn test_convert_summary_trend_has_arrow() {
        let readings: Vec<_> = [120, 121, 122]
            .iter()
            .map(|s| convert_to_domain_reading(&stored(*s, 78, None)))
            .collect();
        let response = convert_to_summary_response(&summarize(&readings, "1w"));

        assert_eq!(response.trend.as_deref(), Some("Stable →"));
        assert_eq!(response.range, "1w");
    }
}
