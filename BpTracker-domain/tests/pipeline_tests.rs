use bp_tracker_domain::parsing::{normalize, parse, ParseFailure};
use bp_tracker_domain::services::{aggregate_with_averages, alerts, classify, summarize, trend};
use bp_tracker_domain::{BloodPressureCategory, Reading, ReadingSource, Trend};
use chrono::{Duration, TimeZone, Utc};

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Parse each line as a voice reading, one day apart, keeping the successes
fn readings_from_lines(lines: &[&str]) -> Vec<Reading> {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
    lines
        .iter()
        .enumerate()
        .filter_map(|(day, line)| {
            let reading = parse(line).into_result().ok()?;
            Some(Reading {
                recorded_at: start + Duration::days(day as i64),
                ..reading
            })
        })
        .collect()
}

#[test]
fn test_spoken_week_to_summary() {
    initialize();

    let lines = [
        "one hundred twenty over seventy eight pulse sixty eight",
        "118/76 72",
        "systolic is 125 diastolic is 79 heart rate 70",
        "not sure what it was",
        "one hundred forty by ninety pulse eighty",
        "145 over 92",
    ];

    let readings = readings_from_lines(&lines);
    assert_eq!(readings.len(), 5);
    assert!(readings.iter().all(|r| r.source == ReadingSource::Voice));

    let summary = summarize(&readings, "7d");
    assert_eq!(summary.total_readings, 5);
    assert_eq!(summary.trend, Some(Trend::Increasing));
    assert_eq!(summary.category, BloodPressureCategory::HighBpStage1);
    assert_eq!(
        summary.alerts,
        vec!["2 reading(s) in hypertensive range detected".to_string()]
    );

    let stats = summary.stats.unwrap();
    assert_eq!(stats.avg_systolic, 129.6);
    assert_eq!(stats.avg_diastolic, 83.0);
    assert_eq!(stats.avg_pulse, 72.5);
    assert_eq!((stats.min_pulse, stats.max_pulse), (68, 80));
}

#[test]
fn test_rejections_are_values() {
    initialize();

    let cases = [
        ("", "EmptyInput"),
        ("    ", "EmptyInput"),
        ("feeling dizzy", "MissingValues"),
        ("120 over 30", "OutOfRange"),
        ("three hundred over eighty", "OutOfRange"),
    ];

    for (text, kind) in cases {
        let outcome = parse(text);
        assert!(!outcome.is_success());
        assert_eq!(outcome.failure().map(ParseFailure::kind), Some(kind), "{text}");
        assert_eq!(outcome.raw_text(), text);
    }
}

#[test]
fn test_normalize_phrases() {
    assert_eq!(normalize("Ninety Five"), "95");
    assert_eq!(normalize("BP one forty over ninety"), "bp 41 over 90");
}

#[test]
fn test_components_agree_with_summary() {
    let readings = readings_from_lines(&["190/100 110", "185/95 105", "150/85 100"]);
    let (stats, averages) = aggregate_with_averages(&readings).unwrap();
    assert_eq!(stats.avg_diastolic, 93.3);

    // Two crisis readings, but the averages (175/93.3) are only stage 2
    assert_eq!(
        classify(averages.systolic, averages.diastolic),
        BloodPressureCategory::HighBpStage2
    );
    assert_eq!(trend(&readings), Trend::Decreasing);

    let alerts = alerts(&readings, averages.pulse);
    assert_eq!(
        alerts,
        vec![
            "3 reading(s) in hypertensive range detected".to_string(),
            "⚠️ 2 reading(s) in hypertensive crisis range!".to_string(),
            "Average heart rate is elevated (105 bpm)".to_string(),
        ]
    );
    assert_eq!(summarize(&readings, "3d").alerts, alerts);
}
