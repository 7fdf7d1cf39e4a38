//! Ordered regular-expression strategies for pulling systolic, diastolic and
//! pulse values out of normalized text.
//!
//! Each field has its own list. Strategies are tried in order against the
//! whole text and the first one that matches decides the value; within a
//! strategy only the leftmost match counts.

use once_cell::sync::Lazy;
use regex::Regex;
use std::num::ParseIntError;
use tracing::debug;

/// `120 over 80`, `120 by 80`, `120/80`
const COMBINED_PATTERN: &str = r"([0-9]{2,3})\s*(?:over|by|/)\s*([0-9]{2,3})";

/// A named pattern and the capture group holding the value
#[derive(Debug, Clone)]
pub struct ExtractionStrategy {
    name: &'static str,
    pattern: Regex,
    group: usize,
}

impl ExtractionStrategy {
    fn new(name: &'static str, pattern: &str, group: usize) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid extraction pattern"),
            group,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value captured by the leftmost match, if the pattern matches at all
    pub fn apply(&self, text: &str) -> Result<Option<u16>, ParseIntError> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(self.group))
            .map(|digits| digits.as_str().parse::<u16>())
            .transpose()
    }
}

static SYSTOLIC_STRATEGIES: Lazy<Vec<ExtractionStrategy>> = Lazy::new(|| {
    vec![
        ExtractionStrategy::new("combined", COMBINED_PATTERN, 1),
        ExtractionStrategy::new("labeled", r"systolic\s+(?:is\s+)?([0-9]{2,3})", 1),
    ]
});

static DIASTOLIC_STRATEGIES: Lazy<Vec<ExtractionStrategy>> = Lazy::new(|| {
    vec![
        ExtractionStrategy::new("combined", COMBINED_PATTERN, 2),
        ExtractionStrategy::new("labeled", r"diastolic\s+(?:is\s+)?([0-9]{2,3})", 1),
    ]
});

static PULSE_STRATEGIES: Lazy<Vec<ExtractionStrategy>> = Lazy::new(|| {
    vec![
        ExtractionStrategy::new(
            "labeled",
            r"(?:pulse|heart rate|pulse rate|hr)\s+(?:is\s+)?([0-9]{2,3})",
            1,
        ),
        ExtractionStrategy::new(
            "trailing",
            &format!(r"{}\s+([0-9]{{2,3}})", COMBINED_PATTERN),
            3,
        ),
    ]
});

pub fn systolic_strategies() -> &'static [ExtractionStrategy] {
    &SYSTOLIC_STRATEGIES
}

pub fn diastolic_strategies() -> &'static [ExtractionStrategy] {
    &DIASTOLIC_STRATEGIES
}

pub fn pulse_strategies() -> &'static [ExtractionStrategy] {
    &PULSE_STRATEGIES
}

fn first_match(
    field: &'static str,
    strategies: &[ExtractionStrategy],
    text: &str,
) -> Result<Option<u16>, ParseIntError> {
    for strategy in strategies {
        if let Some(value) = strategy.apply(text)? {
            debug!(field, strategy = strategy.name(), value, "Extracted value");
            return Ok(Some(value));
        }
    }
    Ok(None)
}

pub fn extract_systolic(text: &str) -> Result<Option<u16>, ParseIntError> {
    first_match("systolic", systolic_strategies(), text)
}

pub fn extract_diastolic(text: &str) -> Result<Option<u16>, ParseIntError> {
    first_match("diastolic", diastolic_strategies(), text)
}

pub fn extract_pulse(text: &str) -> Result<Option<u16>, ParseIntError> {
    first_match("pulse", pulse_strategies(), text)
}
