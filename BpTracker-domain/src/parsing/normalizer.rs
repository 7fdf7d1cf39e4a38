//! Rewrites spelled-out English number words into digits.
//!
//! Runs of adjacent number words collapse into one value by simple
//! accumulation: `hundred` multiplies (or starts at 100), every other word
//! adds. "one hundred twenty" becomes `120`, "one twenty" becomes `21`.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

const HUNDRED: u64 = 100;

static NUMBER_WORDS: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    [
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
        ("hundred", HUNDRED),
    ]
    .into_iter()
    .collect()
});

/// Look up the value of a single number word, ignoring non-letters
pub fn word_value(token: &str) -> Option<u64> {
    let clean: String = token.chars().filter(|c| c.is_ascii_lowercase()).collect();
    NUMBER_WORDS.get(clean.as_str()).copied()
}

/// All recognized number words with their values
pub fn number_words() -> impl Iterator<Item = (&'static str, u64)> {
    NUMBER_WORDS.iter().map(|(word, value)| (*word, *value))
}

/// Lower-case and trim `text`, replacing number-word runs with digits
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut output: Vec<String> = Vec::new();
    let mut accumulated: u64 = 0;
    let mut in_number = false;

    for token in lowered.split_whitespace() {
        match word_value(token) {
            Some(HUNDRED) => {
                accumulated = if accumulated == 0 {
                    HUNDRED
                } else {
                    accumulated.saturating_mul(HUNDRED)
                };
                in_number = true;
            }
            Some(value) => {
                accumulated = accumulated.saturating_add(value);
                in_number = true;
            }
            None => {
                if in_number {
                    output.push(accumulated.to_string());
                    accumulated = 0;
                    in_number = false;
                }
                output.push(token.to_string());
            }
        }
    }

    if in_number {
        output.push(accumulated.to_string());
    }

    let normalized = output.join(" ");
    debug!(normalized = %normalized, "Normalized reading text");
    normalized
}
