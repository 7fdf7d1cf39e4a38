// BP Tracker Domain
// This crate contains the core logic: turning free text into blood pressure
// readings and turning reading sets into summaries.

// Parser configuration
pub mod config;

// Domain entities
pub mod entities;

// Free text → reading pipeline
pub mod parsing;

// Reading set → summary pipeline
pub mod services;

// Testing utilities - only available in tests
#[cfg(test)]
pub mod testing;

pub use config::{ConfigError, ParserConfig};
pub use entities::{
    BloodPressureCategory, ParseOutcome, Reading, ReadingSource, ReadingStats, Summary, Trend,
};
pub use parsing::{ParseFailure, VoiceParser};
pub use services::summarize;
