//! Parser configuration loaded from the environment

use thiserror::Error;

/// Environment variable holding the maximum accepted input length
pub const MAX_INPUT_CHARS_VAR: &str = "BP_MAX_INPUT_CHARS";

/// Default bound on input length, in characters
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Settings for the free-text reading parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Inputs longer than this many characters are rejected
    pub max_input_chars: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl ParserConfig {
    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_input_chars = match lookup(MAX_INPUT_CHARS_VAR) {
            Some(value) => parse_positive(MAX_INPUT_CHARS_VAR, &value)?,
            None => DEFAULT_MAX_INPUT_CHARS,
        };

        Ok(Self { max_input_chars })
    }
}

fn parse_positive(name: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
