use bp_tracker_data::models::UserId;
use bp_tracker_domain::{ConfigError, ParserConfig};

/// Environment variable naming the user the CLI stores readings for
pub const USER_ID_VAR: &str = "BP_USER_ID";

/// Environment variable holding the range label used when none is given
pub const DEFAULT_RANGE_VAR: &str = "BP_DEFAULT_RANGE";

const DEFAULT_USER_ID: &str = "local";
const DEFAULT_RANGE: &str = "7d";

/// Application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub user_id: UserId,
    pub default_range: String,
    pub parser: ParserConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: UserId::new(DEFAULT_USER_ID),
            default_range: DEFAULT_RANGE.to_string(),
            parser: ParserConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            user_id: UserId::new(non_empty(USER_ID_VAR).unwrap_or_else(|| DEFAULT_USER_ID.to_string())),
            default_range: non_empty(DEFAULT_RANGE_VAR).unwrap_or_else(|| DEFAULT_RANGE.to_string()),
            parser: ParserConfig::from_lookup(&lookup)?,
        })
    }
}
