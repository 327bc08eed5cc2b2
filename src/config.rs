use std::{env, fmt};

use tracing::warn;

use crate::error::ConfigError;
use crate::game_day::GameDayZone;

pub const DEFAULT_SPORTSDATA_BASE_URL: &str = "https://api.sportsdata.io";

pub const API_KEY_VAR: &str = "MLB_API_KEY";
pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";
pub const BASE_URL_VAR: &str = "SPORTSDATA_BASE_URL";
pub const TIME_ZONE_VAR: &str = "GAME_DAY_TIME_ZONE";

/// Everything the job needs from its deployment, read once at cold start.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub topic_arn: String,
    pub base_url: String,
    pub zone: GameDayZone,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing credentials are not fatal
    /// here: the provider or SNS call will fail and report it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = present(API_KEY_VAR).unwrap_or_else(|| {
            warn!(var = API_KEY_VAR, "API key not set");
            String::new()
        });
        let topic_arn = present(TOPIC_ARN_VAR).unwrap_or_else(|| {
            warn!(var = TOPIC_ARN_VAR, "SNS topic not set");
            String::new()
        });
        let base_url = present(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_SPORTSDATA_BASE_URL.to_string());
        let zone = match present(TIME_ZONE_VAR) {
            Some(name) => name.parse()?,
            None => GameDayZone::default(),
        };

        Ok(Config { api_key, topic_arn, base_url, zone })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("topic_arn", &self.topic_arn)
            .field("base_url", &self.base_url)
            .field("zone", &self.zone)
            .finish()
    }
}
