use std::fmt;

use serde::{Deserialize, Deserializer};

use super::{PLACEHOLDER, lenient_text};

/// Lifecycle state reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    /// `Final`, `Postponed` and anything else we have no dedicated layout for.
    Other(String),
}

impl GameStatus {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, GameStatus::Scheduled)
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::InProgress => "InProgress",
            GameStatus::Other(s) => s,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Other(PLACEHOLDER.to_string())
    }
}

impl From<Option<String>> for GameStatus {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) if s == "Scheduled" => GameStatus::Scheduled,
            Some(s) if s == "InProgress" => GameStatus::InProgress,
            Some(s) => GameStatus::Other(s),
            None => GameStatus::default(),
        }
    }
}

impl<'de> Deserialize<'de> for GameStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_text(deserializer).map(GameStatus::from)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
