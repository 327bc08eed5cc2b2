use serde::Deserialize;

use super::inning::lenient_innings;
use super::{GameStatus, InningScore, PLACEHOLDER, TeamRef, lenient_text};

/// One game as returned by the provider's `GamesByDate` endpoint. Every field is
/// optional; accessors substitute the placeholder for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRecord {
    #[serde(default)]
    pub away_team: Option<TeamRef>,
    #[serde(default)]
    pub home_team: Option<TeamRef>,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default, deserialize_with = "lenient_text")]
    pub final_score: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_play: Option<String>,
    #[serde(default, deserialize_with = "lenient_innings")]
    pub innings: Vec<InningScore>,
}

impl GameRecord {
    pub fn away_team_name(&self) -> &str {
        self.away_team.as_ref().and_then(TeamRef::name).unwrap_or(PLACEHOLDER)
    }

    pub fn home_team_name(&self) -> &str {
        self.home_team.as_ref().and_then(TeamRef::name).unwrap_or(PLACEHOLDER)
    }

    pub fn final_score(&self) -> &str {
        self.final_score.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn start_time(&self) -> &str {
        self.start_time.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn channel(&self) -> &str {
        self.channel.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn last_play(&self) -> &str {
        self.last_play.as_deref().unwrap_or(PLACEHOLDER)
    }
}
