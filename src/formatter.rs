use std::fmt;

use crate::model::{GameRecord, GameStatus};
use crate::model::inning::{InningScore, running_totals};

pub const DETAILS_UNAVAILABLE: &str = "Details are unavailable at the moment.";

/// "Away vs Home"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup<'a> {
    pub away: &'a str,
    pub home: &'a str,
}

impl fmt::Display for Matchup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.away, self.home)
    }
}

/// What gets said about a game, resolved from its status. Each variant holds
/// exactly the fields its layout prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSummary<'a> {
    Scheduled {
        matchup: Matchup<'a>,
        start_time: &'a str,
        channel: &'a str,
    },
    InProgress {
        matchup: Matchup<'a>,
        current_score: &'a str,
        last_play: &'a str,
        channel: &'a str,
        inning_scores: String,
    },
    Unavailable {
        status: &'a str,
        matchup: Matchup<'a>,
    },
}

impl<'a> From<&'a GameRecord> for GameSummary<'a> {
    fn from(game: &'a GameRecord) -> Self {
        let matchup = Matchup { away: game.away_team_name(), home: game.home_team_name() };
        match &game.status {
            GameStatus::Scheduled => GameSummary::Scheduled {
                matchup,
                start_time: game.start_time(),
                channel: game.channel(),
            },
            GameStatus::InProgress => GameSummary::InProgress {
                matchup,
                current_score: game.final_score(),
                last_play: game.last_play(),
                channel: game.channel(),
                inning_scores: inning_scores(&game.innings),
            },
            GameStatus::Other(status) => GameSummary::Unavailable { status, matchup },
        }
    }
}

impl fmt::Display for GameSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameSummary::Scheduled { matchup, start_time, channel } => {
                writeln!(f, "Game Status: Scheduled")?;
                writeln!(f, "{matchup}")?;
                writeln!(f, "Start Time: {start_time}")?;
                writeln!(f, "Channel: {channel}")
            }
            GameSummary::InProgress { matchup, current_score, last_play, channel, inning_scores } => {
                writeln!(f, "Game Status: InProgress")?;
                writeln!(f, "{matchup}")?;
                writeln!(f, "Current Score: {current_score}")?;
                writeln!(f, "Last Play: {last_play}")?;
                writeln!(f, "Channel: {channel}")?;
                writeln!(f, "Inning Scores: {inning_scores}")
            }
            GameSummary::Unavailable { status, matchup } => {
                writeln!(f, "Game Status: {status}")?;
                writeln!(f, "{matchup}")?;
                writeln!(f, "{DETAILS_UNAVAILABLE}")
            }
        }
    }
}

/// Cumulative score after each inning, e.g. `Inning 1: 1-0,Inning 2: 1-2`.
pub fn inning_scores(innings: &[InningScore]) -> String {
    running_totals(innings)
        .map(|c| format!("Inning {}: {}-{}", c.number, c.away_total, c.home_total))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render one game as a newline-terminated text block.
pub fn format_game(game: &GameRecord) -> String {
    GameSummary::from(game).to_string()
}
