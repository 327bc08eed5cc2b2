use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::error::{FetchError, PublishError};
use crate::formatter::format_game;
use crate::game_day::{GameDayZone, iso_date};
use crate::model::GameRecord;
use crate::sns::Publisher;
use crate::sportsdata::GameSource;

pub const SUBJECT: &str = "MLB Game Updates";
pub const SEPARATOR: &str = "\n---\n";
pub const NO_GAMES_MESSAGE: &str = "No games available for today";

/// How a run ended. Failures are logged where they happen, by the source or
/// the publisher.
#[derive(Debug)]
pub enum Outcome {
    Published { scheduled_games: usize },
    FetchFailed(FetchError),
    PublishFailed(PublishError),
}

/// Fetch today's games, announce the scheduled ones, publish.
#[derive(Debug)]
pub struct Pipeline<S, P> {
    source: S,
    publisher: P,
    zone: GameDayZone,
}

impl<S, P> Pipeline<S, P>
where
    S: GameSource,
    P: Publisher,
{
    pub fn new(source: S, publisher: P, zone: GameDayZone) -> Self {
        Self { source, publisher, zone }
    }

    /// For inspecting the source after a run.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// For inspecting the publisher after a run.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub async fn run(&self) -> Outcome {
        self.run_at(Utc::now()).await
    }

    /// One end-to-end run as if the clock read `now_utc`.
    #[instrument(level = "info", skip(self))]
    pub async fn run_at(&self, now_utc: DateTime<Utc>) -> Outcome {
        let date = self.zone.date_for(now_utc);
        info!(date = %iso_date(date), "Fetching games");

        let games = match self.source.games_on(date).await {
            Ok(games) => games,
            Err(e) => return Outcome::FetchFailed(e),
        };

        let scheduled_games = games.iter().filter(|g| g.status.is_scheduled()).count();
        info!(fetched = games.len(), scheduled_games, "Filtered to scheduled games");
        let body = compose_notification(&games);

        match self.publisher.publish(&body, SUBJECT).await {
            Ok(()) => {
                info!("Message published to SNS successfully");
                Outcome::Published { scheduled_games }
            }
            Err(e) => Outcome::PublishFailed(e),
        }
    }
}

/// Notification body for the scheduled games among `games`, in provider order.
pub fn compose_notification(games: &[GameRecord]) -> String {
    let messages: Vec<String> = games
        .iter()
        .filter(|g| g.status.is_scheduled())
        .map(format_game)
        .collect();
    if messages.is_empty() {
        NO_GAMES_MESSAGE.to_string()
    } else {
        messages.join(SEPARATOR)
    }
}
