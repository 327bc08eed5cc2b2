use std::fmt;
use std::future::Future;

use chrono::NaiveDate;
use tracing::{debug, error, info, info_span};

use crate::config::Config;
use crate::error::FetchError;
use crate::game_day::iso_date;
use crate::model::GameRecord;

/// Somewhere the day's games can be fetched from.
pub trait GameSource {
    fn games_on(&self, date: NaiveDate) -> impl Future<Output = Result<Vec<GameRecord>, FetchError>> + Send;
}

/// Client for the SportsData.io MLB scores API.
#[derive(Clone)]
pub struct SportsData {
    base_url: String,
    api_key: String,
}

impl SportsData {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    fn games_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/v3/mlb/scores/json/GamesByDate/{}?key={}",
            self.base_url.trim_end_matches('/'),
            iso_date(date),
            self.api_key
        )
    }

    /// Blocking GET of one day's games. The URL carries the API key, so only the
    /// date is recorded on the span.
    fn fetch_blocking(url: &str, date: NaiveDate) -> Result<Vec<GameRecord>, FetchError> {
        let response_result = {
            let _span = info_span!("sportsdata_fetch", date = %date).entered();
            ureq::get(url).call()
        };
        let response = response_result.inspect_err(|e| error!(error = %e, "Request to SportsData failed"))?;
        let mut body_reader = response.into_body();
        let body = body_reader.read_to_string().map_err(|e| {
            error!(error = %e, "Failed to read SportsData response body");
            FetchError::Body(e)
        })?;
        Self::parse_games(&body)
    }

    /// Decode a `GamesByDate` response body (no network).
    pub fn parse_games(body: &str) -> Result<Vec<GameRecord>, FetchError> {
        debug!(body = %body, "Raw SportsData response");
        let games: Vec<GameRecord> = serde_json::from_str(body).inspect_err(|e| {
            error!(error = %e, bytes = body.len(), "Failed to decode SportsData response");
        })?;
        info!(count = games.len(), "Fetched games");
        Ok(games)
    }
}

impl GameSource for SportsData {
    async fn games_on(&self, date: NaiveDate) -> Result<Vec<GameRecord>, FetchError> {
        // spawn_blocking needs 'static input, so the task owns its URL.
        let url = self.games_url(date);
        tokio::task::spawn_blocking(move || Self::fetch_blocking(&url, date)).await?
    }
}

impl fmt::Debug for SportsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SportsData")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
