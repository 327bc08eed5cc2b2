use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::ConfigError;

/// US Eastern standard time, applied year-round.
pub const EASTERN_OFFSET_HOURS: i64 = -5;

/// How "today" is decided for the game schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameDayZone {
    /// A constant shift from UTC with no daylight-saving adjustment.
    FixedOffset(Duration),
    /// A named IANA zone.
    Named(Tz),
}

impl Default for GameDayZone {
    fn default() -> Self {
        GameDayZone::FixedOffset(Duration::hours(EASTERN_OFFSET_HOURS))
    }
}

impl GameDayZone {
    /// Calendar date in this zone at `now_utc`.
    pub fn date_for(&self, now_utc: DateTime<Utc>) -> NaiveDate {
        match self {
            GameDayZone::FixedOffset(offset) => (now_utc + *offset).date_naive(),
            GameDayZone::Named(tz) => now_utc.with_timezone(tz).date_naive(),
        }
    }
}

impl FromStr for GameDayZone {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        name.trim()
            .parse::<Tz>()
            .map(GameDayZone::Named)
            .map_err(|_| ConfigError::InvalidTimeZone(name.to_string()))
    }
}

/// `YYYY-MM-DD`, as the provider expects it in the URL path.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
