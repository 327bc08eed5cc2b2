use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{PLACEHOLDER, lenient_runs, lenient_text};

/// Runs scored by each side in a single inning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InningScore {
    #[serde(default, deserialize_with = "lenient_text")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient_runs")]
    pub away_score: i64,
    #[serde(default, deserialize_with = "lenient_runs")]
    pub home_score: i64,
}

/// Innings as an array of objects. Anything else reads as no innings, and
/// elements that are not objects are skipped.
pub(crate) fn lenient_innings<'de, D>(deserializer: D) -> Result<Vec<InningScore>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Score of the game as it stood at the end of an inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativeInning<'a> {
    pub number: &'a str,
    pub away_total: i64,
    pub home_total: i64,
}

/// Running totals over `innings`, in the order given.
pub fn running_totals(innings: &[InningScore]) -> impl Iterator<Item = CumulativeInning<'_>> {
    innings.iter().scan((0i64, 0i64), |(away, home), inning| {
        *away = away.saturating_add(inning.away_score);
        *home = home.saturating_add(inning.home_score);
        Some(CumulativeInning {
            number: inning.number.as_deref().unwrap_or(PLACEHOLDER),
            away_total: *away,
            home_total: *home,
        })
    })
}
