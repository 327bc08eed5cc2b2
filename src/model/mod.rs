pub mod game;
pub mod inning;
pub mod status;
pub mod team;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use game::GameRecord;
pub use inning::{CumulativeInning, InningScore};
pub use status::GameStatus;
pub use team::TeamRef;

/// Rendered in place of any text field the provider left out.
pub const PLACEHOLDER: &str = "N/A";

/// Accept a string, number, boolean or null where the provider promises text.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }))
}

/// Runs scored in an inning; null, missing or non-numeric counts as zero.
pub(crate) fn lenient_runs<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
