use serde::Deserialize;

use super::lenient_text;

/// A team as it appears on a game record: either a nested object carrying
/// `TeamName` or the bare abbreviation string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TeamRef {
    Name(String),
    Detailed {
        #[serde(rename = "TeamName", default, deserialize_with = "lenient_text")]
        team_name: Option<String>,
    },
    Unrecognized(serde_json::Value),
}

impl TeamRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            TeamRef::Name(name) => Some(name),
            TeamRef::Detailed { team_name } => team_name.as_deref(),
            TeamRef::Unrecognized(_) => None,
        }
    }
}
