use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Dataset, Result, StandingsError};

// The feed types everything as strings, but unplayed games carry `null` scores and a
// few ids show up as bare numbers, so every field goes through `text`.

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub home_id: String,
    #[serde(default, deserialize_with = "text")]
    pub away_id: String,
    #[serde(default, deserialize_with = "text")]
    pub home_name: String,
    #[serde(default, deserialize_with = "text")]
    pub away_name: String,
    #[serde(default, rename = "homeClub", deserialize_with = "text")]
    pub home_club_id: String,
    #[serde(default, rename = "awayClub", deserialize_with = "text")]
    pub away_club_id: String,
    #[serde(default, rename = "homeDivision", deserialize_with = "text")]
    pub home_division_id: String,
    #[serde(default, rename = "awayDivision", deserialize_with = "text")]
    pub away_division_id: String,
    #[serde(default, deserialize_with = "text")]
    pub home_score: String,
    #[serde(default, deserialize_with = "text")]
    pub away_score: String,
    #[serde(default, deserialize_with = "text")]
    pub is_played: String,
    #[serde(default, deserialize_with = "text")]
    pub start_date: String,
    #[serde(default, deserialize_with = "text")]
    pub location_name: String,
}

impl Game {
    /// An empty or absent flag means the game has not been played yet.
    pub fn is_played(&self) -> bool {
        !self.is_played.trim().is_empty()
    }

    pub fn home_goals(&self) -> i64 {
        parse_score(&self.home_score)
    }

    pub fn away_goals(&self) -> i64 {
        parse_score(&self.away_score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Club {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Division {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
}

/// Score text as a number. Anything unparseable, or outside the `i32` range, counts as
/// zero.
pub fn parse_score(raw: &str) -> i64 {
    raw.trim().parse::<i32>().map(i64::from).unwrap_or(0)
}

pub fn decode(
    games_json: &str,
    clubs_json: &str,
    divisions_json: &str,
) -> Result<(Vec<Game>, Vec<Club>, Vec<Division>)> {
    let games: Vec<Game> = decode_array(Dataset::Games, games_json)?;
    let clubs: Vec<Club> = decode_array(Dataset::Clubs, clubs_json)?;
    let divisions: Vec<Division> = decode_array(Dataset::Divisions, divisions_json)?;
    debug!(
        games = games.len(),
        clubs = clubs.len(),
        divisions = divisions.len(),
        "decoded league data"
    );
    Ok((games, clubs, divisions))
}

fn decode_array<T: DeserializeOwned>(which: Dataset, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw.trim()).map_err(|source| StandingsError::Decode { which, source })
}

fn text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(String::new()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected text, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        _ => "scalar",
    }
}
