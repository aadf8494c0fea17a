use tracing::debug;

use crate::error::{Dataset, Result};
use crate::json_extract::extract;
use crate::league_data::{decode, Club, Division, Game};
use crate::script_locator::find_script;
use crate::standings::{aggregate, StandingsTable};

/// Everything one run of the page produces.
#[derive(Debug, Clone)]
pub struct League {
    pub games: Vec<Game>,
    pub clubs: Vec<Club>,
    pub divisions: Vec<Division>,
    pub standings: StandingsTable,
}

impl League {
    pub fn division_name(&self, division_id: &str) -> Option<&str> {
        self.divisions
            .iter()
            .find(|d| d.id == division_id)
            .map(|d| d.name.as_str())
    }

    pub fn club_name(&self, club_id: &str) -> Option<&str> {
        self.clubs
            .iter()
            .find(|c| c.id == club_id)
            .map(|c| c.name.as_str())
    }
}

/// Locate, extract, decode and aggregate the league data embedded in `html`.
pub fn build_league(html: &str) -> Result<League> {
    let script = find_script(html)?;
    let games_json = extract(&script, Dataset::Games.key());
    let clubs_json = extract(&script, Dataset::Clubs.key());
    let divisions_json = extract(&script, Dataset::Divisions.key());

    let (games, clubs, divisions) = decode(&games_json, &clubs_json, &divisions_json)?;
    let standings = aggregate(&games);
    debug!(teams = standings.len(), "league built");

    Ok(League {
        games,
        clubs,
        divisions,
        standings,
    })
}
