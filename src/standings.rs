use std::collections::HashMap;

use tracing::debug;

use crate::league_data::Game;

const POINTS_PER_WIN: u32 = 3;
const POINTS_PER_TIE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub team_id: String,
    pub club_id: String,
    pub division_id: String,
    pub name: String,
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    pub points: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    /// Games in the order the feed listed them, not by date.
    pub games: Vec<Game>,
}

impl Standing {
    fn seeded(team_id: &str, club_id: &str, division_id: &str, name: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            club_id: club_id.to_string(),
            division_id: division_id.to_string(),
            name: name.to_string(),
            wins: 0,
            ties: 0,
            losses: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            games: Vec::new(),
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for.saturating_sub(self.goals_against)
    }

    pub fn games_played(&self) -> usize {
        self.games.len()
    }

    fn record(&mut self, game: &Game, scored: i64, conceded: i64) {
        self.games.push(game.clone());
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Less => self.losses += 1,
            std::cmp::Ordering::Equal => self.ties += 1,
        }
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.points = POINTS_PER_WIN * self.wins + POINTS_PER_TIE * self.ties;
    }
}

/// Standings keyed by team id, iterated in the order teams first appeared in a played
/// game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsTable {
    rows: Vec<Standing>,
    index: HashMap<String, usize>,
}

impl StandingsTable {
    pub fn get(&self, team_id: &str) -> Option<&Standing> {
        self.index.get(team_id).map(|&idx| &self.rows[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Standing> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct division ids, in first-appearance order.
    pub fn division_ids(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !out.contains(&row.division_id.as_str()) {
                out.push(&row.division_id);
            }
        }
        out
    }

    // Club and division are taken from the game that first mentions the team and are
    // never revisited.
    fn entry(&mut self, team_id: &str, club_id: &str, division_id: &str, name: &str) -> usize {
        if let Some(&idx) = self.index.get(team_id) {
            return idx;
        }
        let idx = self.rows.len();
        self.rows.push(Standing::seeded(team_id, club_id, division_id, name));
        self.index.insert(team_id.to_string(), idx);
        idx
    }
}

/// Fold played games into per-team standings.
pub fn aggregate(games: &[Game]) -> StandingsTable {
    let mut table = StandingsTable::default();
    let mut skipped = 0usize;

    for game in games {
        if !game.is_played() {
            skipped += 1;
            continue;
        }
        let home = table.entry(
            &game.home_id,
            &game.home_club_id,
            &game.home_division_id,
            &game.home_name,
        );
        let away = table.entry(
            &game.away_id,
            &game.away_club_id,
            &game.away_division_id,
            &game.away_name,
        );
        let (home_goals, away_goals) = (game.home_goals(), game.away_goals());
        table.rows[home].record(game, home_goals, away_goals);
        table.rows[away].record(game, away_goals, home_goals);
    }

    debug!(teams = table.len(), skipped, "aggregated standings");
    table
}
