use chrono::NaiveDateTime;

use crate::error::{Result, StandingsError};
use crate::league_data::Game;
use crate::standings::{Standing, StandingsTable};

const NAME_WIDTH: usize = 32;

/// Standings for one division, most points first.
///
/// Teams level on points keep the order the table holds them in; no goal-difference or
/// head-to-head tie-break is applied.
pub fn division_standings<'a>(table: &'a StandingsTable, division_id: &str) -> Vec<&'a Standing> {
    let mut rows: Vec<&Standing> = table
        .iter()
        .filter(|s| s.division_id == division_id)
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}

/// The division table for `team_id` followed by that team's games.
pub fn render(table: &StandingsTable, team_id: &str) -> Result<String> {
    let team = table
        .get(team_id)
        .ok_or_else(|| StandingsError::UnknownTeam(team_id.to_string()))?;

    let mut out = String::new();
    push_table(&mut out, &division_standings(table, &team.division_id));
    out.push('\n');
    push_line(&mut out, &format!("Games: {}", team.name));
    for game in &team.games {
        push_game_row(&mut out, game);
    }
    Ok(out)
}

/// The table for a whole division, under an optional title line.
pub fn render_division(table: &StandingsTable, division_id: &str, title: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        push_line(&mut out, title);
    }
    push_table(&mut out, &division_standings(table, division_id));
    out
}

fn push_table(out: &mut String, rows: &[&Standing]) {
    push_line(
        out,
        &format!(
            "{:<NAME_WIDTH$} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
            "Team", "W", "L", "T", "Pts", "GF", "GA", "GD"
        ),
    );
    for s in rows {
        let row = format!(
            "{:<NAME_WIDTH$} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>+4}",
            truncate(&s.name, NAME_WIDTH),
            s.wins,
            s.losses,
            s.ties,
            s.points,
            s.goals_for,
            s.goals_against,
            s.goal_difference()
        );
        push_line(out, &row);
    }
}

fn push_game_row(out: &mut String, game: &Game) {
    let fixture = format!("{} vs {}", game.home_name, game.away_name);
    let score = format!("{}-{}", game.home_score.trim(), game.away_score.trim());
    let line = match game_date(game) {
        Some(date) => format!("{date}  {fixture}  {score}"),
        None => format!("{fixture}  {score}"),
    };
    push_line(out, &line);
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn game_date(game: &Game) -> Option<String> {
    NaiveDateTime::parse_from_str(game.start_date.trim(), "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    name.chars().take(width).collect()
}
