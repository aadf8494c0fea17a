use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use league_standings::http_client::{build_http_client, DEFAULT_TIMEOUT_SECS};
use league_standings::page_fetch::{fetch_page, DEFAULT_STANDINGS_URL};
use league_standings::render::{render, render_division};
use league_standings::{build_league, League};

#[derive(Parser)]
#[command(name = "league_standings")]
#[command(about = "Division standings from a league page's embedded game data", long_about = None)]
struct Cli {
    /// Standings page to fetch
    #[arg(long, env = "STANDINGS_URL", default_value = DEFAULT_STANDINGS_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Read a saved copy of the page instead of fetching it
    #[arg(long)]
    input: Option<PathBuf>,

    /// Show the division table and game list for a team id (repeatable)
    #[arg(short, long = "team")]
    teams: Vec<String>,

    /// Show every division table
    #[arg(long, conflicts_with = "teams")]
    all: bool,

    /// List team ids and names (default when no other mode is given)
    #[arg(long)]
    list_teams: bool,
}

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_tracing();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league_standings=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when some requested team could not be rendered.
fn run(cli: &Cli) -> Result<bool> {
    let html = load_page(cli)?;
    let league = build_league(&html).context("could not build standings from page")?;

    if cli.list_teams || (cli.teams.is_empty() && !cli.all) {
        print_team_list(&league);
    }
    if cli.all {
        print_all_divisions(&league);
    }
    Ok(print_teams(&league, &cli.teams))
}

fn load_page(cli: &Cli) -> Result<String> {
    if let Some(path) = cli.input.as_ref() {
        return fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display()));
    }
    let client = build_http_client(Duration::from_secs(cli.timeout_secs.max(1)))?;
    fetch_page(&client, &cli.url).context("fetch stage failed")
}

fn print_teams(league: &League, team_ids: &[String]) -> bool {
    let mut all_ok = true;
    for (idx, team_id) in team_ids.iter().enumerate() {
        match render(&league.standings, team_id) {
            Ok(text) => {
                if idx > 0 {
                    println!();
                }
                if let Some(standing) = league.standings.get(team_id) {
                    let division = league
                        .division_name(&standing.division_id)
                        .unwrap_or(&standing.division_id);
                    let club = league.club_name(&standing.club_id).unwrap_or("-");
                    println!("{} ({club}) / {division}", standing.name);
                }
                print!("{text}");
            }
            Err(err) => {
                warn!(team_id = team_id.as_str(), "skipping team");
                eprintln!("error: {err}");
                all_ok = false;
            }
        }
    }
    all_ok
}

fn print_all_divisions(league: &League) {
    for (idx, division_id) in league.standings.division_ids().into_iter().enumerate() {
        if idx > 0 {
            println!();
        }
        let title = league.division_name(division_id).unwrap_or(division_id);
        print!(
            "{}",
            render_division(&league.standings, division_id, Some(title))
        );
    }
}

fn print_team_list(league: &League) {
    for standing in league.standings.iter() {
        let division = league
            .division_name(&standing.division_id)
            .unwrap_or(&standing.division_id);
        println!("{}\t{}\t{division}", standing.team_id, standing.name);
    }
}
