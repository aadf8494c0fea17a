use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use league_standings::build_league;
use league_standings::json_extract::extract;
use league_standings::league_data::Game;
use league_standings::render::render;
use league_standings::standings::aggregate;

const TEAMS_PER_DIVISION: usize = 12;
const DIVISIONS: usize = 8;

fn synthetic_season(seed: u64) -> Vec<Game> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut games = Vec::new();
    for div in 0..DIVISIONS {
        for home in 0..TEAMS_PER_DIVISION {
            for away in 0..TEAMS_PER_DIVISION {
                if home == away {
                    continue;
                }
                let played = rng.gen_bool(0.8);
                let home_id = format!("{div}-{home}");
                let away_id = format!("{div}-{away}");
                games.push(Game {
                    id: format!("{}", games.len() + 1),
                    home_name: format!("Team {home_id}"),
                    away_name: format!("Team {away_id}"),
                    home_club_id: format!("c{home}"),
                    away_club_id: format!("c{away}"),
                    home_division_id: format!("d{div}"),
                    away_division_id: format!("d{div}"),
                    home_score: if played { rng.gen_range(0..6).to_string() } else { String::new() },
                    away_score: if played { rng.gen_range(0..6).to_string() } else { String::new() },
                    is_played: if played { "1".to_string() } else { String::new() },
                    home_id,
                    away_id,
                    ..Game::default()
                });
            }
        }
    }
    games
}

fn games_literal(games: &[Game]) -> String {
    let items: Vec<String> = games
        .iter()
        .map(|g| {
            format!(
                r#"{{"id":"{}","homeId":"{}","awayId":"{}","homeName":"{}","awayName":"{}","homeClub":"{}","awayClub":"{}","homeDivision":"{}","awayDivision":"{}","homeScore":"{}","awayScore":"{}","isPlayed":"{}"}}"#,
                g.id,
                g.home_id,
                g.away_id,
                g.home_name,
                g.away_name,
                g.home_club_id,
                g.away_club_id,
                g.home_division_id,
                g.away_division_id,
                g.home_score,
                g.away_score,
                g.is_played
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

fn synthetic_page(games: &[Game]) -> String {
    format!(
        "<html><body><script>var data={{}};data[\"divisions\"]=[{{\"id\":\"d0\",\"name\":\"Zero\"}}];data[\"clubs\"]=[{{\"id\":\"c0\",\"name\":\"Club\"}}];data[\"games\"]={};</script></body></html>",
        games_literal(games)
    )
}

fn bench_extract(c: &mut Criterion) {
    let games = synthetic_season(7);
    let script = format!("data[\"games\"]={};", games_literal(&games));
    c.bench_function("extract_games_literal", |b| {
        b.iter(|| {
            let literal = extract(black_box(&script), "games");
            black_box(literal.len());
        })
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let games = synthetic_season(11);
    c.bench_function("aggregate_season", |b| {
        b.iter(|| {
            let table = aggregate(black_box(&games));
            black_box(table.len());
        })
    });
}

fn bench_full_page(c: &mut Criterion) {
    let page = synthetic_page(&synthetic_season(13));
    c.bench_function("build_and_render_page", |b| {
        b.iter(|| {
            let league = build_league(black_box(&page)).unwrap();
            let text = render(&league.standings, "0-0").unwrap();
            black_box(text.len());
        })
    });
}

criterion_group!(benches, bench_extract, bench_aggregate, bench_full_page);
criterion_main!(benches);
