//! scorecard: headless scorecard printer for ball-by-ball match files.
//!
//! Usage:
//!   scorecard match.yaml
//!   scorecard match.yaml --team "South Africa"
//!   scorecard match.yaml --json
//!   scorecard match.yaml --config scorecard.json

use anyhow::Result;
use scorecard_core::{
    scorecard::{BattingRow, BowlingRow, Scorecard, TotalsRow},
    Scoreboard, ScoreboardConfig,
};
use std::env;

/// Flags that consume the following argument.
const VALUE_FLAGS: [&str; 2] = ["--team", "--config"];

#[derive(serde::Serialize)]
struct Report<'a> {
    source:    &'a str,
    scorecard: Scorecard,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|a| a == "--json");
    let team = flag_value(&args, "--team");
    let Some(path) = positional(&args) else {
        println!("Usage: scorecard <yaml_file_path> [--team NAME] [--json] [--config PATH]");
        return Ok(());
    };

    let config = match flag_value(&args, "--config") {
        Some(config_path) => ScoreboardConfig::load(config_path)?,
        None => ScoreboardConfig::default(),
    };

    let mut scoreboard = Scoreboard::with_config(config);
    if let Err(e) = scoreboard.load(path) {
        log::error!("load of {path} failed: {e}");
        println!("Error: {e}");
        std::process::exit(1);
    }

    let mut scorecard = scoreboard.scorecard();
    if let Some(team) = team {
        scorecard.teams.retain(|card| card.team == team);
        scorecard.totals.retain(|row| row.team == team);
        if scorecard.teams.is_empty() {
            log::warn!("team {team:?} did not bat in {path}");
        }
    }

    if json_mode {
        let report = Report { source: path, scorecard };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Match data loaded successfully!");
        println!("Teams: {:?}", scoreboard.teams());
        println!();
        print_scorecard(&scorecard);
    }

    Ok(())
}

fn print_scorecard(scorecard: &Scorecard) {
    let header = &scorecard.header;
    println!("=== MATCH INFORMATION ===");
    println!("  Match Type:  {}", header.match_type);
    println!("  Venue:       {}", header.venue);
    if !header.city.is_empty() {
        println!("  City:        {}", header.city);
    }
    println!("  Date:        {}", header.date);
    if let Some(teams) = header.teams_line() {
        println!("  Teams:       {teams}");
    }
    if let Some(toss) = &header.toss {
        println!("  Toss:        {toss}");
    }
    println!("  Result:      {}", header.outcome);
    if !header.player_of_match.is_empty() {
        println!("  Player of the Match: {}", header.player_of_match.join(", "));
    }

    for card in &scorecard.teams {
        println!();
        println!("=== {} BATTING ===", card.team.to_uppercase());
        print_batting(&card.batting);
        println!();
        println!("=== {} BOWLING ===", card.team.to_uppercase());
        print_bowling(&card.bowling);
    }

    println!();
    println!("=== TEAM TOTALS ===");
    print_totals(&scorecard.totals);
}

fn print_batting(rows: &[BattingRow]) {
    if rows.is_empty() {
        println!("  (No batting data)");
        return;
    }
    println!(
        "  {:>3}  {:<24} {:<32} {:>4} {:>4} {:>3} {:>3} {:>7}",
        "#", "Batter", "Dismissal", "R", "B", "4s", "6s", "SR"
    );
    for row in rows {
        let position = row.position.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "  {:>3}  {:<24} {:<32} {:>4} {:>4} {:>3} {:>3} {:>7.2}",
            position, row.player, row.how_out, row.runs, row.balls, row.fours, row.sixes,
            row.strike_rate
        );
    }
}

fn print_bowling(rows: &[BowlingRow]) {
    if rows.is_empty() {
        println!("  (No bowling data)");
        return;
    }
    println!(
        "  {:<24} {:>5} {:>3} {:>4} {:>3} {:>6} {:>4}",
        "Bowler", "O", "M", "R", "W", "Econ", "Dots"
    );
    for row in rows {
        println!(
            "  {:<24} {:>5} {:>3} {:>4} {:>3} {:>6.2} {:>4}",
            row.bowler, row.overs, row.maidens, row.runs, row.wickets, row.economy, row.dots
        );
    }
}

fn print_totals(rows: &[TotalsRow]) {
    if rows.is_empty() {
        println!("  (No team totals available)");
        return;
    }
    for row in rows {
        println!(
            "  {:<24} {}/{} ({} ov) | Extras: {} | RR: {:.2}",
            row.team, row.runs, row.wickets, row.overs, row.extras, row.run_rate
        );
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        } else if !arg.starts_with("--") {
            return Some(arg.as_str());
        }
    }
    None
}
