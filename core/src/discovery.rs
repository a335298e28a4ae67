//! Team discovery: the first pass over a match.
//!
//! Enumerates every batting side before any innings is aggregated, so the
//! bowling side of each innings can be resolved and every team gets a table
//! even if it contributes nothing.

use crate::{config::ScoreboardConfig, match_file::Innings, types::TeamName};

/// Distinct batting teams in first-seen order. Innings without a team are
/// grouped under the configured unknown-team name.
pub fn discover_teams(innings: &[Innings], config: &ScoreboardConfig) -> Vec<TeamName> {
    let mut teams: Vec<TeamName> = Vec::new();
    for inn in innings {
        let team = batting_team(inn, config);
        if !teams.iter().any(|t| t == team) {
            teams.push(team.to_string());
        }
    }
    if teams.len() > 2 {
        log::warn!(
            "{} batting teams found; bowling sides resolve to the first other team",
            teams.len()
        );
    }
    teams
}

pub fn batting_team<'a>(innings: &'a Innings, config: &'a ScoreboardConfig) -> &'a str {
    innings.team.as_deref().unwrap_or(&config.unknown_team)
}

/// The first known team that is not batting, or the fallback name when the
/// match has only one side.
pub fn bowling_team<'a>(
    batting: &str,
    teams: &'a [TeamName],
    config: &'a ScoreboardConfig,
) -> &'a str {
    teams
        .iter()
        .map(String::as_str)
        .find(|t| *t != batting)
        .unwrap_or(&config.fallback_bowling_team)
}
