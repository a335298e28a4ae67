//! In-memory statistic tables.
//!
//! RULE: Only the aggregator writes to the store.
//! Accessors read it; nothing else holds a mutable reference.

use crate::types::{overs_from_balls, PlayerName, TeamName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingRecord {
    pub runs:     u32,
    /// Legal deliveries faced. Extras-only balls are not counted.
    pub balls:    u32,
    pub fours:    u32,
    pub sixes:    u32,
    pub out:      bool,
    /// Formatted dismissal, e.g. `c Smith b Lee`. Empty while not out.
    pub how_out:  String,
    /// 1-based order of first appearance on strike. `None` for a player who
    /// never faced a ball (a non-striker run out, say).
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingRecord {
    /// Legal deliveries bowled.
    pub balls:   u32,
    pub runs:    u32,
    pub wickets: u32,
    pub maidens: u32,
    pub dots:    u32,
}

impl BowlingRecord {
    /// Overs bowled, where each legal ball is one sixth of an over.
    pub fn overs(&self) -> f64 {
        overs_from_balls(self.balls.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamTotals {
    pub runs:     u32,
    pub wickets:  u32,
    /// Completed overs plus the partial-over fraction.
    pub overs:    f64,
    /// Legal balls the overs figure is built from. Wide enough for any
    /// over index a ball key can carry.
    pub balls:    u64,
    pub extras:   u32,
    pub run_rate: f64,
}

#[derive(Debug, Clone, Default)]
pub struct StatStore {
    batting:   HashMap<TeamName, HashMap<PlayerName, BattingRecord>>,
    bowling:   HashMap<TeamName, HashMap<PlayerName, BowlingRecord>>,
    totals:    HashMap<TeamName, TeamTotals>,
    /// Last batting position handed out per team.
    positions: HashMap<TeamName, u32>,
    /// Teams in the order they were registered.
    teams:     Vec<TeamName>,
}

impl StatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate empty tables for `team` so later reads never miss it.
    pub fn register_team(&mut self, team: &str) {
        if self.totals.contains_key(team) {
            return;
        }
        self.batting.insert(team.to_string(), HashMap::new());
        self.bowling.insert(team.to_string(), HashMap::new());
        self.totals.insert(team.to_string(), TeamTotals::default());
        self.teams.push(team.to_string());
    }

    // ── Writes ─────────────────────────────────────────────────

    /// Get-or-insert a zeroed batting record.
    pub fn batter_mut(&mut self, team: &str, player: &str) -> &mut BattingRecord {
        self.batting
            .entry(team.to_string())
            .or_default()
            .entry(player.to_string())
            .or_default()
    }

    /// Get-or-insert a zeroed bowling record.
    pub fn bowler_mut(&mut self, team: &str, bowler: &str) -> &mut BowlingRecord {
        self.bowling
            .entry(team.to_string())
            .or_default()
            .entry(bowler.to_string())
            .or_default()
    }

    /// Give `player` the team's next batting position on their first time
    /// on strike. Positions already assigned, in this or an earlier innings,
    /// are kept. Returns the player's position.
    pub fn assign_position(&mut self, team: &str, player: &str) -> u32 {
        if let Some(position) = self.batter_mut(team, player).position {
            return position;
        }
        let counter = self.positions.entry(team.to_string()).or_insert(0);
        *counter += 1;
        let position = *counter;
        self.batter_mut(team, player).position = Some(position);
        position
    }

    /// Replace the totals for `team`.
    pub fn set_totals(&mut self, team: &str, totals: TeamTotals) {
        if !self.totals.contains_key(team) {
            self.teams.push(team.to_string());
        }
        self.totals.insert(team.to_string(), totals);
    }

    // ── Reads ──────────────────────────────────────────────────

    pub fn batting_for(&self, team: &str) -> Option<&HashMap<PlayerName, BattingRecord>> {
        self.batting.get(team)
    }

    pub fn bowling_for(&self, team: &str) -> Option<&HashMap<PlayerName, BowlingRecord>> {
        self.bowling.get(team)
    }

    pub fn totals_for(&self, team: &str) -> Option<&TeamTotals> {
        self.totals.get(team)
    }

    /// Registered teams in registration order.
    pub fn teams(&self) -> &[TeamName] {
        &self.teams
    }

    pub fn is_empty(&self) -> bool {
        self.batting.is_empty() && self.bowling.is_empty() && self.totals.is_empty()
    }
}
