//! Scorecard rows — the read-only shapes handed to presentation layers.
//!
//! Everything here derives `Serialize` so a host can ship the whole
//! scorecard as JSON without reaching into the statistic tables.

use crate::{
    header::MatchHeader,
    store::{BattingRecord, BowlingRecord, TeamTotals},
    types::{overs_display, round_to, PlayerName, TeamName},
};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingRow {
    pub position:    Option<u32>,
    pub player:      PlayerName,
    pub runs:        u32,
    pub balls:       u32,
    pub fours:       u32,
    pub sixes:       u32,
    /// Runs per 100 legal balls faced.
    pub strike_rate: f64,
    pub out:         bool,
    /// Dismissal text, or `not out`.
    pub how_out:     String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingRow {
    pub bowler:  PlayerName,
    /// `<completed overs>.<balls>`, e.g. `4.3`.
    pub overs:   String,
    pub maidens: u32,
    pub runs:    u32,
    pub wickets: u32,
    /// Runs conceded per over.
    pub economy: f64,
    pub dots:    u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsRow {
    pub team:     TeamName,
    pub runs:     u32,
    pub wickets:  u32,
    pub overs:    String,
    pub extras:   u32,
    pub run_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCard {
    pub team:    TeamName,
    pub batting: Vec<BattingRow>,
    pub bowling: Vec<BowlingRow>,
}

/// Everything the accessors expose, bundled for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub header: MatchHeader,
    pub teams:  Vec<TeamCard>,
    pub totals: Vec<TotalsRow>,
}

impl BattingRow {
    /// `None` for records that only exist incidentally and never batted.
    pub fn from_record(player: &str, record: &BattingRecord, places: u32) -> Option<Self> {
        if record.runs == 0 && record.balls == 0 && !record.out {
            return None;
        }
        let strike_rate = if record.balls > 0 {
            record.runs as f64 / record.balls as f64 * 100.0
        } else {
            0.0
        };
        Some(Self {
            position:    record.position,
            player:      player.to_string(),
            runs:        record.runs,
            balls:       record.balls,
            fours:       record.fours,
            sixes:       record.sixes,
            strike_rate: round_to(strike_rate, places),
            out:         record.out,
            how_out:     if record.out { record.how_out.clone() } else { "not out".into() },
        })
    }

    /// Ascending batting position. Players who never took strike (a
    /// non-striker run out before facing) have no position and go last,
    /// ordered by name, rather than ahead of the openers.
    pub fn batting_order(a: &Self, b: &Self) -> Ordering {
        match (a.position, b.position) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.player.cmp(&b.player),
        }
    }
}

impl BowlingRow {
    /// `None` for bowlers with no overs, runs or wickets.
    pub fn from_record(bowler: &str, record: &BowlingRecord, places: u32) -> Option<Self> {
        if record.balls == 0 && record.runs == 0 && record.wickets == 0 {
            return None;
        }
        let overs = record.overs();
        let economy = if overs > 0.0 { record.runs as f64 / overs } else { 0.0 };
        Some(Self {
            bowler:  bowler.to_string(),
            overs:   overs_display(record.balls.into()),
            maidens: record.maidens,
            runs:    record.runs,
            wickets: record.wickets,
            economy: round_to(economy, places),
            dots:    record.dots,
        })
    }

    /// Most wickets first, then cheapest economy. Name breaks exact ties.
    pub fn figures_order(a: &Self, b: &Self) -> Ordering {
        b.wickets
            .cmp(&a.wickets)
            .then_with(|| a.economy.total_cmp(&b.economy))
            .then_with(|| a.bowler.cmp(&b.bowler))
    }
}

impl TotalsRow {
    pub fn from_totals(team: &str, totals: &TeamTotals, places: u32) -> Self {
        Self {
            team:     team.to_string(),
            runs:     totals.runs,
            wickets:  totals.wickets,
            overs:    overs_display(totals.balls),
            extras:   totals.extras,
            run_rate: round_to(totals.run_rate, places),
        }
    }
}
