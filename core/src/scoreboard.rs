//! The scoreboard session — loads one match and answers scorecard queries.
//!
//! EXECUTION ORDER (fixed):
//!   1. Structural validation of the document   (load-fatal on failure)
//!   2. Team discovery over every innings
//!   3. Innings aggregation, once per innings, in file order
//!   4. Accessors, any number of times
//!
//! RULES:
//!   - A failed load leaves the session empty.
//!   - Accessors never mutate; aggregation never resumes after a load.
//!   - One session holds one match. Use one session per match.

use crate::{
    aggregator::aggregate_innings,
    config::ScoreboardConfig,
    discovery::discover_teams,
    error::ScoreResult,
    header::MatchHeader,
    match_file::MatchFile,
    scorecard::{BattingRow, BowlingRow, Scorecard, TeamCard, TotalsRow},
    store::StatStore,
    types::TeamName,
};
use serde_yaml::Mapping;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    config: ScoreboardConfig,
    info:   Mapping,
    store:  StatStore,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoreboardConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    /// Load a match file from disk and aggregate it.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ScoreResult<()> {
        self.reset();
        let file = MatchFile::load(path)?;
        self.analyze(file);
        Ok(())
    }

    /// Load a match document held in memory and aggregate it.
    pub fn load_str(&mut self, text: &str) -> ScoreResult<()> {
        self.reset();
        let file = MatchFile::parse(text)?;
        self.analyze(file);
        Ok(())
    }

    /// Aggregate an already-validated match, replacing any previous one.
    pub fn analyze(&mut self, file: MatchFile) {
        let mut store = StatStore::new();
        let teams = discover_teams(&file.innings, &self.config);
        for team in &teams {
            store.register_team(team);
        }
        for innings in &file.innings {
            aggregate_innings(&mut store, innings, &teams, &self.config);
        }
        log::info!(
            "aggregated {} innings across teams {:?}",
            file.innings.len(),
            store.teams()
        );
        self.info = file.info;
        self.store = store;
    }

    fn reset(&mut self) {
        self.info = Mapping::new();
        self.store = StatStore::new();
    }

    // ── Accessors ──────────────────────────────────────────────

    pub fn header(&self) -> MatchHeader {
        MatchHeader::from_info(&self.info)
    }

    /// Batting teams of the loaded match, in discovery order.
    pub fn teams(&self) -> &[TeamName] {
        self.store.teams()
    }

    /// Batting card for `team`, ordered by batting position.
    pub fn batting(&self, team: &str) -> Vec<BattingRow> {
        let Some(records) = self.store.batting_for(team) else {
            return Vec::new();
        };
        let mut rows: Vec<BattingRow> = records
            .iter()
            .filter_map(|(player, record)| {
                BattingRow::from_record(player, record, self.config.decimal_places)
            })
            .collect();
        rows.sort_by(BattingRow::batting_order);
        rows
    }

    /// Bowling figures for `team`, best figures first.
    pub fn bowling(&self, team: &str) -> Vec<BowlingRow> {
        let Some(records) = self.store.bowling_for(team) else {
            return Vec::new();
        };
        let mut rows: Vec<BowlingRow> = records
            .iter()
            .filter_map(|(bowler, record)| {
                BowlingRow::from_record(bowler, record, self.config.decimal_places)
            })
            .collect();
        rows.sort_by(BowlingRow::figures_order);
        rows
    }

    /// Totals for every known team, in discovery order.
    pub fn totals(&self) -> Vec<TotalsRow> {
        self.store
            .teams()
            .iter()
            .filter_map(|team| {
                self.store
                    .totals_for(team)
                    .map(|totals| TotalsRow::from_totals(team, totals, self.config.decimal_places))
            })
            .collect()
    }

    /// Whether the session currently holds no statistics.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Header, per-team cards and totals in one serialisable value.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard {
            header: self.header(),
            teams:  self
                .teams()
                .iter()
                .map(|team| TeamCard {
                    team:    team.clone(),
                    batting: self.batting(team),
                    bowling: self.bowling(team),
                })
                .collect(),
            totals: self.totals(),
        }
    }
}
