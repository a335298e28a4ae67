//! Innings aggregation: the second pass over a match.
//!
//! Walks one innings' deliveries in record order and writes:
//!   - batting records for the batting side
//!   - bowling records for the bowling side (the first other known team)
//!   - the batting side's totals, replacing any earlier value
//!
//! Over and maiden tracking lives in `OverState`, which exists only for the
//! duration of one walk.

use crate::{
    config::ScoreboardConfig,
    discovery::{batting_team, bowling_team},
    dismissal::DismissalKind,
    match_file::{Delivery, Innings},
    store::{StatStore, TeamTotals},
    types::{overs_from_balls, PlayerName, TeamName, BALLS_PER_OVER},
};

/// Position of a delivery within the innings, parsed from `"<over>.<ball>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallKey {
    pub over: u32,
    /// Informational only. Ordering comes from record order, and a ball
    /// number is validated here but never drives aggregation.
    pub ball: u32,
}

impl BallKey {
    /// `None` when either part is not numeric. A key without a dot is ball 0
    /// of that over.
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.split('.');
        let over = parse_index(parts.next()?)?;
        let ball = match parts.next() {
            Some(ball) => parse_index(ball)?,
            None => 0,
        };
        Some(Self { over, ball })
    }
}

fn parse_index(text: &str) -> Option<u32> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value.floor() as u32)
}

/// Transient over/maiden state threaded through one innings' walk.
#[derive(Debug)]
struct OverState {
    last_over:     Option<u32>,
    over_runs:     u32,
    over_balls:    u32,
    last_bowler:   Option<PlayerName>,
}

impl Default for OverState {
    fn default() -> Self {
        Self {
            last_over:   None,
            over_runs:   0,
            over_balls:  0,
            last_bowler: None,
        }
    }
}

#[derive(Debug, Default)]
struct InningsTally {
    runs:    u32,
    wickets: u32,
    extras:  u32,
}

struct InningsWalk<'a> {
    batting: &'a str,
    bowling: &'a str,
    config:  &'a ScoreboardConfig,
    over:    OverState,
    tally:   InningsTally,
}

impl<'a> InningsWalk<'a> {
    fn new(batting: &'a str, bowling: &'a str, config: &'a ScoreboardConfig) -> Self {
        Self {
            batting,
            bowling,
            config,
            over: OverState::default(),
            tally: InningsTally::default(),
        }
    }

    /// Credit a maiden if the over just finished was six legal dot balls.
    fn close_over(&self, store: &mut StatStore) {
        if self.over.over_balls != BALLS_PER_OVER || self.over.over_runs != 0 {
            return;
        }
        if let Some(bowler) = &self.over.last_bowler {
            store.bowler_mut(self.bowling, bowler).maidens += 1;
        }
    }

    fn step(&mut self, store: &mut StatStore, key: BallKey, delivery: &Delivery) {
        if self.over.last_over != Some(key.over) {
            if self.over.last_over.is_some() {
                self.close_over(store);
            }
            self.over.last_over = Some(key.over);
            self.over.over_runs = 0;
            self.over.over_balls = 0;
        }

        let config = self.config;
        let unknown = config.unknown_player.as_str();
        let batsman = delivery.batsman.as_deref().unwrap_or(unknown);
        let bowler = delivery.bowler.as_deref().unwrap_or(unknown);
        let runs = delivery.runs;

        store.assign_position(self.batting, batsman);

        // Wides and no-balls carry extras runs and an extras detail; they
        // are not faced by the striker nor counted in the over.
        let legal = runs.extras == 0 || delivery.extras.as_ref().map_or(true, |e| e.is_empty());

        let batter = store.batter_mut(self.batting, batsman);
        batter.runs += runs.batsman;
        if legal {
            batter.balls += 1;
        }
        match runs.batsman {
            4 => batter.fours += 1,
            6 => batter.sixes += 1,
            _ => {}
        }
        if legal {
            self.over.over_balls += 1;
        }

        let figures = store.bowler_mut(self.bowling, bowler);
        if legal {
            figures.balls += 1;
        }
        figures.runs += runs.total;
        if runs.total == 0 {
            figures.dots += 1;
        }

        if let Some(wicket) = &delivery.wicket {
            let player_out = wicket.player_out.as_deref().unwrap_or(batsman);
            let kind = DismissalKind::parse(wicket.kind.as_deref().unwrap_or(unknown));
            let how_out = kind.describe(&wicket.fielders, bowler);

            let dismissed = store.batter_mut(self.batting, player_out);
            dismissed.out = true;
            dismissed.how_out = how_out;

            store.bowler_mut(self.bowling, bowler).wickets += 1;
            self.tally.wickets += 1;
        }

        self.tally.runs += runs.total;
        self.tally.extras += runs.extras;
        self.over.over_runs += runs.total;
        self.over.last_bowler = Some(bowler.to_string());
    }

    fn finish(self, store: &mut StatStore) -> TeamTotals {
        if self.over.last_over.is_some() {
            self.close_over(store);
        }

        let balls = match self.over.last_over {
            Some(over) => {
                u64::from(over) * u64::from(BALLS_PER_OVER) + u64::from(self.over.over_balls)
            }
            None => 0,
        };
        let overs = overs_from_balls(balls);
        let run_rate = if overs > 0.0 { self.tally.runs as f64 / overs } else { 0.0 };

        log::debug!(
            "{} innings: {}/{} in {:.2} overs (extras {}, bowled by {})",
            self.batting,
            self.tally.runs,
            self.tally.wickets,
            overs,
            self.tally.extras,
            self.bowling
        );

        TeamTotals {
            runs: self.tally.runs,
            wickets: self.tally.wickets,
            overs,
            balls,
            extras: self.tally.extras,
            run_rate,
        }
    }
}

/// Aggregate one innings into `store` and return the batting side's totals.
///
/// `teams` must be the complete output of team discovery for the match.
pub fn aggregate_innings(
    store: &mut StatStore,
    innings: &Innings,
    teams: &[TeamName],
    config: &ScoreboardConfig,
) -> TeamTotals {
    let batting = batting_team(innings, config);
    let bowling = bowling_team(batting, teams, config);
    let mut walk = InningsWalk::new(batting, bowling, config);

    for delivery in &innings.deliveries {
        let Some(key) = BallKey::parse(&delivery.key) else {
            log::warn!("{batting}: delivery key {:?} is not numeric; skipped", delivery.key);
            continue;
        };
        walk.step(store, key, delivery);
    }

    let totals = walk.finish(store);
    store.set_totals(batting, totals.clone());
    totals
}
