//! Match header: passthrough of the `info` block with explicit placeholders.

use crate::types::{PlayerName, TeamName};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchHeader {
    /// Upper-cased, e.g. `T20`.
    pub match_type:      String,
    pub venue:           String,
    /// Empty when the file does not name a city.
    pub city:            String,
    /// First entry of `dates`.
    pub date:            String,
    pub teams:           Vec<TeamName>,
    pub toss:            Option<Toss>,
    pub outcome:         Outcome,
    pub player_of_match: Vec<PlayerName>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toss {
    pub winner:   TeamName,
    pub decision: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Won {
        winner: TeamName,
        margin: Option<Margin>,
        /// Result method such as `D/L`, when one was applied.
        method: Option<String>,
    },
    /// Free-text result: `tie`, `no result`, `draw`.
    Result { result: String },
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Margin {
    Runs(u32),
    Wickets(u32),
}

// ── Raw `info` shape ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawInfo {
    match_type:      Option<String>,
    venue:           Option<String>,
    city:            Option<String>,
    dates:           Vec<Value>,
    teams:           Vec<String>,
    toss:            Option<RawToss>,
    outcome:         Option<RawOutcome>,
    player_of_match: Option<OneOrMany>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawToss {
    winner:   Option<String>,
    decision: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawOutcome {
    winner: Option<String>,
    by:     Option<RawMargin>,
    result: Option<String>,
    method: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMargin {
    runs:    Option<u32>,
    wickets: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl MatchHeader {
    /// Build a header from the `info` mapping. Fields that are missing or
    /// have an unexpected shape fall back to placeholders.
    pub fn from_info(info: &Mapping) -> Self {
        let raw = match serde_yaml::from_value::<RawInfo>(Value::Mapping(info.clone())) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("match info is malformed ({e}); using placeholders");
                RawInfo::default()
            }
        };

        let outcome = match raw.outcome {
            Some(RawOutcome { winner: Some(winner), by, method, .. }) => Outcome::Won {
                winner,
                margin: by.and_then(|by| match (by.runs, by.wickets) {
                    (Some(runs), _) => Some(Margin::Runs(runs)),
                    (None, Some(wickets)) => Some(Margin::Wickets(wickets)),
                    (None, None) => None,
                }),
                method,
            },
            Some(RawOutcome { result: Some(result), .. }) => Outcome::Result { result },
            _ => Outcome::Unknown,
        };

        Self {
            match_type: raw.match_type.unwrap_or_else(|| "Unknown".into()).to_uppercase(),
            venue:      raw.venue.unwrap_or_else(|| "Unknown Venue".into()),
            city:       raw.city.unwrap_or_default(),
            date:       raw.dates.first().map(scalar_text).unwrap_or_else(|| "Unknown".into()),
            teams:      raw.teams,
            toss:       raw.toss.map(|toss| Toss {
                winner:   toss.winner.unwrap_or_else(|| "Unknown".into()),
                decision: toss.decision.unwrap_or_else(|| "unknown".into()),
            }),
            outcome,
            player_of_match: match raw.player_of_match {
                Some(OneOrMany::One(name)) => vec![name],
                Some(OneOrMany::Many(names)) => names,
                None => Vec::new(),
            },
        }
    }

    /// `"A vs B"`, or `None` unless both sides are named.
    pub fn teams_line(&self) -> Option<String> {
        match self.teams.as_slice() {
            [first, second, ..] => Some(format!("{first} vs {second}")),
            _ => None,
        }
    }
}

impl Default for MatchHeader {
    fn default() -> Self {
        Self::from_info(&Mapping::new())
    }
}

impl fmt::Display for Toss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} won and chose to {}", self.winner, self.decision)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won { winner, margin, method } => {
                write!(f, "{winner} won")?;
                match margin {
                    Some(Margin::Runs(n)) => write!(f, " by {n} runs")?,
                    Some(Margin::Wickets(n)) => write!(f, " by {n} wickets")?,
                    None => {}
                }
                if let Some(method) = method {
                    write!(f, " ({method})")?;
                }
                Ok(())
            }
            Outcome::Result { result } => f.write_str(result),
            Outcome::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Dates usually arrive as strings, but a bare year parses as a number.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => "Unknown".into(),
    }
}
