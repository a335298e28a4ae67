//! Match file model and structural validation.
//!
//! RULE: structural problems with the document as a whole are load-fatal.
//! Problems inside a single innings entry or delivery are logged and the
//! entry is dropped; the rest of the match still loads.

use crate::{
    error::{ScoreError, ScoreResult},
    types::{PlayerName, TeamName},
};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// A structurally valid match document.
#[derive(Debug, Clone, Default)]
pub struct MatchFile {
    /// The raw `info` mapping; empty if the document has none.
    pub info:    Mapping,
    pub innings: Vec<Innings>,
}

/// One team's turn to bat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Innings {
    /// Batting side; `None` when the file does not say.
    pub team:       Option<TeamName>,
    /// Deliveries in record order.
    pub deliveries: Vec<Delivery>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delivery {
    /// The `"<over>.<ball>"` key exactly as written. Parsed by the aggregator.
    pub key:     String,
    pub batsman: Option<PlayerName>,
    pub bowler:  Option<PlayerName>,
    pub runs:    RunsBreakdown,
    /// Extras detail, e.g. `{wides: 1}`. `None` when the delivery has none.
    pub extras:  Option<BTreeMap<String, u32>>,
    pub wicket:  Option<WicketEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunsBreakdown {
    /// Runs credited to the striker.
    #[serde(alias = "batter")]
    pub batsman: u32,
    pub extras:  u32,
    /// Everything conceded on this ball, batsman runs plus extras.
    pub total:   u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WicketEvent {
    /// Dismissal kind as written (`caught`, `run out`, ...).
    pub kind:       Option<String>,
    /// Dismissed player; the striker when absent.
    pub player_out: Option<PlayerName>,
    pub fielders:   Vec<PlayerName>,
}

// ── Raw document shapes ──────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawInnings {
    team:       Option<String>,
    deliveries: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDelivery {
    #[serde(alias = "batter")]
    batsman: Option<String>,
    bowler:  Option<String>,
    runs:    RunsBreakdown,
    extras:  Option<BTreeMap<String, u32>>,
    wicket:  Option<RawWicket>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawWicket {
    kind:       Option<String>,
    player_out: Option<String>,
    fielders:   Vec<RawFielder>,
}

/// Older files list fielders by name; newer ones as `{name: ..}` mappings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFielder {
    Name(String),
    Detail { name: String },
}

impl From<RawFielder> for PlayerName {
    fn from(raw: RawFielder) -> Self {
        match raw {
            RawFielder::Name(name) | RawFielder::Detail { name } => name,
        }
    }
}

impl From<RawWicket> for WicketEvent {
    fn from(raw: RawWicket) -> Self {
        Self {
            kind:       raw.kind,
            player_out: raw.player_out,
            fielders:   raw.fielders.into_iter().map(PlayerName::from).collect(),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl MatchFile {
    /// Read and validate a match file from disk.
    pub fn load(path: impl AsRef<Path>) -> ScoreResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ScoreError::FileNotFound { path: display });
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| ScoreError::Io { path: display, source })?;
        Self::parse(&content)
    }

    /// Parse and validate a match document held in memory.
    pub fn parse(text: &str) -> ScoreResult<Self> {
        let root: Value = serde_yaml::from_str(text)?;
        Self::from_value(root)
    }

    /// Validate an already-parsed document and extract its innings.
    pub fn from_value(root: Value) -> ScoreResult<Self> {
        if is_empty_document(&root) {
            return Err(ScoreError::EmptyDocument);
        }
        let Value::Mapping(mut root) = root else {
            return Err(ScoreError::RootNotMapping);
        };
        let innings = match root.remove("innings") {
            None => return Err(ScoreError::MissingInnings),
            Some(Value::Sequence(seq)) => seq,
            Some(_) => return Err(ScoreError::InningsNotList),
        };
        if innings.is_empty() {
            return Err(ScoreError::NoInnings);
        }

        let info = match root.remove("info") {
            Some(Value::Mapping(info)) => info,
            _ => Mapping::new(),
        };
        if info.get("teams").map_or(true, Value::is_null) {
            log::debug!("match info has no teams; continuing without them");
        }

        let innings = innings
            .into_iter()
            .enumerate()
            .flat_map(|(index, entry)| innings_from_entry(index, entry))
            .collect();

        Ok(Self { info, innings })
    }
}

/// An innings entry is a mapping such as `{"1st innings": {team, deliveries}}`.
fn innings_from_entry(index: usize, entry: Value) -> Vec<Innings> {
    let Value::Mapping(entry) = entry else {
        log::warn!("innings entry {index} is not a mapping; skipped");
        return Vec::new();
    };
    entry
        .into_iter()
        .filter_map(|(label, body)| match serde_yaml::from_value::<RawInnings>(body) {
            Ok(raw) => Some(Innings {
                team:       raw.team,
                deliveries: raw.deliveries.into_iter().flat_map(deliveries_from_entry).collect(),
            }),
            Err(e) => {
                log::warn!("innings {:?} is malformed ({e}); skipped", key_text(&label));
                None
            }
        })
        .collect()
}

/// A delivery entry is a mapping such as `{"0.1": {batsman, bowler, runs}}`.
fn deliveries_from_entry(entry: Value) -> Vec<Delivery> {
    let Value::Mapping(entry) = entry else {
        log::warn!("delivery entry is not a mapping; skipped");
        return Vec::new();
    };
    entry
        .into_iter()
        .filter_map(|(key, body)| {
            let key = key_text(&key);
            match serde_yaml::from_value::<RawDelivery>(body) {
                Ok(raw) => Some(Delivery {
                    key,
                    batsman: raw.batsman,
                    bowler:  raw.bowler,
                    runs:    raw.runs,
                    extras:  raw.extras,
                    wicket:  raw.wicket.map(WicketEvent::from),
                }),
                Err(e) => {
                    log::warn!("delivery {key:?} is malformed ({e}); skipped");
                    None
                }
            }
        })
        .collect()
}

/// Keys written as `0.1:` arrive as YAML floats, quoted ones as strings.
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn is_empty_document(root: &Value) -> bool {
    match root {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Tagged(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_and_string_keys_are_both_kept() {
        let file = MatchFile::parse(
            r#"
innings:
  - 1st innings:
      team: A
      deliveries:
        - 0.1: { batsman: X, bowler: Y, runs: { batsman: 0, extras: 0, total: 0 } }
        - "0.2": { batsman: X, bowler: Y, runs: { batsman: 1, extras: 0, total: 1 } }
"#,
        )
        .unwrap();
        let keys: Vec<_> = file.innings[0].deliveries.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["0.1", "0.2"]);
    }

    #[test]
    fn fielders_accept_names_and_mappings() {
        let file = MatchFile::parse(
            r#"
innings:
  - 1st innings:
      team: A
      deliveries:
        - 0.1:
            batter: X
            bowler: Y
            runs: { batter: 0, extras: 0, total: 0 }
            wicket: { kind: caught, player_out: X, fielders: [ { name: Smith }, Jones ] }
"#,
        )
        .unwrap();
        let delivery = &file.innings[0].deliveries[0];
        assert_eq!(delivery.batsman.as_deref(), Some("X"));
        let wicket = delivery.wicket.as_ref().unwrap();
        assert_eq!(wicket.fielders, vec!["Smith".to_string(), "Jones".to_string()]);
    }

    #[test]
    fn missing_runs_default_to_zero() {
        let file = MatchFile::parse(
            "innings:\n  - 1st innings:\n      team: A\n      deliveries:\n        - 0.1: { batsman: X }\n",
        )
        .unwrap();
        let delivery = &file.innings[0].deliveries[0];
        assert_eq!(delivery.runs, RunsBreakdown::default());
        assert!(delivery.bowler.is_none());
    }

    #[test]
    fn empty_document_is_rejected() {
        assert!(matches!(MatchFile::parse(""), Err(ScoreError::EmptyDocument)));
        assert!(matches!(MatchFile::parse("{}"), Err(ScoreError::EmptyDocument)));
    }
}
