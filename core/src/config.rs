//! Engine configuration: placeholder names and display precision.
//!
//! Every field has a default, so a config file only needs to name the
//! values it overrides. In tests, use `ScoreboardConfig::default()`.

use crate::types::{FALLBACK_BOWLING_TEAM, UNKNOWN_PLAYER, UNKNOWN_TEAM};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Team name for innings that do not record a batting side.
    pub unknown_team: String,
    /// Bowling side when no other team bats in the match.
    pub fallback_bowling_team: String,
    /// Substitute for a missing batter, bowler or dismissal kind.
    pub unknown_player: String,
    /// Decimal places kept on strike rate, economy and run rate.
    pub decimal_places: u32,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            unknown_team:          UNKNOWN_TEAM.into(),
            fallback_bowling_team: FALLBACK_BOWLING_TEAM.into(),
            unknown_player:        UNKNOWN_PLAYER.into(),
            decimal_places:        2,
        }
    }
}

impl ScoreboardConfig {
    /// Load overrides from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ScoreboardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: ScoreboardConfig =
            serde_json::from_str(r#"{ "unknown_player": "Anon" }"#).unwrap();
        assert_eq!(config.unknown_player, "Anon");
        assert_eq!(config.unknown_team, "Unknown Team");
        assert_eq!(config.fallback_bowling_team, "Bowling Team");
        assert_eq!(config.decimal_places, 2);
    }
}
