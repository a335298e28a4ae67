//! Cricket scorecard engine.
//!
//! Turns ball-by-ball delivery records into batting cards, bowling figures
//! and innings totals. See `scoreboard` for the load/query entry point.

pub mod aggregator;
pub mod config;
pub mod discovery;
pub mod dismissal;
pub mod error;
pub mod header;
pub mod match_file;
pub mod scoreboard;
pub mod scorecard;
pub mod store;
pub mod types;

pub use config::ScoreboardConfig;
pub use error::{ScoreError, ScoreResult};
pub use scoreboard::Scoreboard;
