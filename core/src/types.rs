//! Shared primitive types used across the engine.

/// Name of a team as written in the match file.
pub type TeamName = String;

/// Name of a batter, bowler or fielder as written in the match file.
pub type PlayerName = String;

/// Grouping name for an innings whose batting side is not recorded.
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// Bowling side used when no other team bats in the match.
pub const FALLBACK_BOWLING_TEAM: &str = "Bowling Team";

/// Substitute for a missing batter, bowler or dismissal kind.
pub const UNKNOWN_PLAYER: &str = "Unknown";

pub const BALLS_PER_OVER: u32 = 6;

/// Render a legal-ball count in the `<overs>.<balls>` form used on scorecards.
pub fn overs_display(balls: u64) -> String {
    let per_over = u64::from(BALLS_PER_OVER);
    format!("{}.{}", balls / per_over, balls % per_over)
}

/// Overs as a fractional number (`4.5` means four overs and three balls).
pub fn overs_from_balls(balls: u64) -> f64 {
    balls as f64 / BALLS_PER_OVER as f64
}

pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
