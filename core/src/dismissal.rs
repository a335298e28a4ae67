//! Dismissal kinds and their scorecard wording.

use crate::types::PlayerName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissalKind<'a> {
    Caught,
    Bowled,
    Lbw,
    Stumped,
    RunOut,
    /// Anything else, kept as written (`hit wicket`, `retired hurt`, ...).
    Other(&'a str),
}

impl<'a> DismissalKind<'a> {
    pub fn parse(kind: &'a str) -> Self {
        match kind {
            "caught"  => DismissalKind::Caught,
            "bowled"  => DismissalKind::Bowled,
            "lbw"     => DismissalKind::Lbw,
            "stumped" => DismissalKind::Stumped,
            "run out" => DismissalKind::RunOut,
            other     => DismissalKind::Other(other),
        }
    }

    /// Scorecard text for this dismissal, e.g. `c Smith, Jones b Lee`.
    pub fn describe(&self, fielders: &[PlayerName], bowler: &str) -> String {
        let named = fielders.join(", ");
        match self {
            DismissalKind::Caught if fielders.is_empty() => format!("c & b {bowler}"),
            DismissalKind::Caught => format!("c {named} b {bowler}"),
            DismissalKind::Bowled => format!("b {bowler}"),
            DismissalKind::Lbw => format!("lbw b {bowler}"),
            DismissalKind::Stumped if fielders.is_empty() => format!("st b {bowler}"),
            DismissalKind::Stumped => format!("st {named} b {bowler}"),
            DismissalKind::RunOut if fielders.is_empty() => "run out".to_string(),
            DismissalKind::RunOut => format!("run out ({named})"),
            DismissalKind::Other(kind) if fielders.is_empty() => kind.to_string(),
            DismissalKind::Other(kind) => format!("{kind} ({named})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<PlayerName> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_kind_formats_with_and_without_fielders() {
        let cases = [
            ("caught", names(&["Smith", "Jones"]), "c Smith, Jones b Lee"),
            ("caught", names(&[]), "c & b Lee"),
            ("bowled", names(&["Ignored"]), "b Lee"),
            ("lbw", names(&[]), "lbw b Lee"),
            ("stumped", names(&["Keeper"]), "st Keeper b Lee"),
            ("stumped", names(&[]), "st b Lee"),
            ("run out", names(&["Cover", "Keeper"]), "run out (Cover, Keeper)"),
            ("run out", names(&[]), "run out"),
            ("hit wicket", names(&[]), "hit wicket"),
            ("obstructing the field", names(&["Slip"]), "obstructing the field (Slip)"),
        ];
        for (kind, fielders, expected) in cases {
            assert_eq!(DismissalKind::parse(kind).describe(&fielders, "Lee"), expected, "{kind}");
        }
    }

    #[test]
    fn unrecognised_kind_is_kept_verbatim() {
        assert_eq!(DismissalKind::parse("Unknown"), DismissalKind::Other("Unknown"));
        assert_eq!(DismissalKind::parse("caught and bowled"), DismissalKind::Other("caught and bowled"));
    }
}
