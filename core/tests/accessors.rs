//! Accessor tests — filtering, ordering, header passthrough, export.

use scorecard_core::{header::Outcome, Scoreboard};

/// P takes two wickets for 6, Q one for 3, R one for 6, S bowls a maiden.
const FIGURES: &str = r#"
info:
  match_type: odi
  venue: Lord's
  city: London
  dates: [2019-07-14]
  teams: [A, B]
  toss: { winner: A, decision: bat }
  outcome: { winner: B, by: { runs: 3 } }
  player_of_match: [Q, X]
innings:
  - 1st innings:
      team: A
      deliveries:
        - 0.1: { batsman: X, bowler: P, runs: { batsman: 6, extras: 0, total: 6 } }
        - 0.2: { batsman: X, bowler: P, runs: { batsman: 0, extras: 0, total: 0 }, wicket: { kind: bowled, player_out: X } }
        - 0.3: { batsman: Y, bowler: P, runs: { batsman: 0, extras: 0, total: 0 }, wicket: { kind: lbw, player_out: Y } }
        - 0.4: { batsman: Z, bowler: P, runs: { batsman: 0, extras: 0, total: 0 } }
        - 0.5: { batsman: Z, bowler: P, runs: { batsman: 0, extras: 0, total: 0 } }
        - 0.6: { batsman: Z, bowler: P, runs: { batsman: 0, extras: 0, total: 0 } }
        - 1.1: { batsman: Z, bowler: Q, runs: { batsman: 3, extras: 0, total: 3 } }
        - 1.2: { batsman: Z, bowler: Q, runs: { batsman: 0, extras: 0, total: 0 }, wicket: { kind: caught, player_out: Z, fielders: [F] } }
        - 1.3: { batsman: W, bowler: Q, runs: { batsman: 0, extras: 0, total: 0 } }
        - 1.4: { batsman: W, bowler: Q, runs: { batsman: 0, extras: 0, total: 0 } }
        - 1.5: { batsman: W, bowler: Q, runs: { batsman: 0, extras: 0, total: 0 } }
        - 1.6: { batsman: W, bowler: Q, runs: { batsman: 0, extras: 0, total: 0 } }
        - 2.1: { batsman: W, bowler: R, runs: { batsman: 6, extras: 0, total: 6 } }
        - 2.2: { batsman: W, bowler: R, runs: { batsman: 0, extras: 0, total: 0 }, wicket: { kind: stumped, player_out: W, fielders: [K] } }
        - 2.3: { batsman: V, bowler: R, runs: { batsman: 0, extras: 0, total: 0 } }
        - 2.4: { batsman: V, bowler: R, runs: { batsman: 0, extras: 0, total: 0 } }
        - 2.5: { batsman: V, bowler: R, runs: { batsman: 0, extras: 0, total: 0 } }
        - 2.6: { batsman: V, bowler: R, runs: { batsman: 0, extras: 0, total: 0 } }
        - 3.1: { batsman: V, bowler: S, runs: { batsman: 0, extras: 0, total: 0 } }
        - 3.2: { batsman: V, bowler: S, runs: { batsman: 0, extras: 0, total: 0 } }
        - 3.3: { batsman: V, bowler: S, runs: { batsman: 0, extras: 0, total: 0 } }
        - 3.4: { batsman: V, bowler: S, runs: { batsman: 0, extras: 0, total: 0 } }
        - 3.5: { batsman: V, bowler: S, runs: { batsman: 0, extras: 0, total: 0 } }
        - 3.6: { batsman: V, bowler: S, runs: { batsman: 0, extras: 0, total: 0 } }
  - 2nd innings:
      team: B
      deliveries:
        - 0.1: { batsman: Q, bowler: X, runs: { batsman: 1, extras: 0, total: 1 } }
"#;

fn load() -> Scoreboard {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut sb = Scoreboard::new();
    sb.load_str(FIGURES).expect("match should load");
    sb
}

#[test]
fn bowling_rows_rank_wickets_then_economy() {
    let bowling = load().bowling("B");
    let order: Vec<_> = bowling.iter().map(|r| r.bowler.as_str()).collect();
    assert_eq!(order, vec!["P", "Q", "R", "S"]);

    let figures: Vec<_> = bowling.iter().map(|r| (r.wickets, r.economy)).collect();
    assert_eq!(figures, vec![(2, 6.0), (1, 3.0), (1, 6.0), (0, 0.0)]);

    for pair in bowling.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.wickets > b.wickets || (a.wickets == b.wickets && a.economy <= b.economy),
            "{} should not rank above {}",
            a.bowler,
            b.bowler
        );
    }

    let s = bowling.iter().find(|r| r.bowler == "S").unwrap();
    assert_eq!((s.maidens, s.overs.as_str(), s.dots), (1, "1.0", 6));
}

#[test]
fn batting_rows_follow_position_and_show_dismissals() {
    let batting = load().batting("A");
    let rows: Vec<_> = batting
        .iter()
        .map(|r| (r.position, r.player.as_str(), r.how_out.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (Some(1), "X", "b P"),
            (Some(2), "Y", "lbw b P"),
            (Some(3), "Z", "c F b Q"),
            (Some(4), "W", "st K b R"),
            (Some(5), "V", "not out"),
        ]
    );
    let y = &batting[1];
    assert_eq!((y.runs, y.balls, y.strike_rate), (0, 1, 0.0));
}

#[test]
fn totals_cover_every_team_in_discovery_order() {
    let totals = load().totals();
    assert_eq!(totals.len(), 2);

    let a = &totals[0];
    assert_eq!(a.team, "A");
    assert_eq!((a.runs, a.wickets, a.extras), (15, 4, 0));
    assert_eq!(a.overs, "4.0");
    assert_eq!(a.run_rate, 3.75);

    let b = &totals[1];
    assert_eq!(b.team, "B");
    assert_eq!((b.runs, b.overs.as_str()), (1, "0.1"));
    assert_eq!(b.run_rate, 6.0);
}

#[test]
fn unknown_team_yields_empty_tables() {
    let sb = load();
    assert!(sb.batting("C").is_empty());
    assert!(sb.bowling("C").is_empty());
}

#[test]
fn header_passes_info_through() {
    let header = load().header();
    assert_eq!(header.match_type, "ODI");
    assert_eq!(header.venue, "Lord's");
    assert_eq!(header.city, "London");
    assert_eq!(header.date, "2019-07-14");
    assert_eq!(header.teams_line().as_deref(), Some("A vs B"));
    assert_eq!(header.outcome.to_string(), "B won by 3 runs");
    assert!(matches!(header.outcome, Outcome::Won { .. }));
    assert_eq!(header.player_of_match, vec!["Q".to_string(), "X".to_string()]);
}

#[test]
fn accessors_work_before_any_load() {
    let sb = Scoreboard::new();
    let header = sb.header();
    assert_eq!(header.match_type, "UNKNOWN");
    assert_eq!(header.date, "Unknown");
    assert!(sb.teams().is_empty());
    assert!(sb.totals().is_empty());
    assert!(sb.batting("A").is_empty());
}

#[test]
fn accessors_are_repeatable() {
    let sb = load();
    assert_eq!(sb.scorecard(), sb.scorecard());
    assert_eq!(sb.bowling("B"), sb.bowling("B"));
}

#[test]
fn scorecard_serialises_to_json() {
    let json = serde_json::to_value(load().scorecard()).unwrap();
    assert_eq!(json["header"]["venue"], "Lord's");
    assert_eq!(json["header"]["outcome"]["type"], "won");
    assert_eq!(json["teams"][0]["team"], "A");
    assert_eq!(json["teams"][0]["batting"][0]["player"], "X");
    assert_eq!(json["teams"][1]["bowling"][0]["bowler"], "P");
    assert_eq!(json["totals"][0]["overs"], "4.0");
}
