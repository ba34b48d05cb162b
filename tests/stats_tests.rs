//! Statistics computed over scored matches, through the public API.

use willowscore::*;

fn full_sheet(prefix: &str) -> TeamSheet {
    let mut sheet = TeamSheet::new(format!("{prefix} XI"));
    for i in 1..=11 {
        sheet = sheet.player(
            format!("{prefix} {i}"),
            PlayerType::AllRounder,
            PlayerRole::Player,
        );
    }
    sheet
}

fn new_match(total_overs: u32) -> MatchEngine {
    let mut engine = MatchEngine::new();
    engine
        .setup_match(MatchConfig {
            stadium: String::from("County Ground"),
            toss_winner: TeamSide::Team1,
            total_overs,
        })
        .unwrap();
    engine
        .update_teams(full_sheet("Home"), full_sheet("Away"))
        .unwrap();
    engine.start_innings(Innings::First).unwrap();
    engine.set_openers("Home 1", "Home 2").unwrap();
    engine.update_bowler("Away 8");
    engine
}

#[test]
fn run_rate_at_ten_an_over() {
    let mut engine = new_match(20);
    // 15 overs of ten runs each: 150 at a rate of exactly 10.00.
    for _ in 0..15 {
        for runs in [4, 2, 2, 1, 1, 0] {
            engine.record_runs(runs).unwrap();
        }
    }
    let team = engine.state().batting_team();
    assert_eq!(team.total_runs, 150);
    assert_eq!(team.overs_display(), "15.0");
    assert!((stats::run_rate(team) - 10.0).abs() < 1e-9);
}

#[test]
fn required_rate_uses_first_innings_total() {
    let mut engine = new_match(10);
    // First innings: 36 in one over.
    for _ in 0..6 {
        engine.record_runs(6).unwrap();
    }
    engine.end_innings().unwrap();

    engine.start_innings(Innings::Second).unwrap();
    engine.set_openers("Away 1", "Away 2").unwrap();
    engine.update_bowler("Home 8");

    // Target 37 off 10 overs.
    assert!((stats::required_rate(engine.state()).unwrap() - 3.7).abs() < 1e-9);

    // After one scoreless over, 37 off 9.
    for _ in 0..6 {
        engine.record_runs(0).unwrap();
    }
    assert!((stats::required_rate(engine.state()).unwrap() - 37.0 / 9.0).abs() < 1e-9);
}

#[test]
fn required_rate_undefined_in_first_innings() {
    let mut engine = new_match(20);
    engine.record_runs(4).unwrap();
    assert!(stats::required_rate(engine.state()).is_none());
}

#[test]
fn strike_rate_is_runs_per_hundred_balls() {
    let mut engine = new_match(20);
    engine.record_runs(4).unwrap();
    engine.record_runs(2).unwrap();
    engine.record_runs(0).unwrap();
    engine.record_runs(0).unwrap();

    let batter = engine.state().striker().unwrap();
    assert_eq!(batter.name, "Home 1");
    assert!((stats::strike_rate(batter) - 150.0).abs() < 1e-9);
}

#[test]
fn bowler_economy_ignores_illegal_deliveries_in_the_over_count() {
    let mut engine = new_match(20);
    // Six legal balls for 6, plus a wide and a no-ball for 2 more.
    for _ in 0..3 {
        engine.record_runs(2).unwrap();
    }
    engine.record_extra(ExtraKind::Wide, 1).unwrap();
    engine.record_extra(ExtraKind::NoBall, 1).unwrap();
    for _ in 0..3 {
        engine.record_runs(0).unwrap();
    }

    let figures = stats::bowling_figures(engine.state(), "Away 8");
    assert_eq!(figures.balls_bowled, 8);
    assert_eq!(figures.legal_balls, 6);
    assert_eq!(figures.runs_conceded, 8);
    assert!((figures.overs_bowled() - 1.0).abs() < 1e-9);
    // 8 runs off one over, not off 8/6 overs.
    assert!((figures.economy() - 8.0).abs() < 1e-9);
}

#[test]
fn figures_split_by_bowler() {
    let mut engine = new_match(20);
    for _ in 0..6 {
        engine.record_runs(1).unwrap();
    }
    engine.update_bowler("Away 9");
    engine.record_wicket(WicketKind::Bowled, None).unwrap();
    engine.record_runs(4).unwrap();

    let first = stats::bowling_figures(engine.state(), "Away 8");
    assert_eq!(first.runs_conceded, 6);
    assert_eq!(first.wickets, 0);
    assert_eq!(first.legal_balls, 6);

    let second = stats::bowling_figures(engine.state(), "Away 9");
    assert_eq!(second.runs_conceded, 4);
    assert_eq!(second.wickets, 1);
    assert_eq!(second.legal_balls, 2);
}

#[test]
fn shot_distribution_by_outcome() {
    let mut engine = new_match(20);
    engine.record_runs(0).unwrap();
    engine.record_runs(0).unwrap();
    engine.record_runs(4).unwrap();
    engine.record_runs(6).unwrap();
    engine.record_runs(2).unwrap();

    let dist = stats::shot_distribution(engine.state(), "Home 1");
    assert_eq!(dist[&Outcome::Runs(0)], 2);
    assert_eq!(dist[&Outcome::Runs(4)], 1);
    assert_eq!(dist[&Outcome::Runs(6)], 1);
    assert_eq!(dist[&Outcome::Runs(2)], 1);
    assert!(stats::shot_distribution(engine.state(), "Home 2").is_empty());
}

#[test]
fn over_by_over_chart() {
    let mut engine = new_match(20);
    for _ in 0..6 {
        engine.record_runs(2).unwrap();
    }
    for _ in 0..5 {
        engine.record_runs(0).unwrap();
    }
    engine.record_wicket(WicketKind::Caught, Some("Away 2")).unwrap();
    engine.record_runs(6).unwrap();

    let overs = stats::over_by_over(engine.state(), Innings::First);
    assert_eq!(overs.len(), 3);
    assert_eq!((overs[0].over, overs[0].runs, overs[0].wickets), (1, 12, 0));
    assert_eq!((overs[1].over, overs[1].runs, overs[1].wickets), (2, 0, 1));
    assert_eq!((overs[2].over, overs[2].runs, overs[2].wickets), (3, 6, 0));
}

#[test]
fn progression_tracks_every_delivery() {
    let mut engine = new_match(20);
    engine.record_runs(4).unwrap();
    engine.record_extra(ExtraKind::Wide, 1).unwrap();
    engine.record_runs(1).unwrap();

    let points = stats::run_rate_progression(engine.state(), Innings::First);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].cumulative_runs, 4);
    assert_eq!(points[1].cumulative_runs, 5);
    assert_eq!(points[2].cumulative_runs, 6);
    assert!((points[2].run_rate - 12.0).abs() < 1e-9);
}
