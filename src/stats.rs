//! Derived statistics.
//!
//! Everything in this module is a pure function of the [`MatchState`]
//! and its ball ledger. Nothing here mutates the match, and calling any
//! of these in any order always yields the same numbers for the same
//! state.

use std::collections::BTreeMap;

use crate::ball::Outcome;
use crate::player::Player;
use crate::state::{Innings, MatchState};
use crate::team::Team;

/// Runs scored per over faced.
///
/// Returns `0.0` before the first legal delivery.
///
/// # Examples
///
/// ```rust
/// use willowscore::*;
///
/// let engine = MatchEngine::new();
/// assert_eq!(stats::run_rate(engine.state().batting_team()), 0.0);
/// ```
pub fn run_rate(team: &Team) -> f64 {
    let overs = team.overs_faced();
    if overs == 0.0 {
        return 0.0;
    }
    team.total_runs as f64 / overs
}

/// Runs per over the chasing side still needs to win.
///
/// Only defined during the second innings: the target is the first
/// innings total plus one. Returns `None` in the first innings or once
/// no overs remain; returns `0.0` once the target is already passed.
pub fn required_rate(state: &MatchState) -> Option<f64> {
    if state.current_innings != Innings::Second {
        return None;
    }
    let target = state.bowling_team().total_runs + 1;
    let needed = target.saturating_sub(state.batting_team().total_runs);
    let overs_remaining = state.total_overs as f64 - state.batting_team().overs_faced();
    if overs_remaining <= 0.0 {
        return None;
    }
    Some(needed as f64 / overs_remaining)
}

/// Runs per hundred balls faced. `0.0` before the batter's first ball.
pub fn strike_rate(player: &Player) -> f64 {
    if player.balls_faced == 0 {
        return 0.0;
    }
    player.runs as f64 / player.balls_faced as f64 * 100.0
}

/// How often each outcome came off a batter's bat, across both innings.
///
/// Counts the batter's own deliveries by [`Outcome`], so dots, each run
/// value, and wickets appear as separate entries. Extras are attributed
/// to the batter who was on strike when they were bowled.
pub fn shot_distribution(state: &MatchState, batter: &str) -> BTreeMap<Outcome, u32> {
    let mut counts = BTreeMap::new();
    for event in state.ball_ledger.iter().filter(|e| e.batter == batter) {
        *counts.entry(event.outcome).or_insert(0) += 1;
    }
    counts
}

/// A bowler's aggregate figures, reconstructed from the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BowlingFigures {
    /// Runs conceded off the bowler's deliveries, extras included.
    pub runs_conceded: u32,
    /// Wickets credited to the bowler.
    pub wickets: u32,
    /// Legal deliveries bowled.
    pub legal_balls: u32,
    /// All deliveries bowled, wides and no-balls included.
    pub balls_bowled: u32,
}

impl BowlingFigures {
    /// Overs bowled as a fraction of six legal balls.
    pub fn overs_bowled(&self) -> f64 {
        self.legal_balls as f64 / 6.0
    }

    /// Runs conceded per over bowled. `0.0` before the first legal ball.
    pub fn economy(&self) -> f64 {
        if self.legal_balls == 0 {
            return 0.0;
        }
        self.runs_conceded as f64 / self.overs_bowled()
    }
}

/// Figures for the named bowler across the whole ledger.
pub fn bowling_figures(state: &MatchState, bowler: &str) -> BowlingFigures {
    let mut figures = BowlingFigures::default();
    for event in state.ball_ledger.iter().filter(|e| e.bowler == bowler) {
        figures.balls_bowled += 1;
        figures.runs_conceded += event.runs;
        if event.is_legal() {
            figures.legal_balls += 1;
        }
        if event.is_wicket {
            figures.wickets += 1;
        }
    }
    figures
}

/// The runs and wickets of one over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverSummary {
    /// 1-based over number.
    pub over: u32,
    pub runs: u32,
    pub wickets: u32,
}

/// Per-over totals for the given innings, in over order.
pub fn over_by_over(state: &MatchState, innings: Innings) -> Vec<OverSummary> {
    let mut overs: BTreeMap<u32, OverSummary> = BTreeMap::new();
    for event in state
        .ball_ledger
        .iter()
        .filter(|e| e.innings == innings.number())
    {
        let entry = overs.entry(event.over).or_insert(OverSummary {
            over: event.over,
            runs: 0,
            wickets: 0,
        });
        entry.runs += event.runs;
        if event.is_wicket {
            entry.wickets += 1;
        }
    }
    overs.into_values().collect()
}

/// One point of a run-rate worm: the state after the nth ball of an
/// innings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatePoint {
    /// 1-based ball index within the innings, illegal deliveries
    /// included.
    pub ball: u32,
    pub cumulative_runs: u32,
    /// Runs per over to this point, counting every delivery as a ball.
    pub run_rate: f64,
}

/// The ball-by-ball run-rate progression of an innings.
pub fn run_rate_progression(state: &MatchState, innings: Innings) -> Vec<RatePoint> {
    let mut points = Vec::new();
    let mut cumulative = 0u32;
    for (i, event) in state
        .ball_ledger
        .iter()
        .filter(|e| e.innings == innings.number())
        .enumerate()
    {
        cumulative += event.runs;
        let ball = i as u32 + 1;
        points.push(RatePoint {
            ball,
            cumulative_runs: cumulative,
            run_rate: cumulative as f64 / ball as f64 * 6.0,
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{ExtraKind, WicketKind};
    use crate::command::MatchConfig;
    use crate::engine::MatchEngine;
    use crate::player::{PlayerRole, PlayerType};
    use crate::team::{TeamSheet, TeamSide};

    fn sheet(prefix: &str) -> TeamSheet {
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

    fn ready_engine() -> MatchEngine {
        let mut engine = MatchEngine::new();
        engine
            .setup_match(MatchConfig {
                stadium: String::from("Test Ground"),
                toss_winner: TeamSide::Team1,
                total_overs: 20,
            })
            .unwrap();
        engine.update_teams(sheet("Home"), sheet("Away")).unwrap();
        engine.start_innings(crate::Innings::First).unwrap();
        engine.set_openers("Home 1", "Home 2").unwrap();
        engine.update_bowler("Away 7");
        engine
    }

    #[test]
    fn test_run_rate_is_runs_per_over() {
        let mut engine = ready_engine();
        for _ in 0..6 {
            engine.record_runs(2).unwrap();
        }
        // 12 runs off a complete over.
        assert!((run_rate(engine.state().batting_team()) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_rate_zero_before_first_ball() {
        let engine = ready_engine();
        assert_eq!(run_rate(engine.state().batting_team()), 0.0);
    }

    #[test]
    fn test_required_rate_targets_first_innings_total_plus_one() {
        let mut engine = ready_engine();
        for _ in 0..6 {
            engine.record_runs(2).unwrap();
        }
        assert!(required_rate(engine.state()).is_none());

        engine.end_innings().unwrap();
        engine.start_innings(crate::Innings::Second).unwrap();
        engine.set_openers("Away 1", "Away 2").unwrap();

        // Target 13 off 20 overs.
        let rate = required_rate(engine.state()).unwrap();
        assert!((rate - 13.0 / 20.0).abs() < 1e-9);

        // Passing the target floors the requirement at zero.
        engine.update_bowler("Home 7");
        for _ in 0..4 {
            engine.record_runs(4).unwrap();
        }
        assert_eq!(required_rate(engine.state()), Some(0.0));
    }

    #[test]
    fn test_strike_rate() {
        let mut engine = ready_engine();
        engine.record_runs(4).unwrap();
        engine.record_runs(0).unwrap();
        let striker = engine.state().striker().unwrap();
        assert!((strike_rate(striker) - 200.0).abs() < 1e-9);

        let idle = &engine.state().batting_team().players[5];
        assert_eq!(strike_rate(idle), 0.0);
    }

    #[test]
    fn test_shot_distribution_counts_outcomes() {
        let mut engine = ready_engine();
        engine.record_runs(4).unwrap();
        engine.record_runs(4).unwrap();
        engine.record_runs(0).unwrap();
        engine.record_runs(1).unwrap(); // strike passes to Home 2
        engine.record_runs(6).unwrap();

        let dist = shot_distribution(engine.state(), "Home 1");
        assert_eq!(dist.get(&Outcome::Runs(4)), Some(&2));
        assert_eq!(dist.get(&Outcome::Runs(0)), Some(&1));
        assert_eq!(dist.get(&Outcome::Runs(1)), Some(&1));
        assert_eq!(dist.get(&Outcome::Runs(6)), None);

        let other = shot_distribution(engine.state(), "Home 2");
        assert_eq!(other.get(&Outcome::Runs(6)), Some(&1));
    }

    #[test]
    fn test_bowling_figures_exclude_illegal_balls_from_overs() {
        let mut engine = ready_engine();
        engine.record_runs(4).unwrap();
        engine.record_extra(ExtraKind::Wide, 1).unwrap();
        engine.record_extra(ExtraKind::NoBall, 2).unwrap();
        engine.record_wicket(WicketKind::Bowled, None).unwrap();

        let figures = bowling_figures(engine.state(), "Away 7");
        assert_eq!(figures.balls_bowled, 4);
        assert_eq!(figures.legal_balls, 2);
        assert_eq!(figures.runs_conceded, 7);
        assert_eq!(figures.wickets, 1);
        // 7 runs off 2 legal balls: economy of 21 per over.
        assert!((figures.economy() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_bowling_figures_empty_for_unknown_bowler() {
        let engine = ready_engine();
        let figures = bowling_figures(engine.state(), "Nobody");
        assert_eq!(figures, BowlingFigures::default());
        assert_eq!(figures.economy(), 0.0);
    }

    #[test]
    fn test_over_by_over_groups_and_orders() {
        let mut engine = ready_engine();
        for _ in 0..6 {
            engine.record_runs(1).unwrap();
        }
        engine.record_runs(4).unwrap();
        engine.record_wicket(WicketKind::Caught, Some("Away 3")).unwrap();

        let overs = over_by_over(engine.state(), crate::Innings::First);
        assert_eq!(
            overs,
            vec![
                OverSummary {
                    over: 1,
                    runs: 6,
                    wickets: 0
                },
                OverSummary {
                    over: 2,
                    runs: 4,
                    wickets: 1
                },
            ]
        );
    }

    #[test]
    fn test_over_by_over_filters_by_innings() {
        let mut engine = ready_engine();
        engine.record_runs(4).unwrap();
        engine.end_innings().unwrap();
        engine.start_innings(crate::Innings::Second).unwrap();
        engine.set_openers("Away 1", "Away 2").unwrap();
        engine.update_bowler("Home 7");
        engine.record_runs(6).unwrap();

        let first = over_by_over(engine.state(), crate::Innings::First);
        let second = over_by_over(engine.state(), crate::Innings::Second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].runs, 4);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].runs, 6);
    }

    #[test]
    fn test_run_rate_progression_accumulates() {
        let mut engine = ready_engine();
        engine.record_runs(4).unwrap();
        engine.record_runs(0).unwrap();
        engine.record_runs(2).unwrap();

        let points = run_rate_progression(engine.state(), crate::Innings::First);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].cumulative_runs, 4);
        assert!((points[0].run_rate - 24.0).abs() < 1e-9);
        assert_eq!(points[2].cumulative_runs, 6);
        assert!((points[2].run_rate - 12.0).abs() < 1e-9);
    }
}
