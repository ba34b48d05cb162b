//! The scoring engine.
//!
//! [`MatchEngine`] owns the [`MatchState`] and is the only code that
//! mutates it. Every operation is a synchronous, atomic transition:
//! preconditions are checked first, and only then is the state touched,
//! so a rejected command never leaves the match partially mutated.
//! Commands that represent a delivery append exactly one [`BallEvent`]
//! to the ledger and return it.
//!
//! # Examples
//!
//! ```rust
//! use willowscore::*;
//!
//! let mut engine = MatchEngine::new();
//! engine
//!     .setup_match(MatchConfig {
//!         stadium: String::from("Wankhede Stadium"),
//!         toss_winner: TeamSide::Team1,
//!         total_overs: 20,
//!     })
//!     .unwrap();
//! engine
//!     .update_teams(
//!         TeamSheet::new("Home")
//!             .player("Opener A", PlayerType::Batsman, PlayerRole::Captain)
//!             .player("Opener B", PlayerType::Batsman, PlayerRole::Player)
//!             .player("Number 3", PlayerType::AllRounder, PlayerRole::Player),
//!         TeamSheet::new("Away")
//!             .player("Keeper", PlayerType::Batsman, PlayerRole::WicketKeeper)
//!             .player("Quick", PlayerType::Bowler, PlayerRole::Player),
//!     )
//!     .unwrap();
//! engine.start_innings(Innings::First).unwrap();
//! engine.set_openers("Opener A", "Opener B").unwrap();
//! engine.update_bowler("Quick");
//!
//! let event = engine.record_runs(4).unwrap();
//! assert_eq!(event.outcome.code(), "4");
//! assert_eq!(engine.state().batting_team().total_runs, 4);
//! ```

use crate::ball::{BallEvent, ExtraKind, Outcome, WicketKind};
use crate::command::{Command, MatchConfig};
use crate::error::ScoreError;
use crate::observer::MatchObserver;
use crate::player::Dismissal;
use crate::state::{Innings, MatchState};
use crate::team::{Team, TeamSheet};

/// The deterministic match-scoring state machine.
///
/// One engine scores one match. The engine is single-threaded and
/// synchronous: commands apply strictly in the order they are issued,
/// and each either fully applies or is rejected. Registered observers
/// are notified after each successful transition.
pub struct MatchEngine {
    state: MatchState,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchEngine {
    /// Create an engine with an unconfigured match.
    pub fn new() -> Self {
        Self {
            state: MatchState::new(),
            observers: Vec::new(),
        }
    }

    /// Read-only view of the match, ledger included.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Register an observer for post-transition notifications.
    pub fn register_observer(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    /// Apply any [`Command`], returning the [`BallEvent`] it created, if
    /// the command represented a delivery.
    pub fn apply(&mut self, command: Command) -> Result<Option<BallEvent>, ScoreError> {
        match command {
            Command::SetupMatch(config) => self.setup_match(config).map(|_| None),
            Command::UpdateTeams { team1, team2 } => {
                self.update_teams(team1, team2).map(|_| None)
            }
            Command::StartInnings(innings) => self.start_innings(innings).map(|_| None),
            Command::SetOpeners {
                striker,
                non_striker,
            } => self.set_openers(&striker, &non_striker).map(|_| None),
            Command::EndInnings => self.end_innings().map(|_| None),
            Command::RecordRuns(runs) => self.record_runs(runs).map(Some),
            Command::RecordExtra { kind, runs } => self.record_extra(kind, runs).map(Some),
            Command::RecordWicket { kind, fielder } => {
                self.record_wicket(kind, fielder.as_deref()).map(Some)
            }
            Command::SwitchStrike => self.switch_strike().map(|_| None),
            Command::UpdateBowler(name) => {
                self.update_bowler(name);
                Ok(None)
            }
            Command::SetFreeHit(value) => {
                self.set_free_hit(value);
                Ok(None)
            }
        }
    }

    /// Initialize the match configuration.
    ///
    /// The toss winner bats first. Re-invoking overwrites the prior
    /// configuration entirely; the teams and ledger are untouched.
    pub fn setup_match(&mut self, config: MatchConfig) -> Result<(), ScoreError> {
        if config.total_overs == 0 {
            return Err(ScoreError::InvalidOvers(config.total_overs));
        }
        self.state.stadium = config.stadium;
        self.state.toss_winner = config.toss_winner;
        self.state.total_overs = config.total_overs;
        self.state.batting_side = config.toss_winner;
        self.state.is_active = false;
        self.state.is_configured = true;
        Ok(())
    }

    /// Replace both team names and rosters.
    ///
    /// Rejected while an innings is active; otherwise callable at any
    /// point, before or after `SetupMatch`. Each roster must be
    /// non-empty, and no player name may appear twice within or across
    /// the rosters.
    pub fn update_teams(&mut self, team1: TeamSheet, team2: TeamSheet) -> Result<(), ScoreError> {
        if self.state.is_active {
            return Err(ScoreError::MatchStillActive);
        }
        let t1 = Team::from_sheet("team1", &team1)?;
        let t2 = Team::from_sheet("team2", &team2)?;
        if let Some(dup) = t2
            .players
            .iter()
            .find(|p| t1.players.iter().any(|q| q.name == p.name))
        {
            return Err(ScoreError::DuplicatePlayer(dup.name.clone()));
        }
        self.state.team1 = t1;
        self.state.team2 = t2;
        Ok(())
    }

    /// Begin the given innings.
    ///
    /// Requires `SetupMatch` to have run and both rosters to be filled;
    /// the second innings additionally requires the first to have been
    /// started. Starting the second innings swaps the batting and
    /// bowling sides and resets the new batting team's totals, extras
    /// and every player's per-innings stats and flags — the opening pair
    /// must be designated again via [`set_openers`](Self::set_openers).
    pub fn start_innings(&mut self, innings: Innings) -> Result<(), ScoreError> {
        if !self.state.is_configured {
            return Err(ScoreError::NotConfigured);
        }
        if self.state.is_active {
            return Err(ScoreError::MatchStillActive);
        }
        for side in [crate::TeamSide::Team1, crate::TeamSide::Team2] {
            let team = self.state.team(side);
            if team.players.is_empty() {
                return Err(ScoreError::EmptyRoster(team.name.clone()));
            }
        }
        match innings {
            Innings::First => {
                self.state.first_innings_started = true;
            }
            Innings::Second => {
                if !self.state.first_innings_started {
                    return Err(ScoreError::FirstInningsNotStarted);
                }
                let new_side = self.state.batting_side.other();
                self.state.batting_side = new_side;
                self.state.team_mut(new_side).reset_innings();
            }
        }
        self.state.current_innings = innings;
        self.state.is_active = true;
        self.state.free_hit = false;
        self.state.current_over_balls.clear();
        for obs in &mut self.observers {
            obs.on_innings_started(innings, &self.state);
        }
        Ok(())
    }

    /// Designate the opening pair for the batting team, first name on
    /// strike.
    ///
    /// Every fresh innings needs this step, since the innings reset
    /// clears all batting flags.
    pub fn set_openers(&mut self, striker: &str, non_striker: &str) -> Result<(), ScoreError> {
        if striker == non_striker {
            return Err(ScoreError::SamePlayer);
        }
        let team = self.state.batting_team();
        for name in [striker, non_striker] {
            let player = team
                .players
                .iter()
                .find(|p| p.name == name)
                .ok_or_else(|| ScoreError::PlayerNotFound(name.to_string()))?;
            if player.is_out {
                return Err(ScoreError::PlayerDismissed(name.to_string()));
            }
        }

        let team = self.state.batting_team_mut();
        for p in &mut team.players {
            p.is_batting = false;
            p.is_on_strike = false;
        }
        for (name, on_strike) in [(striker, true), (non_striker, false)] {
            if let Some(p) = team.players.iter_mut().find(|p| p.name == name) {
                p.is_batting = true;
                p.is_on_strike = on_strike;
            }
        }
        Ok(())
    }

    /// Close the innings in progress. Totals remain for the summary; no
    /// automatic transition to the second innings happens.
    pub fn end_innings(&mut self) -> Result<(), ScoreError> {
        if !self.state.is_active {
            return Err(ScoreError::MatchNotActive);
        }
        self.state.is_active = false;
        for obs in &mut self.observers {
            obs.on_innings_ended(&self.state);
        }
        Ok(())
    }

    /// Score a legal delivery: `runs` off the striker's bat.
    ///
    /// Credits the striker and the team, appends the ledger event, and
    /// handles strike rotation — odd runs flip the strike, and the sixth
    /// legal ball completes the over (incrementing the over count,
    /// clearing the "this over" view, and flipping strike again). A
    /// legal delivery always ends free-hit status.
    pub fn record_runs(&mut self, runs: u8) -> Result<BallEvent, ScoreError> {
        if !self.state.is_active {
            return Err(ScoreError::MatchNotActive);
        }
        if !matches!(runs, 0 | 1 | 2 | 3 | 4 | 6) {
            return Err(ScoreError::InvalidRuns(runs));
        }
        let innings = self.state.current_innings.number();
        let bowler = self.state.current_bowler.clone();

        let team = self.state.batting_team_mut();
        let over = team.completed_overs + 1;
        let ball_in_over = team.balls_in_over + 1;
        let striker = team.striker_mut().ok_or(ScoreError::NoStriker)?;
        striker.runs += u32::from(runs);
        striker.balls_faced += 1;
        if runs == 4 {
            striker.fours += 1;
        }
        if runs == 6 {
            striker.sixes += 1;
        }
        let batter = striker.name.clone();
        team.total_runs += u32::from(runs);

        let event = BallEvent {
            innings,
            over,
            ball_in_over,
            runs: u32::from(runs),
            extra: None,
            is_wicket: false,
            batter,
            bowler,
            outcome: Outcome::Runs(runs),
        };
        self.state.ball_ledger.push(event.clone());
        self.state.current_over_balls.push(event.clone());

        if runs % 2 == 1 {
            self.state.batting_team_mut().flip_strike();
        }
        self.count_legal_ball();
        self.state.free_hit = false;

        self.notify_ball(&event);
        Ok(event)
    }

    /// Score an extra delivery: `runs` awarded to the team, none to the
    /// striker.
    ///
    /// The extras counter records one *event* per extra regardless of
    /// runs. Wides and no-balls are illegal deliveries: they do not
    /// count toward the over, and a no-ball arms the free hit. Byes and
    /// leg-byes count toward the over exactly like a normal delivery
    /// (with the same over-completion handling) and, being legal,
    /// consume a pending free hit; the runs themselves never rotate the
    /// strike.
    pub fn record_extra(&mut self, kind: ExtraKind, runs: u32) -> Result<BallEvent, ScoreError> {
        if !self.state.is_active {
            return Err(ScoreError::MatchNotActive);
        }
        if runs == 0 {
            return Err(ScoreError::InvalidExtraRuns);
        }
        let innings = self.state.current_innings.number();
        let bowler = self.state.current_bowler.clone();
        let batter = self
            .state
            .striker()
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let team = self.state.batting_team_mut();
        match kind {
            ExtraKind::Wide => team.extras.wides += 1,
            ExtraKind::NoBall => team.extras.no_balls += 1,
            ExtraKind::Bye => team.extras.byes += 1,
            ExtraKind::LegBye => team.extras.leg_byes += 1,
        }
        team.total_runs += runs;

        let event = BallEvent {
            innings,
            over: team.completed_overs + 1,
            ball_in_over: team.balls_in_over + 1,
            runs,
            extra: Some(kind),
            is_wicket: false,
            batter,
            bowler,
            outcome: kind.outcome(),
        };
        self.state.ball_ledger.push(event.clone());

        if kind.is_legal() {
            self.state.current_over_balls.push(event.clone());
            self.count_legal_ball();
            self.state.free_hit = false;
        } else if kind == ExtraKind::NoBall {
            self.state.free_hit = true;
        }

        self.notify_ball(&event);
        Ok(event)
    }

    /// Record the fall of the striker's wicket.
    ///
    /// The striker is dismissed, the wicket counted, and the next
    /// not-out, not-yet-batting player in roster order promoted to
    /// strike. When no replacement remains the dismissal still applies
    /// in full — the team is all out, which the caller observes via
    /// [`MatchState::is_all_out`]; the engine does not end the innings
    /// itself. A wicket is always a legal delivery and ends free-hit
    /// status.
    pub fn record_wicket(
        &mut self,
        kind: WicketKind,
        fielder: Option<&str>,
    ) -> Result<BallEvent, ScoreError> {
        if !self.state.is_active {
            return Err(ScoreError::MatchNotActive);
        }
        let innings = self.state.current_innings.number();
        let bowler = self.state.current_bowler.clone();

        let team = self.state.batting_team_mut();
        if team.striker().is_none() {
            return Err(ScoreError::NoStriker);
        }
        // A batter cannot be given out alone; this keeps wickets at or
        // below roster size minus one.
        if team.batters_at_crease() < 2 {
            return Err(ScoreError::BattersNotSet);
        }

        let striker = team.striker_mut().ok_or(ScoreError::NoStriker)?;
        let batter = striker.name.clone();
        striker.dismiss(Dismissal {
            kind,
            fielder: fielder.map(str::to_string),
        });
        team.wickets += 1;
        if let Some(next) = team.next_batter_mut() {
            next.is_batting = true;
            next.is_on_strike = true;
        }

        let event = BallEvent {
            innings,
            over: team.completed_overs + 1,
            ball_in_over: team.balls_in_over + 1,
            runs: 0,
            extra: None,
            is_wicket: true,
            batter,
            bowler,
            outcome: Outcome::Wicket,
        };
        self.state.ball_ledger.push(event.clone());
        self.state.current_over_balls.push(event.clone());
        self.count_legal_ball();
        self.state.free_hit = false;

        self.notify_ball(&event);
        Ok(event)
    }

    /// Manually flip the strike between the two batters at the crease.
    ///
    /// Covers corrections and the run-out crossing cases the delivery
    /// commands do not model. Emits no ledger event.
    pub fn switch_strike(&mut self) -> Result<(), ScoreError> {
        let team = self.state.batting_team_mut();
        if team.batters_at_crease() != 2 {
            return Err(ScoreError::BattersNotSet);
        }
        team.flip_strike();
        Ok(())
    }

    /// Set the current bowler. Free text; deliberately not validated
    /// against the bowling roster.
    pub fn update_bowler(&mut self, name: impl Into<String>) {
        self.state.current_bowler = name.into();
    }

    /// Manually override the free-hit flag, outside the automatic
    /// no-ball / legal-delivery rules.
    pub fn set_free_hit(&mut self, value: bool) {
        self.state.free_hit = value;
    }

    /// Count one legal delivery toward the over, completing the over on
    /// the sixth ball. This is the single over-completion handling every
    /// legal delivery shares: bump the over count, reset the ball count,
    /// clear the "this over" view, and flip the strike.
    fn count_legal_ball(&mut self) {
        let team = self.state.batting_team_mut();
        team.balls_in_over += 1;
        if team.balls_in_over == 6 {
            team.completed_overs += 1;
            team.balls_in_over = 0;
            team.flip_strike();
            self.state.current_over_balls.clear();
        }
    }

    fn notify_ball(&mut self, event: &BallEvent) {
        for obs in &mut self.observers {
            obs.on_ball(event, &self.state);
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
