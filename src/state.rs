//! The match aggregate.
//!
//! [`MatchState`] is the single shared mutable resource of the crate. It
//! is owned by a [`MatchEngine`](crate::MatchEngine) and handed out to
//! display collaborators as an immutable reference (or as a
//! [`snapshot`](MatchState::snapshot) for loosely-typed consumers). No
//! global singleton: whoever holds the engine holds the match.

use crate::ball::BallEvent;
use crate::player::Player;
use crate::team::{Team, TeamSide};
use serde::{Deserialize, Serialize};

/// Which innings of the two-innings match is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Innings {
    First,
    Second,
}

impl Innings {
    /// The innings number, 1 or 2.
    pub fn number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// Live state of one limited-overs match.
///
/// Mutated only by the scoring engine; read freely by display surfaces.
/// The [`ball_ledger`](Self::ball_ledger) is append-only and is the sole
/// source of truth for derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    /// Venue name.
    pub stadium: String,
    /// First team of the fixture.
    pub team1: Team,
    /// Second team of the fixture.
    pub team2: Team,
    /// Which side won the toss. The toss winner bats first.
    pub toss_winner: TeamSide,
    /// Format limit in overs per innings.
    pub total_overs: u32,
    /// Which side is currently batting; swapped between innings.
    pub batting_side: TeamSide,
    /// Current bowler, free text; not validated against the roster.
    pub current_bowler: String,
    /// The innings in progress (or most recently played).
    pub current_innings: Innings,
    /// Whether an innings is currently being scored.
    pub is_active: bool,
    /// Free-hit flag: set by a no-ball, cleared by the next legal
    /// delivery. See the engine docs for the exact rule.
    pub free_hit: bool,
    /// Append-only record of every delivery in the match.
    pub ball_ledger: Vec<BallEvent>,
    /// Legal deliveries of the over in progress; cleared when the over
    /// completes. The "this over" scoreboard view.
    pub current_over_balls: Vec<BallEvent>,
    /// Set once `SetupMatch` has run.
    pub(crate) is_configured: bool,
    /// Set once the first innings has been started.
    pub(crate) first_innings_started: bool,
}

impl MatchState {
    pub(crate) fn new() -> Self {
        Self {
            stadium: String::new(),
            team1: Team::placeholder("team1", "Team 1"),
            team2: Team::placeholder("team2", "Team 2"),
            toss_winner: TeamSide::Team1,
            total_overs: 0,
            batting_side: TeamSide::Team1,
            current_bowler: String::new(),
            current_innings: Innings::First,
            is_active: false,
            free_hit: false,
            ball_ledger: Vec::new(),
            current_over_balls: Vec::new(),
            is_configured: false,
            first_innings_started: false,
        }
    }

    /// Resolve a side to its team.
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }

    pub(crate) fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Team1 => &mut self.team1,
            TeamSide::Team2 => &mut self.team2,
        }
    }

    /// The team currently batting.
    pub fn batting_team(&self) -> &Team {
        self.team(self.batting_side)
    }

    /// The team currently bowling.
    pub fn bowling_team(&self) -> &Team {
        self.team(self.batting_side.other())
    }

    pub(crate) fn batting_team_mut(&mut self) -> &mut Team {
        self.team_mut(self.batting_side)
    }

    /// The batter on strike, if any.
    pub fn striker(&self) -> Option<&Player> {
        self.batting_team().striker()
    }

    /// The batter at the non-striker's end, if any.
    pub fn non_striker(&self) -> Option<&Player> {
        self.batting_team().non_striker()
    }

    /// Whether the batting team has run out of batting pairs.
    ///
    /// The engine never ends an innings on its own; this is the signal
    /// the caller checks before deciding to call `EndInnings`.
    pub fn is_all_out(&self) -> bool {
        self.batting_team().is_all_out()
    }

    /// Whether the batting team has used up the format's overs.
    pub fn overs_exhausted(&self) -> bool {
        self.batting_team().completed_overs >= self.total_overs
    }

    /// Loosely-typed snapshot of the full match for display
    /// collaborators that do not link against this crate's types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use willowscore::MatchEngine;
    ///
    /// let engine = MatchEngine::new();
    /// let snap = engine.state().snapshot();
    /// assert!(snap.get("ballLedger").is_some());
    /// ```
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_resolution() {
        let mut state = MatchState::new();
        state.batting_side = TeamSide::Team2;
        assert_eq!(state.batting_team().id, "team2");
        assert_eq!(state.bowling_team().id, "team1");
    }

    #[test]
    fn test_innings_number() {
        assert_eq!(Innings::First.number(), 1);
        assert_eq!(Innings::Second.number(), 2);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let state = MatchState::new();
        let snap = state.snapshot();
        let back: MatchState = serde_json::from_value(snap).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_overs_exhausted() {
        let mut state = MatchState::new();
        state.total_overs = 20;
        state.team1.completed_overs = 20;
        assert!(state.overs_exhausted());
        state.team1.completed_overs = 19;
        assert!(!state.overs_exhausted());
    }
}
