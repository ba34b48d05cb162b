//! Teams, rosters and innings totals.
//!
//! A [`Team`] owns its ordered roster (roster order is batting order) and
//! the running innings totals. [`TeamSide`] is the enum-tagged reference
//! used everywhere a "batting team" or "bowling team" must be resolved;
//! [`TeamSheet`] is the validated setup payload a roster is built from.

use crate::error::ScoreError;
use crate::player::{Player, PlayerRole, PlayerType};
use serde::{Deserialize, Serialize};

/// Which of the two teams a reference points at.
///
/// # Examples
///
/// ```rust
/// use willowscore::TeamSide;
///
/// assert_eq!(TeamSide::Team1.other(), TeamSide::Team2);
/// assert_eq!(TeamSide::Team2.other(), TeamSide::Team1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Team1,
    Team2,
}

impl TeamSide {
    /// The opposite side.
    pub fn other(&self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
        }
    }
}

/// One entry of a setup roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub name: String,
    pub player_type: PlayerType,
    pub role: PlayerRole,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, player_type: PlayerType, role: PlayerRole) -> Self {
        Self {
            name: name.into(),
            player_type,
            role,
        }
    }
}

/// Setup payload for one team: a name and an ordered roster.
///
/// Roster order is batting order. Validation happens when the sheet is
/// turned into a [`Team`]: the roster must be non-empty and free of
/// duplicate names.
///
/// # Examples
///
/// ```rust
/// use willowscore::{PlayerRole, PlayerType, TeamSheet};
///
/// let sheet = TeamSheet::new("Mumbai Indians")
///     .player("Rohit Sharma", PlayerType::Batsman, PlayerRole::Captain)
///     .player("Ishan Kishan", PlayerType::Batsman, PlayerRole::WicketKeeper)
///     .player("Jasprit Bumrah", PlayerType::Bowler, PlayerRole::Player);
/// assert_eq!(sheet.players.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSheet {
    pub name: String,
    pub players: Vec<RosterEntry>,
}

impl TeamSheet {
    /// Create an empty sheet for the named team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Append one player to the roster, in batting order.
    pub fn player(
        mut self,
        name: impl Into<String>,
        player_type: PlayerType,
        role: PlayerRole,
    ) -> Self {
        self.players.push(RosterEntry::new(name, player_type, role));
        self
    }
}

/// Breakdown of extras conceded, as event counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
}

impl Extras {
    /// Total number of extra deliveries conceded.
    pub fn total(&self) -> u32 {
        self.wides + self.no_balls + self.byes + self.leg_byes
    }
}

/// One side of the match: roster plus running innings totals.
///
/// Invariants the engine maintains while an innings is active: at most two
/// players have `is_batting` set, exactly one of those is on strike while
/// any batter remains, and `wickets` never exceeds roster size minus one
/// (the last batter cannot be given out alone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Stable identifier ("team1" / "team2").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered roster; order is batting order.
    pub players: Vec<Player>,
    /// Runs scored this innings, extras included.
    pub total_runs: u32,
    /// Wickets fallen this innings.
    pub wickets: u32,
    /// Fully completed overs this innings.
    pub completed_overs: u32,
    /// Legal deliveries bowled in the over in progress, 0..=5.
    pub balls_in_over: u8,
    /// Extras conceded against this team's batting.
    pub extras: Extras,
}

impl Team {
    /// Build a team from a validated sheet.
    ///
    /// Fails with [`ScoreError::EmptyRoster`] for an empty sheet and
    /// [`ScoreError::DuplicatePlayer`] for a name listed twice.
    pub(crate) fn from_sheet(id: &str, sheet: &TeamSheet) -> Result<Self, ScoreError> {
        if sheet.players.is_empty() {
            return Err(ScoreError::EmptyRoster(sheet.name.clone()));
        }
        for (i, entry) in sheet.players.iter().enumerate() {
            if sheet.players[..i].iter().any(|e| e.name == entry.name) {
                return Err(ScoreError::DuplicatePlayer(entry.name.clone()));
            }
        }

        let players = sheet
            .players
            .iter()
            .enumerate()
            .map(|(i, e)| Player::new(format!("{id}_{i}"), &e.name, e.player_type, e.role))
            .collect();

        Ok(Self {
            id: id.to_string(),
            name: sheet.name.clone(),
            players,
            total_runs: 0,
            wickets: 0,
            completed_overs: 0,
            balls_in_over: 0,
            extras: Extras::default(),
        })
    }

    /// Placeholder team used before `UpdateTeams` has been called.
    pub(crate) fn placeholder(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            players: Vec::new(),
            total_runs: 0,
            wickets: 0,
            completed_overs: 0,
            balls_in_over: 0,
            extras: Extras::default(),
        }
    }

    /// The batter currently on strike, if any.
    pub fn striker(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_batting && p.is_on_strike)
    }

    /// The batter at the non-striker's end, if any.
    pub fn non_striker(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.is_batting && !p.is_on_strike)
    }

    pub(crate) fn striker_mut(&mut self) -> Option<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.is_batting && p.is_on_strike)
    }

    /// Number of players currently at the crease.
    pub fn batters_at_crease(&self) -> usize {
        self.players.iter().filter(|p| p.is_batting).count()
    }

    /// The next not-out, not-yet-batting player in roster order.
    pub(crate) fn next_batter_mut(&mut self) -> Option<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| !p.is_out && !p.is_batting)
    }

    /// Flip the strike between the two batters at the crease.
    pub(crate) fn flip_strike(&mut self) {
        for p in self.players.iter_mut().filter(|p| p.is_batting) {
            p.is_on_strike = !p.is_on_strike;
        }
    }

    /// Overs faced as a fraction: completed overs plus balls of the
    /// current over over six.
    pub fn overs_faced(&self) -> f64 {
        self.completed_overs as f64 + self.balls_in_over as f64 / 6.0
    }

    /// Overs faced in cricket notation, e.g. `"14.3"`.
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.completed_overs, self.balls_in_over)
    }

    /// Whether the innings has no batting pair left: wickets have reached
    /// roster size minus one.
    pub fn is_all_out(&self) -> bool {
        !self.players.is_empty() && self.wickets as usize >= self.players.len() - 1
    }

    /// Zero the innings totals, extras and every player's per-innings
    /// stats and flags. Used when this team starts a fresh innings.
    pub(crate) fn reset_innings(&mut self) {
        self.total_runs = 0;
        self.wickets = 0;
        self.completed_overs = 0;
        self.balls_in_over = 0;
        self.extras = Extras::default();
        for p in &mut self.players {
            p.reset_innings();
        }
    }
}
