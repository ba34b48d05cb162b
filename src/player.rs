//! Players and their in-innings state.
//!
//! A [`Player`] carries identity and classification fixed at setup, plus
//! the per-innings batting stats and position flags the engine mutates
//! while an innings is active.

use crate::ball::WicketKind;
use serde::{Deserialize, Serialize};

/// A player's primary discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerType {
    Batsman,
    Bowler,
    AllRounder,
}

impl PlayerType {
    /// Whether this player is expected to bowl (bowlers and all-rounders).
    pub fn bowls(&self) -> bool {
        matches!(self, Self::Bowler | Self::AllRounder)
    }
}

/// A player's role within the team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerRole {
    #[default]
    Player,
    WicketKeeper,
    Captain,
}

/// How a batter lost their wicket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dismissal {
    /// The mode of dismissal.
    pub kind: WicketKind,
    /// The fielder involved, where one was (catches, run outs, stumpings).
    pub fielder: Option<String>,
}

impl std::fmt::Display for Dismissal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.fielder {
            Some(fielder) => write!(f, "{} ({})", self.kind, fielder),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// One member of a team roster.
///
/// Identity and classification are set at match setup; batting stats and
/// position flags are mutated only by the scoring engine during an active
/// innings, and reset when the player's team starts a fresh innings.
///
/// # Examples
///
/// ```rust
/// use willowscore::{Player, PlayerRole, PlayerType};
///
/// let player = Player::new("t1_0", "Rohit Sharma", PlayerType::Batsman, PlayerRole::Captain);
/// assert_eq!(player.runs, 0);
/// assert!(!player.is_out);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable identifier, unique within the match.
    pub id: String,
    /// Display name; also the key used in ledger events.
    pub name: String,
    /// Primary discipline.
    pub player_type: PlayerType,
    /// Role within the team.
    pub role: PlayerRole,
    /// Runs scored off the bat this innings.
    pub runs: u32,
    /// Legal deliveries faced this innings.
    pub balls_faced: u32,
    /// Boundary fours hit this innings.
    pub fours: u32,
    /// Sixes hit this innings.
    pub sixes: u32,
    /// Whether the batter has been dismissed this innings.
    pub is_out: bool,
    /// How the batter was dismissed, when they were.
    pub how_out: Option<Dismissal>,
    /// Whether the player is currently at the crease.
    pub is_batting: bool,
    /// Whether the player is currently facing the bowling.
    pub is_on_strike: bool,
}

impl Player {
    /// Create a fresh player with zeroed stats.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        player_type: PlayerType,
        role: PlayerRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            player_type,
            role,
            runs: 0,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            is_out: false,
            how_out: None,
            is_batting: false,
            is_on_strike: false,
        }
    }

    /// Zero the per-innings stats and flags, keeping identity and
    /// classification.
    pub(crate) fn reset_innings(&mut self) {
        self.runs = 0;
        self.balls_faced = 0;
        self.fours = 0;
        self.sixes = 0;
        self.is_out = false;
        self.how_out = None;
        self.is_batting = false;
        self.is_on_strike = false;
    }

    /// Mark the player as dismissed and retire them from the crease.
    pub(crate) fn dismiss(&mut self, dismissal: Dismissal) {
        self.is_out = true;
        self.how_out = Some(dismissal);
        self.is_batting = false;
        self.is_on_strike = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_zeroed() {
        let p = Player::new("1", "Joe Root", PlayerType::Batsman, PlayerRole::Player);
        assert_eq!(p.runs, 0);
        assert_eq!(p.balls_faced, 0);
        assert!(!p.is_batting);
        assert!(p.how_out.is_none());
    }

    #[test]
    fn test_reset_keeps_identity() {
        let mut p = Player::new("1", "Ben Stokes", PlayerType::AllRounder, PlayerRole::Captain);
        p.runs = 42;
        p.balls_faced = 30;
        p.dismiss(Dismissal {
            kind: WicketKind::Bowled,
            fielder: None,
        });

        p.reset_innings();
        assert_eq!(p.name, "Ben Stokes");
        assert_eq!(p.role, PlayerRole::Captain);
        assert_eq!(p.runs, 0);
        assert!(!p.is_out);
        assert!(p.how_out.is_none());
    }

    #[test]
    fn test_dismissal_display() {
        let caught = Dismissal {
            kind: WicketKind::Caught,
            fielder: Some(String::from("Jadeja")),
        };
        assert_eq!(caught.to_string(), "caught (Jadeja)");

        let bowled = Dismissal {
            kind: WicketKind::Bowled,
            fielder: None,
        };
        assert_eq!(bowled.to_string(), "bowled");
    }

    #[test]
    fn test_player_type_bowls() {
        assert!(PlayerType::Bowler.bowls());
        assert!(PlayerType::AllRounder.bowls());
        assert!(!PlayerType::Batsman.bowls());
    }
}
