//! The command surface.
//!
//! Callers (a UI form, a test harness) drive the engine with
//! [`Command`] values, either through the typed methods on
//! [`MatchEngine`](crate::MatchEngine) or through the uniform
//! [`apply`](crate::MatchEngine::apply) dispatch. Commands are plain
//! serializable data; the semantic contract lives in the engine.

use crate::ball::{ExtraKind, WicketKind};
use crate::state::Innings;
use crate::team::{TeamSheet, TeamSide};
use serde::{Deserialize, Serialize};

/// Initial match configuration.
///
/// `toss_winner` is a side, not a name: the toss winner bats first, and
/// resolving the side up front removes any ordering dependency between
/// `SetupMatch` and `UpdateTeams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    pub stadium: String,
    pub toss_winner: TeamSide,
    pub total_overs: u32,
}

/// Every operation the engine accepts.
///
/// Each variant maps 1:1 onto a `MatchEngine` method; see those for
/// preconditions and effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Initialize (or fully overwrite) the match configuration.
    SetupMatch(MatchConfig),
    /// Replace both team names and rosters.
    UpdateTeams { team1: TeamSheet, team2: TeamSheet },
    /// Begin an innings.
    StartInnings(Innings),
    /// Designate the opening pair for the batting team.
    #[serde(rename_all = "camelCase")]
    SetOpeners { striker: String, non_striker: String },
    /// Close the innings in progress.
    EndInnings,
    /// Score a legal delivery off the bat.
    RecordRuns(u8),
    /// Score an extra delivery.
    RecordExtra { kind: ExtraKind, runs: u32 },
    /// Record the fall of a wicket.
    RecordWicket {
        kind: WicketKind,
        fielder: Option<String>,
    },
    /// Manually flip the strike.
    SwitchStrike,
    /// Change the current bowler.
    UpdateBowler(String),
    /// Manually override the free-hit flag.
    SetFreeHit(bool),
}
