//! # willowscore
//!
//! A deterministic ball-by-ball scoring engine for limited-overs
//! cricket.
//!
//! The crate models one match as a state machine driven by commands:
//! configure the match, name the teams, start an innings, then feed it
//! deliveries one at a time. Every delivery appends an immutable
//! [`BallEvent`] to the ledger, and every derived number — run rates,
//! strike rates, bowling figures, over-by-over charts — is computed
//! from state the engine already holds, never estimated.
//!
//! ## Features
//!
//! - **Deterministic**: the same command sequence always produces the
//!   same state and the same statistics.
//! - **Atomic commands**: each command is validated first and applied
//!   whole, so a rejected command leaves nothing half-scored.
//! - **Append-only ledger**: the full ball-by-ball history of both
//!   innings survives for replay and analytics.
//! - **Laws-aware**: overs of six legal balls, wides and no-balls that
//!   do not count, free hits after no-balls, strike rotation on odd
//!   runs and at the end of each over.
//! - **Observable**: plug in a [`MatchObserver`] (such as the built-in
//!   [`Commentator`]) to react to every scored ball.
//!
//! ## Pipeline
//!
//! ```text
//! [Command] --> [MatchEngine] --> [BallEvent ledger] --> [stats]
//!   setup         validate           append-only          run rate
//!   deliveries    then apply         history              figures
//! ```
//!
//! ## Example
//!
//! ```rust
//! use willowscore::*;
//!
//! let mut engine = MatchEngine::new();
//! engine
//!     .setup_match(MatchConfig {
//!         stadium: String::from("Eden Gardens"),
//!         toss_winner: TeamSide::Team1,
//!         total_overs: 20,
//!     })
//!     .unwrap();
//! engine
//!     .update_teams(
//!         TeamSheet::new("Strikers")
//!             .player("Asha", PlayerType::Batsman, PlayerRole::Captain)
//!             .player("Binu", PlayerType::Batsman, PlayerRole::Player)
//!             .player("Chandra", PlayerType::AllRounder, PlayerRole::Player),
//!         TeamSheet::new("Riders")
//!             .player("Dev", PlayerType::Bowler, PlayerRole::Player)
//!             .player("Esha", PlayerType::Batsman, PlayerRole::WicketKeeper),
//!     )
//!     .unwrap();
//! engine.start_innings(Innings::First).unwrap();
//! engine.set_openers("Asha", "Binu").unwrap();
//! engine.update_bowler("Dev");
//!
//! engine.record_runs(4).unwrap();
//! engine.record_runs(1).unwrap();
//! engine.record_extra(ExtraKind::Wide, 1).unwrap();
//!
//! let team = engine.state().batting_team();
//! assert_eq!(team.total_runs, 6);
//! assert_eq!(team.overs_display(), "0.2");
//! assert_eq!(engine.state().striker().unwrap().name, "Binu");
//! ```
//!
//! ## Modules
//!
//! - [`engine`] — the [`MatchEngine`] state machine
//! - [`state`] — the full [`MatchState`] and innings tracking
//! - [`ball`] — delivery outcomes and the [`BallEvent`] ledger entry
//! - [`team`] / [`player`] — rosters, totals, extras, batter stats
//! - [`command`] — the serializable [`Command`] surface
//! - [`stats`] — pure derived statistics over the ledger
//! - [`observer`] — post-transition hooks and the [`Commentator`]
//! - [`error`] — [`ScoreError`] and its [`ErrorKind`] classes

pub mod ball;
pub mod command;
pub mod engine;
pub mod error;
pub mod observer;
pub mod player;
pub mod state;
pub mod stats;
pub mod team;

pub use ball::{BallEvent, ExtraKind, Outcome, WicketKind};
pub use command::{Command, MatchConfig};
pub use engine::MatchEngine;
pub use error::{ErrorKind, ScoreError};
pub use observer::{Commentator, MatchObserver};
pub use player::{Dismissal, Player, PlayerRole, PlayerType};
pub use state::{Innings, MatchState};
pub use stats::{BowlingFigures, OverSummary, RatePoint};
pub use team::{Extras, RosterEntry, Team, TeamSheet, TeamSide};
