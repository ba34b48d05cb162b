//! Error types for match scoring.
//!
//! Every failure the engine can report is a variant of [`ScoreError`].
//! Each variant belongs to one of three [`ErrorKind`]s: configuration
//! errors (invalid setup data), precondition errors (a command issued in
//! the wrong match phase), and not-found errors (a named player lookup
//! failed). All errors are recoverable at the caller boundary; a rejected
//! command never leaves the match partially mutated.

use thiserror::Error;

/// Coarse classification of a [`ScoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid setup data (empty roster, non-positive overs, ...).
    Configuration,
    /// Command issued while the match is in the wrong phase.
    Precondition,
    /// A named player lookup failed.
    NotFound,
}

/// Errors that can occur while configuring or scoring a match.
///
/// # Examples
///
/// ```rust
/// use willowscore::{ErrorKind, ScoreError};
///
/// let err = ScoreError::NoStriker;
/// assert_eq!(err.kind(), ErrorKind::Precondition);
/// println!("{}", err); // "no striker is at the crease"
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The match format must allow at least one over.
    #[error("total overs must be positive, got {0}")]
    InvalidOvers(u32),

    /// A team was submitted with no players.
    #[error("team '{0}' has an empty roster")]
    EmptyRoster(String),

    /// The same player name appeared twice, within one roster or across
    /// both rosters.
    #[error("player '{0}' appears more than once across the rosters")]
    DuplicatePlayer(String),

    /// A command that requires a configured match was issued before
    /// `SetupMatch`.
    #[error("match has not been configured")]
    NotConfigured,

    /// The second innings was started before the first.
    #[error("the second innings cannot start before the first")]
    FirstInningsNotStarted,

    /// A scoring command was issued while no innings is active.
    #[error("match is not active")]
    MatchNotActive,

    /// A setup command was issued while an innings is in progress.
    #[error("an innings is already in progress")]
    MatchStillActive,

    /// A delivery was recorded with no batter on strike.
    ///
    /// This occurs after an all-out dismissal, or before the opening
    /// pair has been designated.
    #[error("no striker is at the crease")]
    NoStriker,

    /// Off the bat a delivery scores 0, 1, 2, 3, 4 or 6; anything else
    /// is rejected.
    #[error("{0} is not a valid run value for a delivery")]
    InvalidRuns(u8),

    /// An extra must award at least one run.
    #[error("an extra must award at least one run")]
    InvalidExtraRuns,

    /// Strike cannot be switched, nor a wicket recorded, without two
    /// batters at the crease.
    #[error("two batters must be at the crease")]
    BattersNotSet,

    /// The same player was named as both striker and non-striker.
    #[error("striker and non-striker must be different players")]
    SamePlayer,

    /// A dismissed player cannot return to the crease.
    #[error("player '{0}' is already dismissed")]
    PlayerDismissed(String),

    /// No player with the given name is on the batting team's roster.
    #[error("player '{0}' not found on the batting team")]
    PlayerNotFound(String),
}

impl ScoreError {
    /// The [`ErrorKind`] this variant belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOvers(_) | Self::EmptyRoster(_) | Self::DuplicatePlayer(_) => {
                ErrorKind::Configuration
            }
            Self::PlayerNotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Precondition,
        }
    }
}
