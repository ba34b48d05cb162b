//! Ball events: the immutable ledger entries.
//!
//! Every delivery the engine records becomes one [`BallEvent`] appended to
//! the match ledger. Events are never mutated or removed; they are the
//! sole source of truth for all derived statistics.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The four kinds of extra delivery.
///
/// Wides and no-balls are *illegal* deliveries: they do not count toward
/// the over. Byes and leg-byes are legal deliveries that happen not to be
/// credited to the striker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    /// Whether this extra still counts as a legal delivery for
    /// over-completion purposes.
    pub fn is_legal(&self) -> bool {
        matches!(self, Self::Bye | Self::LegBye)
    }

    /// The scoreboard outcome code for this extra.
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Wide => Outcome::Wide,
            Self::NoBall => Outcome::NoBall,
            Self::Bye => Outcome::Bye,
            Self::LegBye => Outcome::LegBye,
        }
    }
}

/// How a batter was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WicketKind {
    Caught,
    Bowled,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
}

impl std::fmt::Display for WicketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Caught => "caught",
            Self::Bowled => "bowled",
            Self::Lbw => "lbw",
            Self::RunOut => "run out",
            Self::Stumped => "stumped",
            Self::HitWicket => "hit wicket",
        };
        write!(f, "{s}")
    }
}

/// The outcome code of a single delivery, as shown on a scoreboard.
///
/// Serializes to the scoreboard code string: `"0"`–`"6"` for runs off the
/// bat, `"W"` for a wicket, and `"Wd"` / `"Nb"` / `"B"` / `"Lb"` for the
/// four extras.
///
/// # Examples
///
/// ```rust
/// use willowscore::Outcome;
///
/// assert_eq!(Outcome::Runs(4).code(), "4");
/// assert_eq!(Outcome::Wicket.code(), "W");
/// assert_eq!(Outcome::from_code("Nb"), Some(Outcome::NoBall));
/// assert_eq!(Outcome::from_code("banana"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// Runs scored off the bat (0, 1, 2, 3, 4 or 6).
    Runs(u8),
    Wicket,
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl Outcome {
    /// The scoreboard code for this outcome.
    pub fn code(&self) -> String {
        match self {
            Self::Runs(n) => n.to_string(),
            Self::Wicket => String::from("W"),
            Self::Wide => String::from("Wd"),
            Self::NoBall => String::from("Nb"),
            Self::Bye => String::from("B"),
            Self::LegBye => String::from("Lb"),
        }
    }

    /// Parse a scoreboard code back into an outcome.
    ///
    /// Returns `None` for anything that is not a valid code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "W" => Some(Self::Wicket),
            "Wd" => Some(Self::Wide),
            "Nb" => Some(Self::NoBall),
            "B" => Some(Self::Bye),
            "Lb" => Some(Self::LegBye),
            _ => code
                .parse::<u8>()
                .ok()
                .filter(|n| *n <= 6)
                .map(Self::Runs),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Outcome::from_code(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown outcome code: {s}")))
    }
}

/// Immutable record of one delivery.
///
/// Appended to the match ledger by the engine; legal deliveries are also
/// mirrored into the "this over" view until the over completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallEvent {
    /// Which innings the delivery belongs to (1 or 2).
    pub innings: u8,
    /// The over in progress when the ball was bowled, 1-based.
    pub over: u32,
    /// Position of the ball within its over, 1-based. Illegal deliveries
    /// carry the number of the legal ball still to be bowled.
    pub ball_in_over: u8,
    /// Runs added to the team total by this delivery.
    pub runs: u32,
    /// Set when the delivery was an extra.
    pub extra: Option<ExtraKind>,
    /// Whether a wicket fell on this delivery.
    pub is_wicket: bool,
    /// Name of the batter on strike (empty if no striker was at the
    /// crease, which can happen for extras after an all-out).
    pub batter: String,
    /// Name of the current bowler.
    pub bowler: String,
    /// The scoreboard outcome code.
    pub outcome: Outcome,
}

impl BallEvent {
    /// Whether this delivery counted toward the over.
    pub fn is_legal(&self) -> bool {
        self.extra.map_or(true, |e| e.is_legal())
    }
}
