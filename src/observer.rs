//! Observers: fire-and-forget notifications after transitions.
//!
//! The engine does not announce anything itself. After a successful
//! transition it notifies every registered [`MatchObserver`] with the
//! event and the post-transition state; what an observer does with that
//! (speak it, log it, forward it to a display) is its own business.
//! Observer calls are synchronous and infallible — they must never block
//! and cannot affect the transition that already happened.

use crate::ball::BallEvent;
use crate::state::{Innings, MatchState};

/// Receiver for engine notifications.
///
/// All methods have empty defaults so an observer only implements what it
/// cares about.
pub trait MatchObserver: Send {
    /// A delivery was recorded (run, extra, or wicket).
    fn on_ball(&mut self, event: &BallEvent, state: &MatchState) {
        let _ = (event, state);
    }

    /// An innings was started.
    fn on_innings_started(&mut self, innings: Innings, state: &MatchState) {
        let _ = (innings, state);
    }

    /// The innings in progress was ended.
    fn on_innings_ended(&mut self, state: &MatchState) {
        let _ = state;
    }
}

/// Observer that renders ball-by-ball commentary through `tracing`.
///
/// # Examples
///
/// ```rust
/// use willowscore::{Commentator, MatchEngine};
///
/// let mut engine = MatchEngine::new();
/// engine.register_observer(Box::new(Commentator));
/// ```
pub struct Commentator;

impl MatchObserver for Commentator {
    fn on_ball(&mut self, event: &BallEvent, state: &MatchState) {
        let team = state.batting_team();
        let score = format!("{}/{}", team.total_runs, team.wickets);
        let line = commentary_line(event);
        tracing::info!(
            over = %format!("{}.{}", event.over - 1, event.ball_in_over),
            batter = %event.batter,
            bowler = %event.bowler,
            score = %score,
            "{line}"
        );
        if state.free_hit {
            tracing::info!("free hit on the next delivery");
        }
    }

    fn on_innings_started(&mut self, innings: Innings, state: &MatchState) {
        tracing::info!(
            innings = innings.number(),
            batting = %state.batting_team().name,
            "innings underway"
        );
    }

    fn on_innings_ended(&mut self, state: &MatchState) {
        let team = state.batting_team();
        tracing::info!(
            score = %format!("{}/{}", team.total_runs, team.wickets),
            overs = %team.overs_display(),
            "end of innings for {}",
            team.name
        );
    }
}

fn commentary_line(event: &BallEvent) -> String {
    use crate::ball::Outcome;

    match event.outcome {
        Outcome::Runs(0) => String::from("dot ball"),
        Outcome::Runs(4) => String::from("FOUR!"),
        Outcome::Runs(6) => String::from("SIX!"),
        Outcome::Runs(n) => format!("{n} run{}", if n == 1 { "" } else { "s" }),
        Outcome::Wicket => String::from("WICKET!"),
        Outcome::Wide => format!("wide, {} extra", event.runs),
        Outcome::NoBall => String::from("no ball"),
        Outcome::Bye => format!("{} bye", event.runs),
        Outcome::LegBye => format!("{} leg bye", event.runs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{ExtraKind, Outcome};

    fn event(outcome: Outcome, runs: u32, extra: Option<ExtraKind>) -> BallEvent {
        BallEvent {
            innings: 1,
            over: 1,
            ball_in_over: 1,
            runs,
            extra,
            is_wicket: matches!(outcome, Outcome::Wicket),
            batter: String::from("A"),
            bowler: String::from("B"),
            outcome,
        }
    }

    #[test]
    fn test_commentary_lines() {
        assert_eq!(commentary_line(&event(Outcome::Runs(0), 0, None)), "dot ball");
        assert_eq!(commentary_line(&event(Outcome::Runs(1), 1, None)), "1 run");
        assert_eq!(commentary_line(&event(Outcome::Runs(2), 2, None)), "2 runs");
        assert_eq!(commentary_line(&event(Outcome::Runs(4), 4, None)), "FOUR!");
        assert_eq!(commentary_line(&event(Outcome::Wicket, 0, None)), "WICKET!");
        assert_eq!(
            commentary_line(&event(Outcome::Wide, 1, Some(ExtraKind::Wide))),
            "wide, 1 extra"
        );
    }
}
