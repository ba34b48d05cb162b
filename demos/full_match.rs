//! Full match example: scoring a short two-innings game ball by ball
//!
//! This example demonstrates:
//! - Configuring a match and naming the teams
//! - Scoring runs, extras and wickets
//! - Strike rotation and over completion
//! - Swapping innings and following the chase

use willowscore::*;

fn main() -> Result<(), ScoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut engine = MatchEngine::new();

    // Console commentary for every scored ball.
    engine.register_observer(Box::new(Commentator));

    // Configure a 2-over exhibition match.
    engine.setup_match(MatchConfig {
        stadium: String::from("Village Green"),
        toss_winner: TeamSide::Team1,
        total_overs: 2,
    })?;
    println!("Match configured: 2 overs at Village Green");

    engine.update_teams(
        TeamSheet::new("Red")
            .player("Red 1", PlayerType::Batsman, PlayerRole::Captain)
            .player("Red 2", PlayerType::Batsman, PlayerRole::Player)
            .player("Red 3", PlayerType::AllRounder, PlayerRole::Player)
            .player("Red 4", PlayerType::Bowler, PlayerRole::Player),
        TeamSheet::new("Blue")
            .player("Blue 1", PlayerType::Batsman, PlayerRole::WicketKeeper)
            .player("Blue 2", PlayerType::AllRounder, PlayerRole::Player)
            .player("Blue 3", PlayerType::Bowler, PlayerRole::Player)
            .player("Blue 4", PlayerType::Bowler, PlayerRole::Captain),
    )?;

    // === First innings: Red bat ===
    println!("\n=== First innings: Red bat ===");
    engine.start_innings(Innings::First)?;
    engine.set_openers("Red 1", "Red 2")?;
    engine.update_bowler("Blue 3");

    engine.record_runs(4)?;
    engine.record_runs(1)?;
    engine.record_extra(ExtraKind::Wide, 1)?;
    engine.record_runs(0)?;
    engine.record_runs(2)?;
    engine.record_extra(ExtraKind::NoBall, 1)?;
    println!("  free hit pending: {}", engine.state().free_hit);
    engine.record_runs(6)?;
    engine.record_wicket(WicketKind::Bowled, None)?;

    engine.update_bowler("Blue 4");
    engine.record_runs(1)?;
    engine.record_runs(4)?;
    engine.record_extra(ExtraKind::LegBye, 1)?;
    engine.record_runs(0)?;
    engine.record_runs(2)?;
    engine.record_runs(1)?;

    let red = engine.state().batting_team();
    println!(
        "\nEnd of innings: {} {}/{} in {} overs (extras {})",
        red.name,
        red.total_runs,
        red.wickets,
        red.overs_display(),
        red.extras.total()
    );
    engine.end_innings()?;

    // === Second innings: Blue chase ===
    let target = engine.state().team(TeamSide::Team1).total_runs + 1;
    println!("\n=== Second innings: Blue chase {} ===", target);
    engine.start_innings(Innings::Second)?;
    engine.set_openers("Blue 1", "Blue 2")?;
    engine.update_bowler("Red 4");

    for runs in [4, 6, 2, 0] {
        engine.record_runs(runs)?;
        if let Some(rate) = stats::required_rate(engine.state()) {
            let blue = engine.state().batting_team();
            println!(
                "  {} {}/{} after {} overs, required rate {:.2}",
                blue.name,
                blue.total_runs,
                blue.wickets,
                blue.overs_display(),
                rate
            );
        }
    }
    engine.record_runs(6)?;
    engine.record_runs(6)?;
    engine.update_bowler("Red 3");
    engine.record_runs(4)?;

    let blue = engine.state().batting_team();
    println!(
        "\n{} reach {}/{} in {} overs",
        blue.name,
        blue.total_runs,
        blue.wickets,
        blue.overs_display()
    );
    if blue.total_runs >= target {
        println!("{} win!", blue.name);
    }
    engine.end_innings()?;

    println!(
        "\nLedger: {} deliveries recorded across both innings",
        engine.state().ball_ledger.len()
    );

    Ok(())
}
