//! Analytics example: derived statistics over a scored innings
//!
//! This example demonstrates:
//! - Run rate and strike rates from the live state
//! - Bowling figures reconstructed from the ball ledger
//! - Shot distribution, over-by-over totals and the run-rate worm

use willowscore::*;

fn main() -> Result<(), ScoreError> {
    let mut engine = MatchEngine::new();
    engine.setup_match(MatchConfig {
        stadium: String::from("Riverside Oval"),
        toss_winner: TeamSide::Team1,
        total_overs: 20,
    })?;
    engine.update_teams(
        TeamSheet::new("Falcons")
            .player("Anil", PlayerType::Batsman, PlayerRole::Captain)
            .player("Bala", PlayerType::Batsman, PlayerRole::Player)
            .player("Chetan", PlayerType::AllRounder, PlayerRole::Player),
        TeamSheet::new("Tigers")
            .player("Dinesh", PlayerType::Bowler, PlayerRole::Player)
            .player("Eknath", PlayerType::Bowler, PlayerRole::Player)
            .player("Farhan", PlayerType::Batsman, PlayerRole::WicketKeeper),
    )?;
    engine.start_innings(Innings::First)?;
    engine.set_openers("Anil", "Bala")?;

    // Score three overs.
    engine.update_bowler("Dinesh");
    engine.record_runs(4)?;
    engine.record_runs(0)?;
    engine.record_runs(1)?;
    engine.record_runs(6)?;
    engine.record_runs(1)?;
    engine.record_runs(0)?;

    engine.update_bowler("Eknath");
    engine.record_extra(ExtraKind::Wide, 1)?;
    engine.record_runs(2)?;
    engine.record_runs(0)?;
    engine.record_wicket(WicketKind::Caught, Some("Farhan"))?;
    engine.record_runs(1)?;
    engine.record_runs(4)?;
    engine.record_runs(0)?;

    engine.update_bowler("Dinesh");
    engine.record_runs(6)?;
    engine.record_extra(ExtraKind::NoBall, 1)?;
    engine.record_runs(4)?;
    engine.record_runs(1)?;
    engine.record_runs(1)?;
    engine.record_runs(2)?;
    engine.record_runs(0)?;

    let team = engine.state().batting_team();
    println!("=== Innings summary ===");
    println!(
        "{} {}/{} in {} overs (run rate {:.2})",
        team.name,
        team.total_runs,
        team.wickets,
        team.overs_display(),
        stats::run_rate(team)
    );

    println!("\n=== Batting ===");
    for player in team.players.iter().filter(|p| p.balls_faced > 0) {
        let status = match &player.how_out {
            Some(dismissal) => format!("out ({})", dismissal),
            None => String::from("not out"),
        };
        println!(
            "  {}: {} off {} balls, SR {:.1}, 4s {}, 6s {} [{}]",
            player.name,
            player.runs,
            player.balls_faced,
            stats::strike_rate(player),
            player.fours,
            player.sixes,
            status
        );
    }

    println!("\n=== Bowling ===");
    for bowler in ["Dinesh", "Eknath"] {
        let figures = stats::bowling_figures(engine.state(), bowler);
        println!(
            "  {}: {:.1} overs, {}/{}, economy {:.2}",
            bowler,
            figures.overs_bowled(),
            figures.wickets,
            figures.runs_conceded,
            figures.economy()
        );
    }

    println!("\n=== Shot distribution: Anil ===");
    for (outcome, count) in stats::shot_distribution(engine.state(), "Anil") {
        println!("  {}: {}", outcome, count);
    }

    println!("\n=== Over by over ===");
    for over in stats::over_by_over(engine.state(), Innings::First) {
        println!("  over {}: {} runs, {} wickets", over.over, over.runs, over.wickets);
    }

    println!("\n=== Run-rate worm ===");
    for point in stats::run_rate_progression(engine.state(), Innings::First) {
        println!(
            "  ball {:2}: {:3} runs, rate {:.2}",
            point.ball, point.cumulative_runs, point.run_rate
        );
    }

    Ok(())
}
