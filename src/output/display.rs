//! Display functions for command results

use super::formatters::{format_board, score_bar};
use crate::commands::{SelfPlayStatistics, SolveResult};
use crate::core::PlayerId;
use crate::game::Game;
use crate::session::{EndReason, MatchResult, TurnRecord};
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving board ({}x{})",
        result.board.width(),
        result.board.height()
    );
    println!("{}", "─".repeat(60).cyan());
    print!("{}", format_board(&result.board, None));

    if result.groups.is_empty() {
        println!("\n{}", "No words of 3 or more letters fit this board".red());
        return;
    }

    for (len, words) in &result.groups {
        println!(
            "\n{}",
            format!("{len} letter words ({}):", words.len()).bright_cyan().bold()
        );
        println!("{}", words.join(", "));
    }

    println!(
        "\n{}",
        format!("{} words in total", result.total_words()).green().bold()
    );
}

/// Print the scores line for a game
pub fn print_scores(game: &Game<'_>) {
    let scores = game.scores();
    let tiles = game.board().tiles().len();
    println!(
        "{} {}  [{}]  {} {}",
        game.player(PlayerId::One).name().bright_blue().bold(),
        scores.one,
        score_bar(scores, tiles, 25),
        scores.two,
        game.player(PlayerId::Two).name().bright_red().bold()
    );
}

/// Print one resolved turn
pub fn print_turn(game: &Game<'_>, record: &TurnRecord) {
    println!(
        "{} {}",
        game.player(record.player).name().bold(),
        record.outcome
    );
    print_scores(game);
}

/// Print the end of a match
pub fn print_match_result(game: &Game<'_>, result: &MatchResult) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    print!("{}", format_board(game.board(), None));

    let reason = match result.reason {
        EndReason::BoardFull => "Every tile is taken.".to_string(),
        EndReason::Resigned(player) => format!("{} resigned.", game.player(player).name()),
        EndReason::Passes => "Both players passed.".to_string(),
    };
    println!("\n{reason}");

    match result.winner {
        Some(winner) => {
            let scores = result.scores;
            println!(
                "{}",
                format!(
                    "{} wins by {}-{}!",
                    game.player(winner).name(),
                    scores.get(winner),
                    scores.get(winner.opponent())
                )
                .bright_green()
                .bold()
            );
        }
        None => println!(
            "{}",
            format!(
                "Both players have {} points. The game is a draw!",
                result.scores.one
            )
            .bright_yellow()
            .bold()
        ),
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the statistics of a self-play run
pub fn print_selfplay_result(stats: &SelfPlayStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELF-PLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |count: usize| {
        if stats.games == 0 {
            0.0
        } else {
            count as f64 / stats.games as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Player 1 wins:    {} ({:.1}%)",
        stats.wins[0].to_string().bright_blue().bold(),
        pct(stats.wins[0])
    );
    println!(
        "   Player 2 wins:    {} ({:.1}%)",
        stats.wins[1].to_string().bright_red().bold(),
        pct(stats.wins[1])
    );
    println!("   Draws:            {} ({:.1}%)", stats.draws, pct(stats.draws));

    println!("\n📈 {}", "Games:".bright_cyan().bold());
    println!("   Full boards:      {}", stats.full_boards);
    println!("   Resignations:     {}", stats.resignations);
    println!("   Average turns:    {:.1}", stats.average_turns);
    println!("   Average margin:   {:.1} tiles", stats.average_margin);
    if let Some(word) = &stats.longest_word {
        println!(
            "   Longest word:     {}",
            word.to_uppercase().bright_yellow().bold()
        );
    }
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
}
