//! Simple interactive CLI mode
//!
//! Line-based match in the console without the TUI.

use crate::output::formatters::{format_board, word_label};
use crate::output::{print_match_result, print_scores, print_turn};
use crate::session::{Command, HELP_LINES, MatchResult, Response, Session};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run a console match on stdin and stdout
///
/// Returns the result, or `None` if the players quit early.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or a
/// computer move is rejected.
pub fn run_simple(session: &mut Session<'_>) -> Result<Option<MatchResult>> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordsmush - Console Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Spell words from the board to claim its tiles. Type 'help' for commands.\n");

    let stdin = io::stdin();
    play_lines(session, &mut stdin.lock())
}

/// Drive a match from lines of `input`
///
/// # Errors
///
/// Returns an error on I/O failure or if a computer move is rejected.
pub fn play_lines<R: BufRead>(
    session: &mut Session<'_>,
    input: &mut R,
) -> Result<Option<MatchResult>> {
    loop {
        for record in session.advance_computers()? {
            print_turn(session.game(), &record);
        }

        if let Some(result) = session.result() {
            print_match_result(session.game(), &result);
            return Ok(Some(result));
        }

        let game = session.game();
        println!();
        print!("{}", format_board(game.board(), Some(session.selection())));
        println!(
            "{}'s turn  {}",
            game.player(session.to_move()).name().bold(),
            word_label(session.selection()).bright_yellow()
        );

        let Some(line) = get_user_input("Enter move or 'help'", input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(None);
        };
        if matches!(line.to_ascii_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(None);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", format!("❌ {err}").red());
                continue;
            }
        };

        match session.apply(command) {
            Ok(Response::Help) => print_help(),
            Ok(Response::Selection) => {}
            Ok(Response::Turn(_)) => {
                if let Some(record) = session.log().last() {
                    print_turn(session.game(), record);
                } else {
                    print_scores(session.game());
                }
            }
            Err(err) => println!("{}", format!("❌ {err}").red()),
        }
    }
}

fn print_help() {
    println!("\n{}", "Wordsmush commands:".bright_cyan().bold());
    for line in HELP_LINES {
        println!("  {line}");
    }
    println!();
}

/// Read one non-empty line, or `None` at end of input
fn get_user_input<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    loop {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
}
