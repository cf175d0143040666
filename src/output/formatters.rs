//! Formatting utilities for terminal output

use crate::core::{Board, Ownership, PlayerId, Tile, Word};
use crate::game::Scores;
use colored::{ColoredString, Colorize};

/// A tile's letter padded to a cell and colored by ownership
#[must_use]
pub fn tile_cell(tile: &Tile, selected: bool) -> ColoredString {
    let cell = format!(" {} ", char::from(tile.letter()).to_ascii_uppercase());
    if selected {
        return cell.black().on_bright_green().bold();
    }
    match tile.ownership() {
        Ownership::Untaken => cell.black().on_white(),
        Ownership::Taken(PlayerId::One) => cell.cyan().on_blue().dimmed(),
        Ownership::Taken(PlayerId::Two) => cell.red().on_yellow().dimmed(),
        Ownership::Protected(PlayerId::One) => cell.bright_white().on_blue().bold(),
        Ownership::Protected(PlayerId::Two) => cell.bright_white().on_red().bold(),
    }
}

/// Render the board with 1-based column and row labels
///
/// Tiles in `selection` are highlighted.
#[must_use]
pub fn format_board(board: &Board, selection: Option<&Word>) -> String {
    let mut out = String::from("    ");
    for x in 1..=board.width() {
        out.push_str(&format!("{x:^3}"));
    }
    out.push('\n');

    for y in 0..board.height() {
        out.push_str(&format!("{:>3} ", y + 1));
        for tile in board.row(y) {
            let selected = selection.is_some_and(|word| word.contains(tile.position()));
            out.push_str(&tile_cell(tile, selected).to_string());
        }
        out.push('\n');
    }
    out
}

/// Word text in capitals with its length, or a placeholder when empty
#[must_use]
pub fn word_label(word: &Word) -> String {
    if word.is_empty() {
        "(no letters selected)".to_string()
    } else {
        format!("{} ({} letters)", word.text().to_uppercase(), word.len())
    }
}

/// Two-sided bar: player one's tiles, player two's tiles, then untaken
#[must_use]
pub fn score_bar(scores: Scores, tiles: usize, width: usize) -> String {
    if tiles == 0 {
        return "░".repeat(width);
    }
    let untaken = (tiles.saturating_sub(scores.total()) * width / tiles).min(width);
    let one = ((scores.one * width + tiles / 2) / tiles).min(width - untaken);
    let two = width - untaken - one;
    format!(
        "{}{}{}",
        "█".repeat(one),
        "▓".repeat(two),
        "░".repeat(untaken)
    )
}
