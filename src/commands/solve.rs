//! Board solving command
//!
//! Builds a board from letters and lists every word it can spell.

use crate::core::{Board, BoardError};
use crate::dictionary::Dictionary;
use crate::game::MIN_WORD_LENGTH;
use crate::solver::{Solver, StrategyType};

/// Configuration for solving a board
pub struct SolveConfig {
    pub letters: String,
    /// Board size used when the letters are not split into rows
    pub width: usize,
    pub height: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            width: 5,
            height: 5,
        }
    }

    /// Board built from the letters
    ///
    /// Letters split by whitespace are read as rows; otherwise the configured
    /// size applies.
    ///
    /// # Errors
    /// Returns `BoardError` if the letters do not fill the board exactly.
    pub fn board(&self) -> Result<Board, BoardError> {
        let rows: Vec<&str> = self.letters.split_whitespace().collect();
        if rows.len() > 1 {
            let width = rows[0].chars().count();
            Board::from_letters(width, rows.len(), &self.letters)
        } else {
            Board::from_letters(self.width, self.height, &self.letters)
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    /// Words grouped by length, longest group first
    pub groups: Vec<(usize, Vec<String>)>,
}

impl SolveResult {
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.iter().map(|(_, words)| words.len()).sum()
    }
}

/// Solve a board given as letters
///
/// Only words of at least [`MIN_WORD_LENGTH`] letters are listed.
///
/// # Errors
///
/// Returns an error if the letters do not form a valid board.
pub fn solve_letters(config: &SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, BoardError> {
    let board = config.board()?;
    let solver = Solver::new(StrategyType::default(), dictionary);

    let mut groups: Vec<(usize, Vec<String>)> = Vec::new();
    for word in solver.solve_board(&board) {
        if word.len() < MIN_WORD_LENGTH {
            continue;
        }
        match groups.last_mut() {
            Some((len, words)) if *len == word.len() => words.push(word.to_string()),
            _ => groups.push((word.len(), vec![word.to_string()])),
        }
    }

    Ok(SolveResult { board, groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["at", "cab", "bat", "tab", "abba", "cabs", "taxi"])
    }

    #[test]
    fn groups_words_by_length() {
        let config = SolveConfig {
            letters: "cabtba".to_string(),
            width: 3,
            height: 2,
        };
        let result = solve_letters(&config, &dictionary()).unwrap();

        assert_eq!(
            result.groups,
            vec![
                (4, vec!["abba".to_string()]),
                (3, vec!["cab".to_string(), "bat".to_string(), "tab".to_string()]),
            ]
        );
        assert_eq!(result.total_words(), 4);
    }

    #[test]
    fn rows_set_the_board_size() {
        let config = SolveConfig::new("cab tba".to_string());
        let board = config.board().unwrap();
        assert_eq!((board.width(), board.height()), (3, 2));
    }

    #[test]
    fn wrong_letter_count_is_an_error() {
        let config = SolveConfig::new("cab".to_string());
        assert_eq!(
            solve_letters(&config, &dictionary()).err(),
            Some(BoardError::LetterCount {
                expected: 25,
                got: 3
            })
        );
    }

    #[test]
    fn solves_the_espresso_board() {
        let config = SolveConfig::new("esprolishmtabdientsixfgmn".to_string());
        let result = solve_letters(&config, &Dictionary::embedded()).unwrap();
        let (longest, words) = &result.groups[0];
        assert_eq!(*longest, 16);
        assert!(words.contains(&"disestablishment".to_string()));
        assert!(result.groups.windows(2).all(|g| g[0].0 > g[1].0));
    }
}
