//! Move selection strategies
//!
//! The solver hands a strategy every legal move for the current position,
//! longest word first, and the strategy picks one.

use crate::core::{PlayerId, Word};
use crate::game::Game;
use std::fmt;
use std::str::FromStr;

/// A candidate word already materialized as tiles on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move<'w> {
    pub text: &'w str,
    pub word: Word,
}

/// A strategy for choosing among legal moves
pub trait Strategy {
    /// Choose a move for `player`
    ///
    /// `moves` yields legal moves longest first, ties in dictionary order.
    /// Returns `None` only when `moves` is empty.
    fn select_move<'w>(
        &self,
        game: &Game<'_>,
        player: PlayerId,
        moves: impl Iterator<Item = Move<'w>>,
    ) -> Option<Move<'w>>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Play the longest playable word (default)
    #[default]
    Longest,
    /// Play the word with the best resulting score margin
    Score,
}

impl StrategyType {
    /// Names accepted by [`FromStr`] and [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["longest", "score"];

    /// Create strategy from name string
    ///
    /// Defaults to longest if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "score" | "greedy" => Self::Score,
            _ => Self::Longest,
        }
    }
}

impl FromStr for StrategyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "longest" => Ok(Self::Longest),
            "score" | "greedy" => Ok(Self::Score),
            other => Err(format!(
                "Unknown strategy '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Longest => write!(f, "longest"),
            Self::Score => write!(f, "score"),
        }
    }
}

impl Strategy for StrategyType {
    fn select_move<'w>(
        &self,
        game: &Game<'_>,
        player: PlayerId,
        moves: impl Iterator<Item = Move<'w>>,
    ) -> Option<Move<'w>> {
        match self {
            Self::Longest => LongestWord.select_move(game, player, moves),
            Self::Score => BestMargin.select_move(game, player, moves),
        }
    }
}

/// Always plays the first legal move, which is the longest word
pub struct LongestWord;

impl Strategy for LongestWord {
    fn select_move<'w>(
        &self,
        _game: &Game<'_>,
        _player: PlayerId,
        mut moves: impl Iterator<Item = Move<'w>>,
    ) -> Option<Move<'w>> {
        moves.next()
    }
}

/// Plays the move that leaves the widest lead over the opponent
///
/// Ties go to the earlier (longer) move.
pub struct BestMargin;

impl BestMargin {
    #[allow(clippy::cast_possible_wrap)]
    fn margin(game: &Game<'_>, player: PlayerId, word: &Word) -> isize {
        let scores = game.potential_score(player, word);
        scores.get(player) as isize - scores.get(player.opponent()) as isize
    }
}

impl Strategy for BestMargin {
    fn select_move<'w>(
        &self,
        game: &Game<'_>,
        player: PlayerId,
        moves: impl Iterator<Item = Move<'w>>,
    ) -> Option<Move<'w>> {
        let mut best: Option<(isize, Move<'w>)> = None;
        for candidate in moves {
            let margin = Self::margin(game, player, &candidate.word);
            if best.as_ref().is_none_or(|(top, _)| margin > *top) {
                best = Some((margin, candidate));
            }
        }
        best.map(|(_, chosen)| chosen)
    }
}
