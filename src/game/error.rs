//! Errors raised when a move is rejected

use crate::core::{BoardError, Position};
use std::fmt;

/// Why a submitted word cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalReason {
    /// Not in the dictionary
    NotAWord,
    /// Equal to, or a prefix of, a word already played
    AlreadyPlayed,
    /// Shorter than the minimum word length
    TooShort,
    /// The selection names a tile that is not on this board, or whose
    /// letter differs from the board's
    ForeignTile(Position),
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord => write!(f, "not in the dictionary"),
            Self::AlreadyPlayed => write!(f, "already played"),
            Self::TooShort => write!(f, "too short"),
            Self::ForeignTile(position) => write!(f, "tile {position} is not on this board"),
        }
    }
}

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// The word fails the legality rule; the game is unchanged
    IllegalMove { word: String, reason: IllegalReason },
    /// Board lookup failed
    Board(BoardError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalMove { word, reason } => {
                write!(f, "'{}' is not a playable word: {reason}", word.to_uppercase())
            }
            Self::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            Self::IllegalMove { .. } => None,
        }
    }
}

impl From<BoardError> for PlayError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}
