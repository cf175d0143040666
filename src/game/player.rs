//! Player identity, scores and turn outcomes

use crate::core::PlayerId;
use std::fmt;

/// A participant in a game, identified by name only
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tile counts for both seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub one: usize,
    pub two: usize,
}

impl Scores {
    #[inline]
    #[must_use]
    pub const fn get(self, player: PlayerId) -> usize {
        match player {
            PlayerId::One => self.one,
            PlayerId::Two => self.two,
        }
    }

    /// Tiles owned by either player
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.one + self.two
    }

    /// The seat with more tiles, or `None` on a tie
    #[must_use]
    pub const fn leader(self) -> Option<PlayerId> {
        if self.one > self.two {
            Some(PlayerId::One)
        } else if self.two > self.one {
            Some(PlayerId::Two)
        } else {
            None
        }
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.one, self.two)
    }
}

/// What a player did with their turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A word was played
    Played(String),
    /// The turn was skipped
    Passed,
    /// The player gave up; for the computer this means no playable word
    /// remains
    Resigned,
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Played(word) => write!(f, "played {}", word.to_uppercase()),
            Self::Passed => write!(f, "passed"),
            Self::Resigned => write!(f, "resigned"),
        }
    }
}
