//! Board tiles and ownership state

use std::fmt;

/// One of the two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both seats, in turn order
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// The other seat
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Zero-based seat index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "player 1"),
            Self::Two => write!(f, "player 2"),
        }
    }
}

/// Zero-based grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ownership status of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStatus {
    Untaken,
    Taken,
    Protected,
}

/// Ownership state, combining status and owner
///
/// Owner is present exactly when the tile is not untaken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ownership {
    #[default]
    Untaken,
    Taken(PlayerId),
    Protected(PlayerId),
}

impl Ownership {
    #[inline]
    #[must_use]
    pub const fn status(self) -> TileStatus {
        match self {
            Self::Untaken => TileStatus::Untaken,
            Self::Taken(_) => TileStatus::Taken,
            Self::Protected(_) => TileStatus::Protected,
        }
    }

    #[inline]
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Self::Untaken => None,
            Self::Taken(player) | Self::Protected(player) => Some(player),
        }
    }
}

/// A single lettered cell of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    letter: u8,
    ownership: Ownership,
}

impl Tile {
    pub(crate) const fn new(position: Position, letter: u8) -> Self {
        Self {
            position,
            letter,
            ownership: Ownership::Untaken,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn x(&self) -> usize {
        self.position.x
    }

    #[inline]
    #[must_use]
    pub const fn y(&self) -> usize {
        self.position.y
    }

    /// The tile's lowercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn ownership(&self) -> Ownership {
        self.ownership
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> TileStatus {
        self.ownership.status()
    }

    #[inline]
    #[must_use]
    pub const fn owner(&self) -> Option<PlayerId> {
        self.ownership.owner()
    }

    #[inline]
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self.ownership, Ownership::Protected(_))
    }

    pub(crate) const fn set_ownership(&mut self, ownership: Ownership) {
        self.ownership = ownership;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_is_untaken() {
        let tile = Tile::new(Position::new(2, 3), b'q');
        assert_eq!(tile.x(), 2);
        assert_eq!(tile.y(), 3);
        assert_eq!(tile.letter(), b'q');
        assert_eq!(tile.status(), TileStatus::Untaken);
        assert_eq!(tile.owner(), None);
    }

    #[test]
    fn owner_present_iff_not_untaken() {
        for ownership in [
            Ownership::Untaken,
            Ownership::Taken(PlayerId::One),
            Ownership::Taken(PlayerId::Two),
            Ownership::Protected(PlayerId::One),
            Ownership::Protected(PlayerId::Two),
        ] {
            assert_eq!(
                ownership.status() == TileStatus::Untaken,
                ownership.owner().is_none()
            );
        }
    }

    #[test]
    fn opponent_swaps_seats() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(PlayerId::Two.index(), 1);
    }

    #[test]
    fn protected_tile_reports_owner() {
        let mut tile = Tile::new(Position::new(0, 0), b'a');
        tile.set_ownership(Ownership::Protected(PlayerId::Two));
        assert!(tile.is_protected());
        assert_eq!(tile.owner(), Some(PlayerId::Two));
        assert_eq!(tile.status(), TileStatus::Protected);
    }
}
