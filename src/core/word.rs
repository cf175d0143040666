//! Word-in-progress: an ordered selection of board tiles
//!
//! A `Word` records the tiles a player has picked, in spelling order. It
//! refers to tiles by position and keeps a copy of each tile's letter, which
//! never changes during a game.

use super::tile::{Position, Tile};
use std::fmt;

/// Error type for selection edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The tile is not part of the selection
    NotFound(Position),
    /// Position index beyond the end of the selection
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(position) => write!(f, "Tile at {position} is not in the word"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "No letter at position {index} (word has {len} letters)")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// A tile reference held by a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedTile {
    pub position: Position,
    pub letter: u8,
}

impl From<&Tile> for SelectedTile {
    fn from(tile: &Tile) -> Self {
        Self {
            position: tile.position(),
            letter: tile.letter(),
        }
    }
}

/// Ordered selection of distinct tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    tiles: Vec<SelectedTile>,
}

impl Word {
    #[must_use]
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Add a tile, optionally at a specific position
    ///
    /// A tile already in the word is moved: it is removed first, then
    /// inserted. Positions past the end are clamped, so the tile is appended.
    ///
    /// # Examples
    /// ```
    /// use wordsmush::core::{Board, Word};
    ///
    /// let board = Board::from_letters(3, 1, "abc").unwrap();
    /// let mut word = Word::new();
    /// word.add_tile(board.get_tile(0, 0).unwrap(), None);
    /// word.add_tile(board.get_tile(1, 0).unwrap(), None);
    /// word.add_tile(board.get_tile(2, 0).unwrap(), Some(0));
    /// assert_eq!(word.text(), "cab");
    /// ```
    pub fn add_tile(&mut self, tile: &Tile, position: Option<usize>) {
        let selected = SelectedTile::from(tile);
        self.tiles.retain(|t| t.position != selected.position);

        match position {
            Some(index) => {
                let index = index.min(self.tiles.len());
                self.tiles.insert(index, selected);
            }
            None => self.tiles.push(selected),
        }
    }

    /// Remove a tile from the word
    ///
    /// # Errors
    /// Returns `WordError::NotFound` if the tile is not selected.
    pub fn remove_tile(&mut self, tile: &Tile) -> Result<(), WordError> {
        let index = self
            .index_of(tile.position())
            .ok_or(WordError::NotFound(tile.position()))?;
        self.tiles.remove(index);
        Ok(())
    }

    /// Remove the tile at a zero-based position in the word
    ///
    /// # Errors
    /// Returns `WordError::IndexOutOfRange` if `index` is past the end.
    pub fn remove_tile_at_position(&mut self, index: usize) -> Result<SelectedTile, WordError> {
        if index >= self.tiles.len() {
            return Err(WordError::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            });
        }
        Ok(self.tiles.remove(index))
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Selected tiles in spelling order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[SelectedTile] {
        &self.tiles
    }

    /// Positions of the selected tiles in spelling order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().map(|t| t.position)
    }

    /// Whether the tile at `position` is selected
    #[inline]
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.index_of(position).is_some()
    }

    /// Zero-based index of `position` in the word
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.tiles.iter().position(|t| t.position == position)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The letters of the selected tiles, in order
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map(|t| char::from(t.letter)).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
