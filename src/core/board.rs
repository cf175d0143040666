//! The rectangular grid of lettered tiles
//!
//! Tiles are stored row-major and addressed by zero-based `(x, y)`
//! coordinates. Neighbors are found by coordinate lookup rather than stored
//! links.

use super::letters::{LetterCounts, random_letter};
use super::tile::{Ownership, PlayerId, Position, Tile};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for board construction and lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside `[0, width) x [0, height)`
    OutOfRange { x: usize, y: usize },
    /// Width or height of zero
    EmptyDimensions,
    /// `width * height` does not fit in `usize`
    TooLarge { width: usize, height: usize },
    /// Letter count does not match `width * height`
    LetterCount { expected: usize, got: usize },
    /// A board letter outside `a..=z`
    InvalidLetter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { x, y } => write!(f, "No tile at ({x}, {y})"),
            Self::EmptyDimensions => write!(f, "Board width and height must be at least 1"),
            Self::TooLarge { width, height } => {
                write!(f, "Board of {width}x{height} tiles is too large")
            }
            Self::LetterCount { expected, got } => {
                write!(f, "Board needs exactly {expected} letters, got {got}")
            }
            Self::InvalidLetter(letter) => write!(f, "'{letter}' is not a letter a-z"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Number of tiles on a `width x height` board
fn tile_count(width: usize, height: usize) -> Result<usize, BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::EmptyDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(BoardError::TooLarge { width, height })
}

/// Grid of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Generate a board with letters drawn from the weighted distribution
    ///
    /// # Errors
    /// Returns `BoardError::EmptyDimensions` if either dimension is zero, or
    /// `BoardError::TooLarge` if the tile count overflows.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordsmush::core::Board;
    ///
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let board = Board::random(5, 5, &mut rng).unwrap();
    /// assert_eq!(board.tiles().len(), 25);
    /// ```
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let count = tile_count(width, height)?;
        let letters = (0..count).map(|_| random_letter(rng));
        Ok(Self::build(width, height, letters))
    }

    /// Build a board from row-major letters
    ///
    /// Letters are case-insensitive; whitespace is ignored so rows may be
    /// written on separate lines.
    ///
    /// # Errors
    /// Returns `BoardError` if a dimension is zero or overflows, the number
    /// of letters is not `width * height`, or a character is not a letter.
    ///
    /// # Examples
    /// ```
    /// use wordsmush::core::Board;
    ///
    /// let board = Board::from_letters(3, 2, "cat dog").unwrap();
    /// assert_eq!(board.get_tile(1, 1).unwrap().letter(), b'o');
    /// ```
    pub fn from_letters(width: usize, height: usize, letters: &str) -> Result<Self, BoardError> {
        let count = tile_count(width, height)?;

        let mut parsed = Vec::with_capacity(count.min(letters.len()));
        for ch in letters.chars().filter(|c| !c.is_whitespace()) {
            let lower = ch.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(BoardError::InvalidLetter(ch));
            }
            parsed.push(lower as u8);
        }

        if parsed.len() != count {
            return Err(BoardError::LetterCount {
                expected: count,
                got: parsed.len(),
            });
        }

        Ok(Self::build(width, height, parsed))
    }

    fn build(width: usize, height: usize, letters: impl IntoIterator<Item = u8>) -> Self {
        let tiles = letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| Tile::new(Position::new(i % width, i / width), letter))
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies on the board
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get the tile at zero-based `(x, y)`
    ///
    /// # Errors
    /// Returns `BoardError::OutOfRange` if the coordinates are off the board.
    pub fn get_tile(&self, x: usize, y: usize) -> Result<&Tile, BoardError> {
        if self.contains(x, y) {
            Ok(&self.tiles[y * self.width + x])
        } else {
            Err(BoardError::OutOfRange { x, y })
        }
    }

    /// Get the tile at a position
    ///
    /// # Errors
    /// Returns `BoardError::OutOfRange` if the position is off the board.
    #[inline]
    pub fn tile_at(&self, position: Position) -> Result<&Tile, BoardError> {
        self.get_tile(position.x, position.y)
    }

    pub(crate) fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        if self.contains(position.x, position.y) {
            Some(&mut self.tiles[position.y * self.width + position.x])
        } else {
            None
        }
    }

    /// All tiles in row-major order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles of row `y`, left to right
    ///
    /// Returns an empty slice for rows off the board.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Tile] {
        if y < self.height {
            &self.tiles[y * self.width..(y + 1) * self.width]
        } else {
            &[]
        }
    }

    /// Tile directly above, or `None` on the top row
    #[must_use]
    pub fn neighbor_above(&self, tile: &Tile) -> Option<&Tile> {
        let y = tile.y().checked_sub(1)?;
        self.get_tile(tile.x(), y).ok()
    }

    /// Tile directly below, or `None` on the bottom row
    #[must_use]
    pub fn neighbor_below(&self, tile: &Tile) -> Option<&Tile> {
        self.get_tile(tile.x(), tile.y() + 1).ok()
    }

    /// Tile directly left, or `None` on the left-most column
    #[must_use]
    pub fn neighbor_left(&self, tile: &Tile) -> Option<&Tile> {
        let x = tile.x().checked_sub(1)?;
        self.get_tile(x, tile.y()).ok()
    }

    /// Tile directly right, or `None` on the right-most column
    #[must_use]
    pub fn neighbor_right(&self, tile: &Tile) -> Option<&Tile> {
        self.get_tile(tile.x() + 1, tile.y()).ok()
    }

    /// The up to four orthogonal neighbors of a tile
    pub fn neighbors<'b>(&'b self, tile: &Tile) -> impl Iterator<Item = &'b Tile> + use<'b> {
        [
            self.neighbor_above(tile),
            self.neighbor_below(tile),
            self.neighbor_left(tile),
            self.neighbor_right(tile),
        ]
        .into_iter()
        .flatten()
    }

    /// Tiles grouped by letter, each group in row-major order
    #[must_use]
    pub fn letters_by_character(&self) -> FxHashMap<u8, Vec<&Tile>> {
        let mut by_letter: FxHashMap<u8, Vec<&Tile>> = FxHashMap::default();
        for tile in &self.tiles {
            by_letter.entry(tile.letter()).or_default().push(tile);
        }
        by_letter
    }

    /// Letter multiset of the whole board
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        self.tiles.iter().map(Tile::letter).collect()
    }

    /// Number of tiles owned by `player`
    #[must_use]
    pub fn count_owned_by(&self, player: PlayerId) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.owner() == Some(player))
            .count()
    }

    /// Whether every tile has an owner
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.owner().is_some())
    }

    /// Board letters as one string per row
    #[must_use]
    pub fn rows_text(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row(y).iter().map(|t| char::from(t.letter())).collect())
            .collect()
    }

    pub(crate) fn set_ownership(&mut self, position: Position, ownership: Ownership) {
        if let Some(tile) = self.tile_mut(position) {
            tile.set_ownership(ownership);
        }
    }

    /// Overwrite every tile's ownership from row-major states
    pub(crate) fn commit_ownership(&mut self, states: &[Ownership]) {
        debug_assert_eq!(states.len(), self.tiles.len());
        for (tile, &state) in self.tiles.iter_mut().zip(states) {
            tile.set_ownership(state);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_text() {
            writeln!(f, "{}", row.to_uppercase())?;
        }
        Ok(())
    }
}
