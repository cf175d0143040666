//! Core domain types for Wordsmush
//!
//! Tiles, the board grid, letter multisets and the word-in-progress. These
//! types know nothing about dictionaries or turn order.

pub(crate) mod board;
mod letters;
mod tile;
mod word;

pub use board::{Board, BoardError};
pub use letters::{ALPHABET_LEN, LETTER_WEIGHTS, LetterCounts, letter_index, random_letter};
pub use tile::{Ownership, PlayerId, Position, Tile, TileStatus};
pub use word::{SelectedTile, Word, WordError};
