//! Wordsmush
//!
//! A two-player word-claiming game on a grid of letters. Players spell words
//! from any tiles on the board to claim them; tiles surrounded by their
//! owner's tiles become protected. An exhaustive solver plays the computer
//! seat.
//!
//! # Quick Start
//!
//! ```rust
//! use wordsmush::core::{Board, PlayerId, Word};
//! use wordsmush::dictionary::Dictionary;
//! use wordsmush::game::{Game, Player};
//!
//! let dictionary = Dictionary::from_words(["cab", "tab"]);
//! let board = Board::from_letters(2, 2, "ca bt").unwrap();
//! let mut game = Game::new(&dictionary, board, [Player::new("Ann"), Player::new("Bob")]);
//!
//! let mut word = Word::new();
//! for (x, y) in [(0, 0), (1, 0), (0, 1)] {
//!     word.add_tile(game.get_tile(x, y).unwrap(), None);
//! }
//! game.play(PlayerId::One, &word).unwrap();
//! assert_eq!(game.get_points(PlayerId::One), 3);
//! ```

// Match settings
pub mod config;

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Rules, protection and scoring
pub mod game;

// Word-finding computer player
pub mod solver;

// Turn-by-turn match driver
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
