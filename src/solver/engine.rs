//! Main solver interface

use super::strategy::{Move, Strategy, StrategyType};
use crate::core::{Board, LetterCounts, PlayerId, Word};
use crate::dictionary::Dictionary;
use crate::game::{Game, GameId, MIN_WORD_LENGTH, PlayError, TurnOutcome};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use tracing::{debug, info, instrument, warn};

/// Computer opponent
///
/// Holds the letter counts of every dictionary word and, per game, the list
/// of words the board can spell. A game's list is computed on the first turn
/// and kept until [`Solver::forget`] is called.
pub struct Solver<'d, S: Strategy = StrategyType> {
    strategy: S,
    entries: Vec<(&'d str, LetterCounts)>,
    cache: FxHashMap<GameId, Vec<&'d str>>,
}

impl<'d, S: Strategy> Solver<'d, S> {
    /// Create a solver over `dictionary`
    pub fn new(strategy: S, dictionary: &'d Dictionary) -> Self {
        let entries = dictionary
            .words()
            .par_iter()
            .filter_map(|word| LetterCounts::from_word(word).map(|counts| (word.as_str(), counts)))
            .collect();
        Self {
            strategy,
            entries,
            cache: FxHashMap::default(),
        }
    }

    /// Every dictionary word the board's letters can spell
    ///
    /// A word qualifies when no letter occurs in it more often than on the
    /// board. Ownership is ignored. Sorted longest first; words of equal
    /// length keep dictionary order.
    ///
    /// # Examples
    /// ```
    /// use wordsmush::core::Board;
    /// use wordsmush::dictionary::Dictionary;
    /// use wordsmush::solver::{Solver, StrategyType};
    ///
    /// let dictionary = Dictionary::from_words(["ab", "cab", "abba", "taxi"]);
    /// let board = Board::from_letters(3, 2, "abcbax").unwrap();
    /// let solver = Solver::new(StrategyType::default(), &dictionary);
    /// assert_eq!(solver.solve_board(&board), vec!["abba", "cab", "ab"]);
    /// ```
    #[instrument(skip_all, fields(width = board.width(), height = board.height()))]
    pub fn solve_board(&self, board: &Board) -> Vec<&'d str> {
        let available = board.letter_counts();

        let mut words: Vec<&'d str> = self
            .entries
            .par_iter()
            .filter(|(_, counts)| counts.fits_within(&available))
            .map(|&(word, _)| word)
            .collect();
        words.sort_by_key(|word| Reverse(word.len()));

        debug!(count = words.len(), "solved board");
        words
    }

    /// Words cached for a game, if its board has been solved
    #[must_use]
    pub fn cached_words(&self, id: GameId) -> Option<&[&'d str]> {
        self.cache.get(&id).map(Vec::as_slice)
    }

    /// Drop the cached word list of a finished game
    pub fn forget(&mut self, id: GameId) {
        self.cache.remove(&id);
    }

    fn ensure_solved(&mut self, game: &Game<'_>) {
        if !self.cache.contains_key(&game.id()) {
            let words = self.solve_board(game.board());
            self.cache.insert(game.id(), words);
        }
    }

    /// Choose a move for `player` without playing it
    ///
    /// Returns `None` when no cached word is both playable and spellable on
    /// the board.
    pub fn choose_move(&mut self, game: &Game<'_>, player: PlayerId) -> Option<Move<'d>> {
        self.ensure_solved(game);
        let words = self.cache.get(&game.id())?;

        let moves = words
            .iter()
            .filter(|&&text| text.len() >= MIN_WORD_LENGTH && game.is_playable_text(text))
            .filter_map(|&text| match materialize(game.board(), text) {
                Some(word) => Some(Move { text, word }),
                None => {
                    warn!(word = text, "could not place word on board, skipping");
                    None
                }
            });

        self.strategy.select_move(game, player, moves)
    }

    /// Play one turn for `player`
    ///
    /// Resigns when no playable word remains.
    ///
    /// # Errors
    /// Returns `PlayError` if the game rejects the chosen word.
    #[instrument(skip_all, fields(game = %game.id(), player = %player))]
    pub fn take_turn(
        &mut self,
        game: &mut Game<'_>,
        player: PlayerId,
    ) -> Result<TurnOutcome, PlayError> {
        let Some(chosen) = self.choose_move(game, player) else {
            info!("no playable words left, resigning");
            return Ok(TurnOutcome::Resigned);
        };

        game.play(player, &chosen.word)?;
        debug!(word = chosen.text, "computer played");
        Ok(TurnOutcome::Played(chosen.text.to_string()))
    }
}

/// Lay `text` out on the board
///
/// Each letter takes the first tile, in row-major order, that carries it
/// and is not already used by this word. There is no backtracking. Returns
/// `None` if some letter runs out.
#[must_use]
pub fn materialize(board: &Board, text: &str) -> Option<Word> {
    let by_letter = board.letters_by_character();
    let mut word = Word::new();

    for letter in text.bytes() {
        let tile = by_letter
            .get(&letter)?
            .iter()
            .find(|tile| !word.contains(tile.position()))?;
        word.add_tile(tile, None);
    }

    Some(word)
}
