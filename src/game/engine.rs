//! Game state and the word-legality engine

use super::error::{IllegalReason, PlayError};
use super::player::{Player, Scores};
use super::protection::{ProtectionRule, next_ownership};
use crate::core::{Board, BoardError, Ownership, PlayerId, Tile, Word};
use crate::dictionary::Dictionary;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument};

/// Minimum number of letters in a playable word
pub const MIN_WORD_LENGTH: usize = 3;

static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a game, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(u64);

impl GameId {
    fn next() -> Self {
        Self(NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A two-player game on one board
///
/// Scores are never stored: they are read from board ownership.
pub struct Game<'d> {
    id: GameId,
    board: Board,
    players: [Player; 2],
    dictionary: &'d Dictionary,
    history: Vec<String>,
    protection: ProtectionRule,
}

impl<'d> Game<'d> {
    /// Start a game on `board` with the default protection rule
    ///
    /// # Examples
    /// ```
    /// use wordsmush::core::{Board, PlayerId, Word};
    /// use wordsmush::dictionary::Dictionary;
    /// use wordsmush::game::{Game, Player};
    ///
    /// let dictionary = Dictionary::from_words(["cab"]);
    /// let board = Board::from_letters(3, 1, "abc").unwrap();
    /// let mut game = Game::new(&dictionary, board, [Player::new("Ann"), Player::new("Bob")]);
    ///
    /// let mut word = Word::new();
    /// for x in [2, 0, 1] {
    ///     word.add_tile(game.get_tile(x, 0).unwrap(), None);
    /// }
    /// game.play(PlayerId::One, &word).unwrap();
    /// assert_eq!(game.get_points(PlayerId::One), 3);
    /// assert!(game.is_game_over());
    /// ```
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, board: Board, players: [Player; 2]) -> Self {
        Self {
            id: GameId::next(),
            board,
            players,
            dictionary,
            history: Vec::new(),
            protection: ProtectionRule::default(),
        }
    }

    /// Use a different protection rule
    #[must_use]
    pub fn with_protection(mut self, rule: ProtectionRule) -> Self {
        self.protection = rule;
        self
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn player(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    #[inline]
    #[must_use]
    pub const fn protection(&self) -> ProtectionRule {
        self.protection
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Words played so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Get the tile at zero-based `(x, y)`
    ///
    /// # Errors
    /// Returns `BoardError::OutOfRange` if the coordinates are off the board.
    pub fn get_tile(&self, x: usize, y: usize) -> Result<&Tile, BoardError> {
        self.board.get_tile(x, y)
    }

    /// Whether `text` is a dictionary word
    #[must_use]
    pub fn is_a_word(&self, text: &str) -> bool {
        self.dictionary.contains(text)
    }

    /// Whether `text` has not been used up by the play history
    ///
    /// A word is used up when it equals, or is a prefix of, any word already
    /// played. Longer words that extend a played word remain available.
    #[must_use]
    pub fn is_playable_word(&self, text: &str) -> bool {
        let text = text.to_ascii_lowercase();
        !self.history.iter().any(|played| played.starts_with(&text))
    }

    /// Whether `word` may be played now
    #[must_use]
    pub fn is_playable(&self, word: &Word) -> bool {
        self.is_playable_text(&word.text())
    }

    /// Whether a word with this text may be played now
    #[must_use]
    pub fn is_playable_text(&self, text: &str) -> bool {
        self.check_text(text).is_ok()
    }

    fn check_text(&self, text: &str) -> Result<(), IllegalReason> {
        if text.len() < MIN_WORD_LENGTH {
            Err(IllegalReason::TooShort)
        } else if !self.is_a_word(text) {
            Err(IllegalReason::NotAWord)
        } else if !self.is_playable_word(text) {
            Err(IllegalReason::AlreadyPlayed)
        } else {
            Ok(())
        }
    }

    fn check_tiles(&self, word: &Word) -> Result<(), IllegalReason> {
        for selected in word.tiles() {
            match self.board.tile_at(selected.position) {
                Ok(tile) if tile.letter() == selected.letter => {}
                _ => return Err(IllegalReason::ForeignTile(selected.position)),
            }
        }
        Ok(())
    }

    /// Play `word` for `player`
    ///
    /// Every unprotected tile of the word is claimed; protected tiles are
    /// spelled through without changing hands. Protection is then
    /// recomputed and the word is added to the history.
    ///
    /// # Errors
    /// Returns `PlayError::IllegalMove` if the word is not playable; the game
    /// is left unchanged.
    #[instrument(skip(self, word), fields(game = %self.id, word = %word.text()))]
    pub fn play(&mut self, player: PlayerId, word: &Word) -> Result<(), PlayError> {
        let text = word.text();
        if let Err(reason) = self.check_tiles(word).and_then(|()| self.check_text(&text)) {
            debug!(%reason, "rejected word");
            return Err(PlayError::IllegalMove { word: text, reason });
        }

        for position in word.positions() {
            let protected = self.board.tile_at(position).is_ok_and(Tile::is_protected);
            if !protected {
                self.board.set_ownership(position, Ownership::Taken(player));
            }
        }

        self.recompute_protection();
        self.history.push(text);

        debug!(scores = %self.scores(), "word played");
        Ok(())
    }

    /// Recompute the protected status of every owned tile
    pub fn recompute_protection(&mut self) {
        let states = next_ownership(&self.board, self.protection);
        self.board.commit_ownership(&states);
    }

    /// Number of tiles owned by `player`
    #[must_use]
    pub fn get_points(&self, player: PlayerId) -> usize {
        self.board.count_owned_by(player)
    }

    /// Current scores of both players
    #[must_use]
    pub fn scores(&self) -> Scores {
        Scores {
            one: self.get_points(PlayerId::One),
            two: self.get_points(PlayerId::Two),
        }
    }

    /// Scores that playing `word` for `player` would produce
    ///
    /// Counts tiles claimed before protection is recomputed. Does not check
    /// legality and changes nothing.
    #[must_use]
    pub fn potential_score(&self, player: PlayerId, word: &Word) -> Scores {
        let mut scores = self.scores();
        for position in word.positions() {
            let Ok(tile) = self.board.tile_at(position) else {
                continue;
            };
            match tile.ownership() {
                Ownership::Untaken => *score_mut(&mut scores, player) += 1,
                Ownership::Taken(owner) if owner != player => {
                    *score_mut(&mut scores, player) += 1;
                    *score_mut(&mut scores, owner) -= 1;
                }
                _ => {}
            }
        }
        scores
    }

    /// Whether every tile has an owner
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
    }

    /// The seat with more tiles once the game is over
    ///
    /// Returns `None` while the game is running or when it ended in a tie.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_game_over() {
            self.scores().leader()
        } else {
            None
        }
    }
}

const fn score_mut(scores: &mut Scores, player: PlayerId) -> &mut usize {
    match player {
        PlayerId::One => &mut scores.one,
        PlayerId::Two => &mut scores.two,
    }
}

impl fmt::Debug for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("board", &self.board)
            .field("players", &self.players)
            .field("history", &self.history)
            .field("protection", &self.protection)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::tests::alpha_board;
    use crate::core::{Position, TileStatus};

    fn players() -> [Player; 2] {
        [Player::new("one"), Player::new("two")]
    }

    fn spell(game: &Game, cells: &[(usize, usize)]) -> Word {
        let mut word = Word::new();
        for &(x, y) in cells {
            word.add_tile(game.get_tile(x, y).unwrap(), None);
        }
        word
    }

    fn frantic_board() -> Board {
        Board::from_letters(5, 5, "frabc nahij timno csgxq uvwyz").unwrap()
    }

    const FRANTIC: [(usize, usize); 7] = [(0, 0), (1, 0), (1, 1), (0, 1), (0, 2), (1, 2), (0, 3)];
    const FANATIC: [(usize, usize); 7] = [(0, 0), (1, 1), (0, 1), (2, 0), (0, 2), (1, 2), (0, 3)];

    fn assert_owner_invariant(game: &Game) {
        for tile in game.board().tiles() {
            assert_eq!(
                tile.status() == TileStatus::Untaken,
                tile.owner().is_none(),
                "tile {} breaks the owner invariant",
                tile.position()
            );
        }
    }

    #[test]
    fn get_tile_delegates_to_board() {
        let dictionary = Dictionary::default();
        let game = Game::new(&dictionary, alpha_board(), players());

        let tile = game.get_tile(0, 0).unwrap();
        assert_eq!(tile.letter(), b'a');
        assert_eq!(tile.status(), TileStatus::Untaken);
        assert_eq!(
            game.get_tile(7, 1).unwrap_err(),
            BoardError::OutOfRange { x: 7, y: 1 }
        );
    }

    #[test]
    fn is_playable() {
        let dictionary = Dictionary::from_words(["planting", "plantings", "plan", "at"]);
        let mut game = Game::new(&dictionary, alpha_board(), players());

        assert!(game.is_playable_text("planting"));
        game.history.push("planting".to_string());

        // Not a dictionary word
        assert!(!game.is_playable_text("xxdjfhskfh"));
        // Played before
        assert!(!game.is_playable_text("planting"));
        // Prefix of a word played before
        assert!(!game.is_playable_text("plan"));
        // Extending a played word is allowed
        assert!(game.is_playable_text("plantings"));
        // Too short even though it is a dictionary word
        assert!(!game.is_playable_text("at"));
    }

    #[test]
    fn is_playable_word_is_one_directional() {
        let dictionary = Dictionary::default();
        let mut game = Game::new(&dictionary, alpha_board(), players());
        game.history.push("planting".to_string());

        assert!(!game.is_playable_word("planting"));
        assert!(!game.is_playable_word("plan"));
        assert!(!game.is_playable_word("PLAN"));
        assert!(game.is_playable_word("plantings"));
        assert!(game.is_playable_word("lanting"));
    }

    #[test]
    fn short_words_are_never_playable() {
        let dictionary = Dictionary::from_words(["a", "ab"]);
        let game = Game::new(&dictionary, alpha_board(), players());

        let word = spell(&game, &[(0, 0), (1, 0)]);
        assert!(!game.is_playable(&word));
        assert!(!game.is_playable_text("a"));
    }

    #[test]
    fn protection_after_frantic() {
        let dictionary = Dictionary::from_words(["frantic", "fanatic"]);
        let mut game = Game::new(&dictionary, frantic_board(), players());

        let word = spell(&game, &FRANTIC);
        assert_eq!(word.text(), "frantic");
        game.play(PlayerId::One, &word).unwrap();

        for &(x, y) in &FRANTIC {
            assert_eq!(game.get_tile(x, y).unwrap().owner(), Some(PlayerId::One));
        }
        assert_eq!(game.get_tile(0, 0).unwrap().status(), TileStatus::Protected);
        assert_eq!(game.get_tile(0, 1).unwrap().status(), TileStatus::Protected);
        assert_eq!(game.get_tile(0, 2).unwrap().status(), TileStatus::Protected);
        assert_eq!(game.get_tile(1, 0).unwrap().status(), TileStatus::Taken);
        assert_eq!(game.get_tile(0, 3).unwrap().status(), TileStatus::Taken);

        // A second play does not capture protected tiles
        let word2 = spell(&game, &FANATIC);
        assert_eq!(word2.text(), "fanatic");
        game.play(PlayerId::Two, &word2).unwrap();

        assert_eq!(game.get_tile(0, 0).unwrap().owner(), Some(PlayerId::One));
        assert_eq!(game.get_tile(0, 1).unwrap().owner(), Some(PlayerId::One));
        assert_eq!(game.get_tile(0, 1).unwrap().status(), TileStatus::Protected);
        assert_eq!(game.get_tile(1, 1).unwrap().owner(), Some(PlayerId::Two));
        assert_eq!(game.get_tile(0, 3).unwrap().owner(), Some(PlayerId::Two));
        assert_owner_invariant(&game);
    }

    #[test]
    fn reversible_protection_drops_after_capture() {
        let dictionary = Dictionary::from_words(["frantic", "fanatic"]);
        let mut game = Game::new(&dictionary, frantic_board(), players())
            .with_protection(ProtectionRule::Reversible);

        game.play(PlayerId::One, &spell(&game, &FRANTIC)).unwrap();
        game.play(PlayerId::Two, &spell(&game, &FANATIC)).unwrap();

        // (0, 1) lost its neighbor (1, 1) to player two
        let tile = game.get_tile(0, 1).unwrap();
        assert_eq!(tile.owner(), Some(PlayerId::One));
        assert_eq!(tile.status(), TileStatus::Taken);
        // (0, 0) still has both neighbors
        assert_eq!(game.get_tile(0, 0).unwrap().status(), TileStatus::Protected);
    }

    #[test]
    fn recompute_protection_is_idempotent() {
        let dictionary = Dictionary::from_words(["frantic", "fanatic"]);
        let mut game = Game::new(&dictionary, frantic_board(), players());
        game.play(PlayerId::One, &spell(&game, &FRANTIC)).unwrap();
        game.play(PlayerId::Two, &spell(&game, &FANATIC)).unwrap();

        let before = game.board().clone();
        game.recompute_protection();
        assert_eq!(game.board(), &before);
        game.recompute_protection();
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn get_points() {
        let dictionary = Dictionary::from_words(["cat", "bat", "fabric", "cab"]);
        let mut game = Game::new(&dictionary, alpha_board(), players());

        let cat = spell(&game, &[(2, 0), (0, 0), (4, 3)]);
        game.play(PlayerId::One, &cat).unwrap();
        assert_eq!(game.get_points(PlayerId::One), 3);
        assert_eq!(game.get_points(PlayerId::Two), 0);

        let bat = spell(&game, &[(1, 0), (0, 0), (4, 3)]);
        game.play(PlayerId::Two, &bat).unwrap();
        assert_eq!(game.get_points(PlayerId::One), 1);
        assert_eq!(game.get_points(PlayerId::Two), 3);

        let fabric = spell(&game, &[(0, 1), (0, 0), (1, 0), (2, 3), (3, 1), (2, 0)]);
        game.play(PlayerId::One, &fabric).unwrap();
        // (0, 0) is now protected
        assert_eq!(game.get_tile(0, 0).unwrap().status(), TileStatus::Protected);
        assert_eq!(game.get_points(PlayerId::One), 6);
        assert_eq!(game.get_points(PlayerId::Two), 1);

        let cab = spell(&game, &[(2, 0), (0, 0), (1, 0)]);
        game.play(PlayerId::Two, &cab).unwrap();
        assert_eq!(game.get_points(PlayerId::One), 4);
        assert_eq!(game.get_points(PlayerId::Two), 3);

        assert_eq!(game.history(), &["cat", "bat", "fabric", "cab"]);
    }

    #[test]
    fn scores_sum_to_owned_tiles_after_every_play() {
        let dictionary = Dictionary::from_words(["cat", "bat", "fabric", "cab"]);
        let mut game = Game::new(&dictionary, alpha_board(), players());
        let plays: [(PlayerId, &[(usize, usize)]); 4] = [
            (PlayerId::One, &[(2, 0), (0, 0), (4, 3)]),
            (PlayerId::Two, &[(1, 0), (0, 0), (4, 3)]),
            (PlayerId::One, &[(0, 1), (0, 0), (1, 0), (2, 3), (3, 1), (2, 0)]),
            (PlayerId::Two, &[(2, 0), (0, 0), (1, 0)]),
        ];

        for (player, cells) in plays {
            let word = spell(&game, cells);
            game.play(player, &word).unwrap();

            let owned = game
                .board()
                .tiles()
                .iter()
                .filter(|t| t.owner().is_some())
                .count();
            assert_eq!(game.scores().total(), owned);
            assert_owner_invariant(&game);
        }
    }

    #[test]
    fn illegal_play_changes_nothing() {
        let dictionary = Dictionary::from_words(["cab"]);
        let mut game = Game::new(&dictionary, alpha_board(), players());
        let cab = spell(&game, &[(2, 0), (0, 0), (1, 0)]);
        game.play(PlayerId::One, &cab).unwrap();

        let board_before = game.board().clone();

        // Repeat
        let err = game.play(PlayerId::Two, &cab).unwrap_err();
        assert_eq!(
            err,
            PlayError::IllegalMove {
                word: "cab".into(),
                reason: IllegalReason::AlreadyPlayed
            }
        );

        // Not a word
        let bad = spell(&game, &[(1, 0), (0, 0), (2, 0)]);
        let err = game.play(PlayerId::Two, &bad).unwrap_err();
        assert!(matches!(
            err,
            PlayError::IllegalMove {
                reason: IllegalReason::NotAWord,
                ..
            }
        ));

        assert_eq!(game.board(), &board_before);
        assert_eq!(game.history(), &["cab"]);
    }

    #[test]
    fn tiles_from_another_board_are_rejected() {
        let dictionary = Dictionary::from_words(["cab"]);
        let mut game = Game::new(&dictionary, alpha_board(), players());

        let other = Board::from_letters(6, 1, "xxxcab").unwrap();
        let mut word = Word::new();
        for x in 3..6 {
            word.add_tile(other.get_tile(x, 0).unwrap(), None);
        }
        assert_eq!(word.text(), "cab");

        let err = game.play(PlayerId::One, &word).unwrap_err();
        assert!(matches!(
            err,
            PlayError::IllegalMove {
                reason: IllegalReason::ForeignTile(_),
                ..
            }
        ));
        assert!(game.board().tiles().iter().all(|t| t.owner().is_none()));
        assert!(game.history().is_empty());
    }

    #[test]
    fn is_game_over() {
        let dictionary = Dictionary::default();
        let mut game = Game::new(&dictionary, alpha_board(), players());
        assert!(!game.is_game_over());

        // All tiles taken
        let positions: Vec<Position> = game.board().tiles().iter().map(Tile::position).collect();
        for (i, &position) in positions.iter().enumerate() {
            let owner = if i % 2 == 0 { PlayerId::One } else { PlayerId::Two };
            game.board.set_ownership(position, Ownership::Taken(owner));
        }
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(PlayerId::One));

        // Only some tiles taken
        game.board
            .set_ownership(Position::new(2, 2), Ownership::Untaken);
        game.board
            .set_ownership(Position::new(3, 3), Ownership::Untaken);
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn potential_score_counts_captures() {
        let dictionary = Dictionary::from_words(["cat", "bat", "fabric", "cab"]);
        let mut game = Game::new(&dictionary, alpha_board(), players());
        game.play(PlayerId::One, &spell(&game, &[(2, 0), (0, 0), (4, 3)]))
            .unwrap();

        let bat = spell(&game, &[(1, 0), (0, 0), (4, 3)]);
        let predicted = game.potential_score(PlayerId::Two, &bat);
        assert_eq!(predicted, Scores { one: 1, two: 3 });

        // Nothing changed
        assert_eq!(game.scores(), Scores { one: 3, two: 0 });

        game.play(PlayerId::Two, &bat).unwrap();
        assert_eq!(game.scores(), predicted);
    }

    #[test]
    fn potential_score_skips_protected_tiles() {
        let dictionary = Dictionary::from_words(["frantic", "fanatic"]);
        let mut game = Game::new(&dictionary, frantic_board(), players());
        game.play(PlayerId::One, &spell(&game, &FRANTIC)).unwrap();

        let fanatic = spell(&game, &FANATIC);
        let predicted = game.potential_score(PlayerId::Two, &fanatic);
        // (0, 0), (0, 1) and (0, 2) are protected
        assert_eq!(predicted, Scores { one: 4, two: 4 });
    }

    #[test]
    fn game_ids_are_unique() {
        let dictionary = Dictionary::default();
        let a = Game::new(&dictionary, alpha_board(), players());
        let b = Game::new(&dictionary, alpha_board(), players());
        assert_ne!(a.id(), b.id());
    }
}
