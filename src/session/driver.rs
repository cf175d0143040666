//! Match driver
//!
//! A `Session` alternates turns between two seats, holds the human player's
//! word-in-progress, and decides when and how the match ends.

use super::command::Command;
use crate::core::{BoardError, PlayerId, Word, WordError};
use crate::game::{Game, PlayError, Scores, TurnOutcome};
use crate::solver::{Solver, StrategyType};
use std::fmt;
use tracing::{debug, info, instrument};

/// Who sits in a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer(StrategyType),
}

impl Seat {
    #[inline]
    #[must_use]
    pub const fn is_computer(self) -> bool {
        matches!(self, Self::Computer(_))
    }
}

/// Why a match finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every tile has an owner
    BoardFull,
    /// This player gave up
    Resigned(PlayerId),
    /// Both players passed in a row
    Passes,
}

/// Final result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// `None` for a draw
    pub winner: Option<PlayerId>,
    pub scores: Scores,
    pub reason: EndReason,
    pub turns: usize,
}

/// One resolved turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub outcome: TurnOutcome,
    /// Scores after the turn
    pub scores: Scores,
}

/// Error type for session actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Board(BoardError),
    Word(WordError),
    Play(PlayError),
    /// The match is already over
    Finished,
    /// A human action was attempted on a computer seat, or the reverse
    WrongSeat(PlayerId),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(err) => write!(f, "{err}"),
            Self::Word(err) => write!(f, "{err}"),
            Self::Play(err) => write!(f, "{err}"),
            Self::Finished => write!(f, "The match is over"),
            Self::WrongSeat(player) => write!(f, "It is not {player}'s move to make here"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            Self::Word(err) => Some(err),
            Self::Play(err) => Some(err),
            Self::Finished | Self::WrongSeat(_) => None,
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<WordError> for SessionError {
    fn from(err: WordError) -> Self {
        Self::Word(err)
    }
}

impl From<PlayError> for SessionError {
    fn from(err: PlayError) -> Self {
        Self::Play(err)
    }
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The word-in-progress changed
    Selection,
    /// Help was requested
    Help,
    /// The turn ended
    Turn(TurnOutcome),
}

/// A match between two seats
pub struct Session<'d> {
    game: Game<'d>,
    seats: [Seat; 2],
    solvers: [Option<Solver<'d>>; 2],
    selection: Word,
    to_move: PlayerId,
    passes: u8,
    resigned: Option<PlayerId>,
    log: Vec<TurnRecord>,
}

impl<'d> Session<'d> {
    /// Start a match; player one moves first
    #[must_use]
    pub fn new(game: Game<'d>, seats: [Seat; 2]) -> Self {
        let dictionary = game.dictionary();
        let solvers = seats.map(|seat| match seat {
            Seat::Computer(strategy) => Some(Solver::new(strategy, dictionary)),
            Seat::Human => None,
        });
        Self {
            game,
            seats,
            solvers,
            selection: Word::new(),
            to_move: PlayerId::One,
            passes: 0,
            resigned: None,
            log: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game<'d> {
        &self.game
    }

    /// The current human word-in-progress
    #[inline]
    #[must_use]
    pub const fn selection(&self) -> &Word {
        &self.selection
    }

    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> PlayerId {
        self.to_move
    }

    #[inline]
    #[must_use]
    pub const fn seat(&self, player: PlayerId) -> Seat {
        self.seats[player.index()]
    }

    /// Resolved turns, oldest first
    #[inline]
    #[must_use]
    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    /// Whether the seat to move is a computer
    #[must_use]
    pub fn computer_to_move(&self) -> bool {
        !self.is_over() && self.seat(self.to_move).is_computer()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end_reason().is_some()
    }

    fn end_reason(&self) -> Option<EndReason> {
        if let Some(player) = self.resigned {
            Some(EndReason::Resigned(player))
        } else if self.game.is_game_over() {
            Some(EndReason::BoardFull)
        } else if self.passes >= 2 {
            Some(EndReason::Passes)
        } else {
            None
        }
    }

    /// The final result, once the match is over
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        let reason = self.end_reason()?;
        let scores = self.game.scores();
        let winner = match reason {
            EndReason::Resigned(player) => Some(player.opponent()),
            EndReason::BoardFull | EndReason::Passes => scores.leader(),
        };
        Some(MatchResult {
            winner,
            scores,
            reason,
            turns: self.log.len(),
        })
    }

    fn ensure_human_turn(&self) -> Result<(), SessionError> {
        if self.is_over() {
            Err(SessionError::Finished)
        } else if self.seat(self.to_move).is_computer() {
            Err(SessionError::WrongSeat(self.to_move))
        } else {
            Ok(())
        }
    }

    /// Apply a human command for the player to move
    ///
    /// # Errors
    /// Returns `SessionError` if the match is over, a computer is to move,
    /// or the edit or play is rejected. A rejected command changes nothing.
    ///
    /// # Examples
    /// ```
    /// use wordsmush::core::Board;
    /// use wordsmush::dictionary::Dictionary;
    /// use wordsmush::game::{Game, Player};
    /// use wordsmush::session::{Command, Seat, Session};
    ///
    /// let dictionary = Dictionary::from_words(["cab"]);
    /// let board = Board::from_letters(3, 1, "abc").unwrap();
    /// let game = Game::new(&dictionary, board, [Player::new("Ann"), Player::new("Bob")]);
    /// let mut session = Session::new(game, [Seat::Human, Seat::Human]);
    ///
    /// for input in ["3,1", "1,1", "2,1", "play"] {
    ///     session.apply(input.parse::<Command>().unwrap()).unwrap();
    /// }
    /// assert!(session.is_over());
    /// ```
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply(&mut self, command: Command) -> Result<Response, SessionError> {
        if command == Command::Help {
            return Ok(Response::Help);
        }
        self.ensure_human_turn()?;

        match command {
            Command::AddTile { x, y, position } => {
                let tile = self.game.get_tile(x, y)?;
                self.selection.add_tile(tile, position);
                Ok(Response::Selection)
            }
            Command::Remove(index) => {
                self.selection.remove_tile_at_position(index)?;
                Ok(Response::Selection)
            }
            Command::Clear => {
                self.selection.clear();
                Ok(Response::Selection)
            }
            Command::Play => {
                self.game.play(self.to_move, &self.selection)?;
                let text = self.selection.text();
                Ok(Response::Turn(self.finish_turn(TurnOutcome::Played(text))))
            }
            Command::Pass => Ok(Response::Turn(self.finish_turn(TurnOutcome::Passed))),
            Command::Resign => Ok(Response::Turn(self.finish_turn(TurnOutcome::Resigned))),
            Command::Help => Ok(Response::Help),
        }
    }

    /// Let the computer in the current seat take its turn
    ///
    /// # Errors
    /// Returns `SessionError::WrongSeat` if a human is to move, `Finished` if
    /// the match is over, or the game's rejection of the computer's word.
    pub fn computer_turn(&mut self) -> Result<TurnOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::Finished);
        }
        let player = self.to_move;
        let Some(solver) = self.solvers[player.index()].as_mut() else {
            return Err(SessionError::WrongSeat(player));
        };

        let outcome = solver.take_turn(&mut self.game, player)?;
        Ok(self.finish_turn(outcome))
    }

    /// Run computer turns until a human is to move or the match ends
    ///
    /// # Errors
    /// Propagates errors from [`Session::computer_turn`].
    pub fn advance_computers(&mut self) -> Result<Vec<TurnRecord>, SessionError> {
        let start = self.log.len();
        while self.computer_to_move() {
            self.computer_turn()?;
        }
        Ok(self.log[start..].to_vec())
    }

    fn finish_turn(&mut self, outcome: TurnOutcome) -> TurnOutcome {
        let player = self.to_move;
        match &outcome {
            TurnOutcome::Played(_) => self.passes = 0,
            TurnOutcome::Passed => self.passes += 1,
            TurnOutcome::Resigned => self.resigned = Some(player),
        }

        let scores = self.game.scores();
        info!(%player, %outcome, %scores, "turn finished");
        self.log.push(TurnRecord {
            player,
            outcome: outcome.clone(),
            scores,
        });

        self.selection.clear();
        self.to_move = player.opponent();

        if let Some(result) = self.result() {
            debug!(reason = ?result.reason, winner = ?result.winner, "match over");
            for solver in self.solvers.iter_mut().flatten() {
                solver.forget(self.game.id());
            }
        }
        outcome
    }
}
