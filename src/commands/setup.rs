//! Match setup shared by the interactive commands

use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::game::{Game, Player};
use crate::session::{Seat, Session};
use crate::solver::StrategyType;
use anyhow::Result;
use tracing::info;

/// Name that puts the computer in a seat
pub const COMPUTER_NAME: &str = "ai";

/// Display name of the computer player
pub const COMPUTER_PLAYER: &str = "Wordbot";

/// Turn a seat name into a player and seat
///
/// `ai` (any case) seats the computer.
#[must_use]
pub fn seat_for(name: &str, strategy: StrategyType) -> (Player, Seat) {
    let name = name.trim();
    if name.eq_ignore_ascii_case(COMPUTER_NAME) {
        (Player::new(COMPUTER_PLAYER), Seat::Computer(strategy))
    } else {
        (Player::new(name), Seat::Human)
    }
}

/// Create a match on a freshly generated board
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn new_session<'d>(
    dictionary: &'d Dictionary,
    config: &GameConfig,
    names: [&str; 2],
    strategy: StrategyType,
) -> Result<Session<'d>> {
    config.validate()?;
    let board = config.board(0)?;

    let [(one, seat_one), (two, seat_two)] = names.map(|name| seat_for(name, strategy));
    let game = Game::new(dictionary, board, [one, two]).with_protection(config.protection);
    info!(game = %game.id(), protection = %config.protection, "new match");

    Ok(Session::new(game, [seat_one, seat_two]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_name_seats_the_computer() {
        let (player, seat) = seat_for("AI", StrategyType::Score);
        assert_eq!(player.name(), COMPUTER_PLAYER);
        assert_eq!(seat, Seat::Computer(StrategyType::Score));

        let (player, seat) = seat_for(" Ann ", StrategyType::Score);
        assert_eq!(player.name(), "Ann");
        assert_eq!(seat, Seat::Human);
    }

    #[test]
    fn new_session_uses_config() {
        let dictionary = Dictionary::from_words(["cab"]);
        let config = GameConfig {
            width: 4,
            height: 3,
            seed: Some(9),
            ..GameConfig::default()
        };
        let session = new_session(&dictionary, &config, ["Ann", "ai"], StrategyType::Longest).unwrap();
        assert_eq!(session.game().board().tiles().len(), 12);
        assert_eq!(session.game().board(), &config.board(0).unwrap());
        assert!(session.seat(crate::core::PlayerId::Two).is_computer());
    }

    #[test]
    fn new_session_rejects_empty_board() {
        let dictionary = Dictionary::from_words(["cab"]);
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert!(new_session(&dictionary, &config, ["a", "b"], StrategyType::Longest).is_err());
    }
}
