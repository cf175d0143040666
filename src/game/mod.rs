//! Game rules: legality, claiming, protection and scoring

pub mod engine;
pub mod error;
pub mod player;
pub mod protection;

pub use engine::{Game, GameId, MIN_WORD_LENGTH};
pub use error::{IllegalReason, PlayError};
pub use player::{Player, Scores, TurnOutcome};
pub use protection::{ProtectionRule, next_ownership};
