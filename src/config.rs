//! Match configuration
//!
//! Built from the global command-line flags and shared by every command.

use crate::core::{Board, BoardError};
use crate::game::ProtectionRule;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Largest accepted board side
pub const MAX_SIDE: usize = 26;

/// Knobs for creating boards and games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Seed for board generation; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub protection: ProtectionRule,
    /// Word list to load instead of the embedded one
    pub dictionary: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            seed: None,
            protection: ProtectionRule::default(),
            dictionary: None,
        }
    }
}

/// Error type for rejected configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A side of zero or larger than [`MAX_SIDE`]
    Dimensions { width: usize, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { width, height } => write!(
                f,
                "Invalid board size {width}x{height} (each side must be 1-{MAX_SIDE})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Check the configuration before any board is built
    ///
    /// # Errors
    /// Returns `ConfigError::Dimensions` for a zero or oversized side.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 || self.width > MAX_SIDE || self.height > MAX_SIDE {
            Err(ConfigError::Dimensions {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(())
        }
    }

    /// RNG for the `index`-th board of a run
    ///
    /// With a seed every index gets its own reproducible stream.
    #[must_use]
    pub fn rng_for(&self, index: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Generate the `index`-th board of a run
    ///
    /// # Errors
    /// Returns `BoardError::EmptyDimensions` if a side is zero.
    ///
    /// # Examples
    /// ```
    /// use wordsmush::config::GameConfig;
    ///
    /// let config = GameConfig { seed: Some(7), ..GameConfig::default() };
    /// assert_eq!(config.board(0).unwrap(), config.board(0).unwrap());
    /// ```
    pub fn board(&self, index: u64) -> Result<Board, BoardError> {
        debug!(width = self.width, height = self.height, seed = ?self.seed, index, "generating board");
        Board::random(self.width, self.height, &mut self.rng_for(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_by_five() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (5, 5));
        assert_eq!(config.protection, ProtectionRule::Permanent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_dimensions() {
        for (width, height) in [(0, 5), (5, 0), (MAX_SIDE + 1, 3)] {
            let config = GameConfig {
                width,
                height,
                ..GameConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::Dimensions { width, height })
            );
        }
    }

    #[test]
    fn seeded_boards_are_reproducible_per_index() {
        let config = GameConfig {
            seed: Some(42),
            width: 4,
            height: 3,
            ..GameConfig::default()
        };
        let first = config.board(0).unwrap();
        assert_eq!(first, config.board(0).unwrap());
        assert_eq!(first.width(), 4);
        assert_eq!(first.height(), 3);
        assert_ne!(first, config.board(1).unwrap());
    }
}
