//! Computer-vs-computer matches
//!
//! Plays many games on generated boards in parallel and summarizes the
//! results.

use crate::config::GameConfig;
use crate::core::PlayerId;
use crate::dictionary::Dictionary;
use crate::game::{Game, Player};
use crate::session::{EndReason, MatchResult, Seat, Session, SessionError};
use crate::solver::StrategyType;
use anyhow::Result;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Configuration for a self-play run
#[derive(Debug, Clone, Copy)]
pub struct SelfPlayConfig {
    pub games: usize,
    pub strategies: [StrategyType; 2],
    pub show_progress: bool,
}

impl SelfPlayConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            strategies: [StrategyType::Longest, StrategyType::Longest],
            show_progress: false,
        }
    }
}

/// Statistics from a self-play run
#[derive(Debug)]
pub struct SelfPlayStatistics {
    pub games: usize,
    pub wins: [usize; 2],
    pub draws: usize,
    pub full_boards: usize,
    pub resignations: usize,
    pub average_turns: f64,
    pub average_margin: f64,
    pub longest_word: Option<String>,
    pub duration: Duration,
}

struct GameSummary {
    result: MatchResult,
    longest_word: Option<String>,
}

fn play_one(
    index: usize,
    game_config: &GameConfig,
    dictionary: &Dictionary,
    strategies: [StrategyType; 2],
) -> Result<GameSummary> {
    let board = game_config.board(index as u64)?;
    let players = strategies.map(|strategy| Player::new(format!("Wordbot ({strategy})")));
    let game = Game::new(dictionary, board, players).with_protection(game_config.protection);
    let mut session = Session::new(game, strategies.map(Seat::Computer));

    session.advance_computers()?;
    let result = session.result().ok_or(SessionError::Finished)?;
    let longest_word = session
        .game()
        .history()
        .iter()
        .fold(None::<&String>, |best, word| match best {
            Some(b) if b.len() >= word.len() => Some(b),
            _ => Some(word),
        })
        .cloned();

    Ok(GameSummary {
        result,
        longest_word,
    })
}

/// Play `config.games` matches between two computer seats
///
/// Board `i` is generated from the configured seed plus `i`, so a seeded
/// run is reproducible.
///
/// # Errors
///
/// Returns an error if a board cannot be generated or a game rejects a
/// computer move.
#[instrument(skip_all, fields(games = config.games))]
pub fn run_selfplay(
    config: &SelfPlayConfig,
    game_config: &GameConfig,
    dictionary: &Dictionary,
) -> Result<SelfPlayStatistics> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Playing");

    let summaries: Vec<GameSummary> = (0..config.games)
        .into_par_iter()
        .progress_with(pb.clone())
        .map(|index| play_one(index, game_config, dictionary, config.strategies))
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    let stats = summarize(&summaries, start.elapsed());
    info!(wins = ?stats.wins, draws = stats.draws, "self-play finished");
    Ok(stats)
}

fn summarize(summaries: &[GameSummary], duration: Duration) -> SelfPlayStatistics {
    let games = summaries.len();
    let mut wins = [0; 2];
    let mut draws = 0;
    let mut full_boards = 0;
    let mut resignations = 0;
    let mut turns = 0;
    let mut margin = 0;
    let mut longest_word: Option<&String> = None;

    for summary in summaries {
        let result = &summary.result;
        match result.winner {
            Some(player) => wins[player.index()] += 1,
            None => draws += 1,
        }
        match result.reason {
            EndReason::BoardFull => full_boards += 1,
            EndReason::Resigned(_) => resignations += 1,
            EndReason::Passes => {}
        }
        turns += result.turns;
        margin += result
            .scores
            .get(PlayerId::One)
            .abs_diff(result.scores.get(PlayerId::Two));
        if let Some(word) = &summary.longest_word
            && longest_word.is_none_or(|best| word.len() > best.len())
        {
            longest_word = Some(word);
        }
    }

    let per_game = |total: usize| {
        if games == 0 {
            0.0
        } else {
            total as f64 / games as f64
        }
    };

    SelfPlayStatistics {
        games,
        wins,
        draws,
        full_boards,
        resignations,
        average_turns: per_game(turns),
        average_margin: per_game(margin),
        longest_word: longest_word.cloned(),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn selfplay_accounts_for_every_game() {
        let dictionary = Dictionary::embedded();
        let config = SelfPlayConfig::new(6);
        let stats = run_selfplay(&config, &seeded(11), &dictionary).unwrap();

        assert_eq!(stats.games, 6);
        assert_eq!(stats.wins[0] + stats.wins[1] + stats.draws, 6);
        assert!(stats.full_boards + stats.resignations <= 6);
        assert!(stats.average_turns >= 1.0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let dictionary = Dictionary::embedded();
        let mut config = SelfPlayConfig::new(4);
        config.strategies = [StrategyType::Longest, StrategyType::Score];

        let first = run_selfplay(&config, &seeded(5), &dictionary).unwrap();
        let second = run_selfplay(&config, &seeded(5), &dictionary).unwrap();
        assert_eq!(first.wins, second.wins);
        assert_eq!(first.draws, second.draws);
        assert!((first.average_turns - second.average_turns).abs() < f64::EPSILON);
        assert_eq!(first.longest_word, second.longest_word);
    }

    #[test]
    fn zero_games_yield_empty_statistics() {
        let dictionary = Dictionary::from_words(["cab"]);
        let stats = run_selfplay(&SelfPlayConfig::new(0), &seeded(1), &dictionary).unwrap();
        assert_eq!(stats.games, 0);
        assert!(stats.average_turns.abs() < f64::EPSILON);
        assert_eq!(stats.longest_word, None);
    }
}
