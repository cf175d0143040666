//! Wordsmush - CLI
//!
//! Word-claiming board game with TUI and console modes, a board solver and
//! computer self-play.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordsmush::{
    commands::{
        COMPUTER_NAME, SelfPlayConfig, SolveConfig, new_session, run_selfplay, run_simple,
        solve_letters,
    },
    config::GameConfig,
    dictionary::{Dictionary, loader::load_from_file},
    game::ProtectionRule,
    output::{print_selfplay_result, print_solve_result},
    solver::StrategyType,
};

/// File the TUI logs to while it owns the terminal
const TUI_LOG_FILE: &str = "wordsmush.log";

/// Name of the first seat when none is given
const DEFAULT_PLAYER: &str = "Player 1";

#[derive(Parser)]
#[command(
    name = "wordsmush",
    about = "Two-player word-claiming board game with a computer opponent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Board width
    #[arg(long, global = true, default_value = "5")]
    width: usize,

    /// Board height
    #[arg(long, global = true, default_value = "5")]
    height: usize,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Protection rule: permanent (default) or reversible
    #[arg(short, long, global = true, default_value = "permanent")]
    protection: ProtectionRule,

    /// Computer strategy: longest (default) or score
    #[arg(short, long, global = true, default_value = "longest")]
    strategy: StrategyType,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI match (default)
    Play {
        /// First player's name ('ai' for the computer)
        #[arg(long = "player1", default_value = "Player 1")]
        player1: String,

        /// Second player's name ('ai' for the computer)
        #[arg(long = "player2", default_value = "ai")]
        player2: String,
    },

    /// Console match without the TUI
    Simple {
        /// First player's name ('ai' for the computer)
        #[arg(long = "player1", default_value = "Player 1")]
        player1: String,

        /// Second player's name ('ai' for the computer)
        #[arg(long = "player2", default_value = "ai")]
        player2: String,
    },

    /// List every word that can be spelled from a board
    Solve {
        /// Board letters, row-major; separate rows with spaces
        letters: String,
    },

    /// Let two computer players play each other
    Selfplay {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "20")]
        games: usize,

        /// Strategy of the second computer (default: same as --strategy)
        #[arg(long)]
        opponent: Option<StrategyType>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            protection: self.protection,
            dictionary: self.dictionary.clone(),
        }
    }
}

/// Log to stderr, or to a file while the TUI owns the terminal
fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // Don't fail if a subscriber is already installed
    if to_file {
        let log_file = std::fs::File::create(TUI_LOG_FILE)?;
        let _ = builder
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = builder.with_writer(std::io::stderr).try_init();
    }
    Ok(())
}

/// Load the configured word list, or the bundled one
fn load_dictionary(config: &GameConfig) -> Result<Dictionary> {
    let dictionary = match &config.dictionary {
        Some(path) => load_from_file(path)?,
        None => Dictionary::embedded(),
    };
    info!(words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();
    let strategy = cli.strategy;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or_else(|| Commands::Play {
        player1: DEFAULT_PLAYER.to_string(),
        player2: COMPUTER_NAME.to_string(),
    });
    init_logging(matches!(command, Commands::Play { .. }))?;

    config.validate()?;
    let dictionary = load_dictionary(&config)?;

    match command {
        Commands::Play { player1, player2 } => {
            run_play_command(&dictionary, &config, [&player1, &player2], strategy)
        }
        Commands::Simple { player1, player2 } => {
            run_simple_command(&dictionary, &config, [&player1, &player2], strategy)
        }
        Commands::Solve { letters } => run_solve_command(letters, &config, &dictionary),
        Commands::Selfplay {
            games,
            opponent,
            quiet,
        } => {
            let opponent = opponent.unwrap_or(strategy);
            let selfplay = SelfPlayConfig {
                games,
                strategies: [strategy, opponent],
                show_progress: !quiet,
            };
            let stats = run_selfplay(&selfplay, &config, &dictionary)?;
            print_selfplay_result(&stats);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    config: &GameConfig,
    names: [&str; 2],
    strategy: StrategyType,
) -> Result<()> {
    use wordsmush::interactive::{App, run_tui};

    let session = new_session(dictionary, config, names, strategy)?;
    run_tui(App::new(session))
}

fn run_simple_command(
    dictionary: &Dictionary,
    config: &GameConfig,
    names: [&str; 2],
    strategy: StrategyType,
) -> Result<()> {
    let mut session = new_session(dictionary, config, names, strategy)?;
    run_simple(&mut session)?;
    Ok(())
}

fn run_solve_command(letters: String, config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    let solve = SolveConfig {
        letters,
        width: config.width,
        height: config.height,
    };
    let result = solve_letters(&solve, dictionary)?;
    print_solve_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["wordsmush", "--strategy", "longst"]).is_err());
        assert!(Cli::try_parse_from(["wordsmush", "selfplay", "--opponent", "best"]).is_err());
    }

    #[test]
    fn strategies_parse_by_name() {
        let cli = Cli::try_parse_from(["wordsmush", "-s", "score", "selfplay", "--opponent", "longest"])
            .unwrap();
        assert_eq!(cli.strategy, StrategyType::Score);
        assert!(matches!(
            cli.command,
            Some(Commands::Selfplay {
                opponent: Some(StrategyType::Longest),
                ..
            })
        ));
    }
}
