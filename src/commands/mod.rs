//! Command implementations

pub mod selfplay;
pub mod setup;
pub mod simple;
pub mod solve;

pub use selfplay::{SelfPlayConfig, SelfPlayStatistics, run_selfplay};
pub use setup::{COMPUTER_NAME, new_session, seat_for};
pub use simple::{play_lines, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_letters};
