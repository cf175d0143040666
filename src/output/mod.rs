//! Terminal output formatting
//!
//! Colored boards and result printing for the console commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_match_result, print_scores, print_selfplay_result, print_solve_result, print_turn,
};
