//! Computer opponent
//!
//! Finds every dictionary word a board can spell and plays them, choosing
//! among legal moves with a pluggable strategy.

mod engine;
pub mod strategy;

pub use engine::{Solver, materialize};
pub use strategy::{BestMargin, LongestWord, Move, Strategy, StrategyType};
