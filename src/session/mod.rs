//! Running a match between two seats
//!
//! Shared by the console and TUI front ends: both parse text commands and
//! hand them to a [`Session`].

pub mod command;
mod driver;

pub use command::{Command, CommandError, HELP_LINES};
pub use driver::{EndReason, MatchResult, Response, Seat, Session, SessionError, TurnRecord};
