//! Text commands typed by a human player
//!
//! Coordinates and word positions are 1-based on input and stored
//! zero-based.

use std::fmt;
use std::str::FromStr;

/// One parsed player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add the tile at `(x, y)`, appending or inserting at `position`
    AddTile {
        x: usize,
        y: usize,
        position: Option<usize>,
    },
    /// Remove the letter at this index of the word
    Remove(usize),
    Clear,
    Play,
    Pass,
    Resign,
    Help,
}

/// Error type for unparseable input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    /// Coordinates that are not two positive numbers
    BadCoordinates(String),
    /// A word position that is not a positive number
    BadPosition(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Enter a move or 'help'"),
            Self::Unknown(input) => write!(f, "Unknown command '{input}' (type 'help')"),
            Self::BadCoordinates(input) => {
                write!(f, "'{input}' is not a tile: use column,row such as 3,2")
            }
            Self::BadPosition(input) => {
                write!(f, "'{input}' is not a word position: use a number from 1")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Help text, one line per command
pub const HELP_LINES: [&str; 8] = [
    "x,y      add the tile at column x, row y to the end of the word (e.g. 3,2)",
    "x,y p    insert the tile at position p of the word (e.g. 3,2 2)",
    "rem p    remove the letter at position p (e.g. rem 2)",
    "clear    remove every letter from the word",
    "play     play the current word",
    "pass     skip this turn",
    "resign   give up the match",
    "help     show this help",
];

fn parse_one_based(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

fn parse_position(text: &str) -> Result<usize, CommandError> {
    parse_one_based(text).ok_or_else(|| CommandError::BadPosition(text.to_string()))
}

fn parse_tile(coords: &str, position: Option<&str>) -> Result<Command, CommandError> {
    let bad = || CommandError::BadCoordinates(coords.to_string());
    let (x, y) = coords.split_once(',').ok_or_else(bad)?;
    let x = parse_one_based(x.trim()).ok_or_else(bad)?;
    let y = parse_one_based(y.trim()).ok_or_else(bad)?;
    let position = position.map(parse_position).transpose()?;
    Ok(Command::AddTile { x, y, position })
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a command
    ///
    /// # Examples
    /// ```
    /// use wordsmush::session::Command;
    ///
    /// let command: Command = "3,2 1".parse().unwrap();
    /// assert_eq!(command, Command::AddTile { x: 2, y: 1, position: Some(0) });
    /// assert_eq!("REM 2".parse(), Ok(Command::Remove(1)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Err(CommandError::Unknown(format!("{head} {} {extra}", arg.unwrap_or(""))));
        }

        match (head, arg) {
            ("help", None) => Ok(Self::Help),
            ("play", None) => Ok(Self::Play),
            ("pass", None) => Ok(Self::Pass),
            ("resign", None) => Ok(Self::Resign),
            ("clear", None) => Ok(Self::Clear),
            ("rem", Some(index)) => parse_position(index).map(Self::Remove),
            // "rem2" as well as "rem 2"
            (rem, None) if rem.starts_with("rem") && rem.len() > 3 => {
                parse_position(&rem[3..]).map(Self::Remove)
            }
            (coords, position) if coords.contains(',') => parse_tile(coords, position),
            _ => Err(CommandError::Unknown(input.clone())),
        }
    }
}
