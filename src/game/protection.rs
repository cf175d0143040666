//! Protection recomputation
//!
//! After every play each owned tile is re-evaluated: it is protected when
//! every existing orthogonal neighbor has the same owner. New states are
//! computed for the whole board from the committed state before any tile is
//! written, so evaluation order cannot affect the result.

use crate::core::{Board, Ownership};
use std::fmt;
use std::str::FromStr;

/// How protection behaves once granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtectionRule {
    /// A protected tile stays protected and keeps its owner for the rest of
    /// the game
    #[default]
    Permanent,
    /// A protected tile falls back to taken when a neighbor changes hands,
    /// and can then be captured again
    Reversible,
}

impl ProtectionRule {
    /// Rule names accepted by [`FromStr`]
    pub const NAMES: [&'static str; 2] = ["permanent", "reversible"];
}

impl FromStr for ProtectionRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permanent" => Ok(Self::Permanent),
            "reversible" => Ok(Self::Reversible),
            other => Err(format!(
                "Unknown protection rule '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for ProtectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permanent => write!(f, "permanent"),
            Self::Reversible => write!(f, "reversible"),
        }
    }
}

/// Compute the ownership every tile should have after a protection pass
///
/// Returned in row-major order, one entry per tile.
#[must_use]
pub fn next_ownership(board: &Board, rule: ProtectionRule) -> Vec<Ownership> {
    board
        .tiles()
        .iter()
        .map(|tile| match tile.ownership() {
            Ownership::Untaken => Ownership::Untaken,
            Ownership::Protected(owner) if rule == ProtectionRule::Permanent => {
                Ownership::Protected(owner)
            }
            Ownership::Taken(owner) | Ownership::Protected(owner) => {
                let surrounded = board
                    .neighbors(tile)
                    .all(|neighbor| neighbor.owner() == Some(owner));
                if surrounded {
                    Ownership::Protected(owner)
                } else {
                    Ownership::Taken(owner)
                }
            }
        })
        .collect()
}
