//! Error types.
//!
//! Only genuinely fatal conditions are errors. A salary-cap violation is a
//! fitness value, and repair-pool exhaustion surfaces through the validator.

use crate::catalog::Position;
use thiserror::Error;

/// Errors raised by league construction and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeagueError {
    /// A position bucket ran dry while building a team.
    ///
    /// Fatal for one construction attempt; the caller may retry or abort.
    #[error(
        "not enough {position} players to build team {team}: need {required}, {available} left"
    )]
    InsufficientPlayers {
        /// Index of the team being built.
        team: usize,
        /// Position whose bucket was short.
        position: Position,
        /// Players of this position the team needs.
        required: usize,
        /// Players of this position still unassigned.
        available: usize,
    },

    /// Unsupported or contradictory configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LeagueError>;
