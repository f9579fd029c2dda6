//! Error types for the simulation engine.
//!
//! Failed purchases, bankruptcies and timeouts are game outcomes, not errors.
//! Only configuration mistakes and broken engine invariants end up here.

use thiserror::Error;

/// Errors that can occur while setting up or running a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every player was eliminated, leaving nobody to declare the winner.
    #[error("no active players remain at turn {turn}")]
    NoActivePlayers { turn: u32 },

    /// A board lookup fell outside the board.
    #[error("position {position} is outside a board of {size} properties")]
    PositionOutOfRange { position: usize, size: usize },

    /// Rejected configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl GameError {
    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
