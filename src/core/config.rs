//! Game configuration.
//!
//! Rules that never change (board layout, lap bonus, strategy thresholds) are
//! constants. What a caller may tune per game lives in `GameConfig`.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Hard cap on turns per game.
pub const MAX_TURNS: u32 = 1000;

/// Starting balance for every player.
pub const INITIAL_BALANCE: i64 = 300;

/// Largest accepted starting balance.
///
/// Four seats' worth of cash plus every lap bonus a capped game can pay
/// must still fit in an `i64`.
pub const MAX_INITIAL_BALANCE: i64 = i64::MAX / 8;

/// Bonus credited when a player passes the start of the board.
pub const LAP_BONUS: i64 = 100;

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Balance every player starts with (default: 300).
    pub initial_balance: i64,

    /// Turn cap before the game is decided by total assets (default: 1000).
    pub max_turns: u32,

    /// RNG seed. `None` draws a fresh seed per game.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            max_turns: MAX_TURNS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting balance.
    pub fn with_initial_balance(mut self, balance: i64) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Fix the RNG seed so the game can be replayed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.initial_balance < 0 {
            return Err(GameError::invalid_config(format!(
                "initial balance must be non-negative, got {}",
                self.initial_balance
            )));
        }
        if self.initial_balance > MAX_INITIAL_BALANCE {
            return Err(GameError::invalid_config(format!(
                "initial balance must be at most {MAX_INITIAL_BALANCE}, got {}",
                self.initial_balance
            )));
        }
        if self.max_turns == 0 {
            return Err(GameError::invalid_config("max turns must be at least 1"));
        }
        Ok(())
    }
}
