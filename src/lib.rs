//! # property-sim
//!
//! A turn-based property-trading board game played by four automated
//! players, each with its own purchasing strategy.
//!
//! ## Rules
//!
//! - 20 properties on a ring, each with a sale cost and a rent
//! - Players roll one die, move, and collect 100 when passing the start
//! - Landing on someone else's property costs rent; a negative balance
//!   means bankruptcy and all holdings go back to the bank
//! - Landing on an unowned property may lead to a purchase, depending on
//!   the player's behavior
//! - The last active player wins; after 1000 turns the richest active
//!   player (cash plus property value) wins instead
//!
//! ## Design
//!
//! - **Owned graph**: the runner owns the board and players; properties
//!   name their owner by seat, never by reference.
//! - **Seeded randomness**: dice and coin flips come from a seedable
//!   ChaCha8 stream. A seed fully determines a game.
//! - **Injected observer**: the engine reports events instead of logging.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors
//! - `board`: properties and the fixed board
//! - `behavior`: the four purchasing strategies
//! - `game`: players, table, runner, results
//! - `stats`: aggregate statistics over many games
//!
//! ```
//! use property_sim::{GameConfig, Runner};
//!
//! let mut runner = Runner::new(GameConfig::new().with_seed(7)).unwrap();
//! let result = runner.run().unwrap();
//! assert!(result.total_turns <= 1000);
//! ```

pub mod core;
pub mod board;
pub mod behavior;
pub mod game;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};

pub use crate::board::{Board, Property, BOARD_SIZE};

pub use crate::behavior::{Behavior, PurchaseStrategy};

pub use crate::game::{
    run_default_simulation, run_simulation,
    EventLog, GameEvent, GameObserver, LogObserver, NullObserver,
    GameResult, PlayerSnapshot, Standing,
    Move, Player, Runner, Table,
};

pub use crate::stats::SimulationSummary;
