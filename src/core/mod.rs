//! Core engine types: seats, RNG, configuration, errors.
//!
//! Nothing here knows about properties or strategies.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, INITIAL_BALANCE, LAP_BONUS, MAX_INITIAL_BALANCE, MAX_TURNS};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
