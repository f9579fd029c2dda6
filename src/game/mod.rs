//! Players, the table they share, and the loop that runs a game.
//!
//! - `player`: balance, position, holdings, single-player operations
//! - `table`: rent, bankruptcy and the win condition across players
//! - `observer`: events reported by the runner
//! - `runner`: the turn loop
//! - `result`: terminal results and snapshots

pub mod observer;
pub mod player;
pub mod result;
pub mod runner;
pub mod table;

pub use observer::{EventLog, GameEvent, GameObserver, LogObserver, NullObserver};
pub use player::{Move, Player};
pub use result::{GameResult, PlayerSnapshot, Standing};
pub use runner::{run_default_simulation, run_simulation, Runner};
pub use table::Table;
