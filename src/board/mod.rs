//! Board and properties.
//!
//! The board is a fixed ring of 20 properties. Movement wraps modulo the
//! board size; ownership is the only thing that changes during a game.

pub mod layout;
pub mod property;

pub use layout::{Board, BOARD_SIZE};
pub use property::Property;
