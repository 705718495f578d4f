//! Core Connect Four rules: the immutable grid, disc placement, win detection
//! and the state machine that ties them together.

pub mod controller;
mod grid;
pub mod moves;
mod player;
mod state;
pub mod win;

pub use controller::{Command, GameController};
pub use grid::{Cell, Coordinate, Grid};
pub use player::Player;
pub use state::{GameState, GameStatus};
