//! # Connect Four
//!
//! Rules engine for two-player Connect Four on a configurable grid, with a
//! terminal UI and a headless JSON host built on top of it.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, disc placement, win detection, state machine
//! - [`session`]: Headless host: newline-delimited JSON commands and snapshots
//! - [`ui`]: Terminal UI: board view, status banner, key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
