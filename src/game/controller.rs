//! The game state machine: `RESET` and `DROP_DISC` applied to a [`GameState`].
//!
//! Transitions are pure: each call takes the prior state and returns the next
//! one, leaving the input untouched. [`GameController`] wraps them for hosts
//! that want a single owner of the authoritative state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::{moves, win, GameState};
use crate::config::GameConfig;
use crate::error::GameError;

/// The two commands a host can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    Reset,
    DropDisc { column: i64 },
}

/// The canonical starting state.
pub fn reset(config: &GameConfig) -> GameState {
    GameState::initial(config)
}

/// Drop a disc for the current turn into `column`.
///
/// Finished games and full columns return `state` unchanged. Only a column
/// index outside the grid is an error.
pub fn drop_disc(
    config: &GameConfig,
    state: &GameState,
    column: i64,
) -> Result<GameState, GameError> {
    if state.is_game_over() {
        trace!(column, "drop ignored, game is over");
        return Ok(state.clone());
    }

    let columns = state.grid().columns();
    let index = usize::try_from(column)
        .ok()
        .filter(|&c| c < columns)
        .ok_or(GameError::InvalidColumn { column, columns })?;

    let turn = state.turn();
    let Some((grid, landed)) = moves::apply_move(state.grid(), index, turn)? else {
        trace!(column, "drop ignored, column is full");
        return Ok(state.clone());
    };

    debug!(column = landed.column, row = landed.row, turn, "disc placed");

    if win::is_winning_move(&grid, landed, turn, config.win_length) {
        let next = GameState::from_parts(grid, turn, true);
        info!(winner = %next.current_player(), turn, "game won");
        return Ok(next);
    }

    if grid.is_full() {
        debug!(turn, "grid is full with no winner");
    }

    Ok(GameState::from_parts(grid, turn + 1, false))
}

/// Apply a [`Command`] to `state`.
pub fn reduce(
    config: &GameConfig,
    state: &GameState,
    command: Command,
) -> Result<GameState, GameError> {
    match command {
        Command::Reset => Ok(reset(config)),
        Command::DropDisc { column } => drop_disc(config, state, column),
    }
}

/// Single owner of the authoritative [`GameState`].
///
/// Consumers only ever get shared references or cloned snapshots, and a
/// rejected command leaves the held state as it was.
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    state: GameState,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        GameController {
            state: reset(&config),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state. Grid storage is shared, so this is
    /// cheap.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn reset(&mut self) -> &GameState {
        info!("game reset");
        self.state = reset(&self.config);
        &self.state
    }

    pub fn drop_disc(&mut self, column: i64) -> Result<&GameState, GameError> {
        self.state = drop_disc(&self.config, &self.state, column)?;
        Ok(&self.state)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<&GameState, GameError> {
        match command {
            Command::Reset => Ok(self.reset()),
            Command::DropDisc { column } => self.drop_disc(column),
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
