use serde::Serialize;

use super::{moves, win, Cell, Coordinate, Grid, Player};
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Authoritative game snapshot.
///
/// `turn` counts accepted drops, except that the winning drop does not
/// advance it: once `game_over` is set, `turn` is the turn the winner played
/// on. A full grid without a winner is still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    grid: Grid,
    turn: u32,
    game_over: bool,
}

impl GameState {
    /// Create initial game state
    pub fn initial(config: &GameConfig) -> Self {
        GameState {
            grid: Grid::empty(config),
            turn: 0,
            game_over: false,
        }
    }

    pub(crate) fn from_parts(grid: Grid, turn: u32, game_over: bool) -> Self {
        GameState {
            grid,
            turn,
            game_over,
        }
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// Player whose turn it is, or who won once the game is over.
    pub fn current_player(&self) -> Player {
        Player::from_turn(self.turn)
    }

    pub fn winner(&self) -> Option<Player> {
        self.game_over.then(|| self.current_player())
    }

    /// Get list of legal columns (not full). Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.game_over {
            return Vec::new();
        }
        moves::legal_columns(&self.grid)
    }

    /// Where the winning disc landed. The winning drop is the only disc placed
    /// on the frozen turn.
    pub fn winning_disc(&self) -> Option<Coordinate> {
        if !self.game_over {
            return None;
        }
        (0..self.grid.columns()).find_map(|column| {
            let cells = self.grid.column(column)?;
            cells
                .iter()
                .position(|&cell| cell == Cell::Occupied { placed_on_turn: self.turn })
                .map(|row| Coordinate::new(column, row))
        })
    }

    /// The connected discs that ended the game.
    pub fn winning_line(&self, win_length: usize) -> Option<Vec<Coordinate>> {
        let placed = self.winning_disc()?;
        win::winning_line(&self.grid, placed, self.turn, win_length)
    }
}
