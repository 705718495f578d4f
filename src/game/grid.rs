use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::Player;
use crate::config::GameConfig;
use crate::error::GameError;

/// A single grid slot. Occupied cells remember the turn they were filled on;
/// the owning player is derived from that turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Occupied { placed_on_turn: u32 },
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the disc in this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { placed_on_turn } => Some(Player::from_turn(placed_on_turn)),
        }
    }
}

/// A `(column, row)` position. Row 0 is the bottom of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

impl Coordinate {
    pub fn new(column: usize, row: usize) -> Self {
        Coordinate { column, row }
    }
}

/// Immutable `columns x rows` cell matrix.
///
/// Cells live in a shared, read-only buffer laid out column by column. Cloning
/// a grid is cheap and every change goes through [`Grid::with_disc`], which
/// builds a fresh buffer, so older snapshots never observe later moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Arc<[Cell]>,
}

impl Grid {
    /// Create an all-empty grid with the configured dimensions
    pub fn empty(config: &GameConfig) -> Self {
        Grid {
            columns: config.columns,
            rows: config.rows,
            cells: vec![Cell::Empty; config.cell_count()].into(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the cell at `(column, row)`, failing outside the grid.
    pub fn cell_at(&self, column: usize, row: usize) -> Result<Cell, GameError> {
        self.index(column, row)
            .map(|idx| self.cells[idx])
            .ok_or(GameError::OutOfBounds {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            })
    }

    /// Non-failing lookup used by the line scans.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord.column, coord.row).map(|idx| self.cells[idx])
    }

    /// Step from `coord` by `(dc, dr)`, returning `None` when that leaves the
    /// grid.
    pub fn offset(&self, coord: Coordinate, dc: isize, dr: isize) -> Option<Coordinate> {
        let column = coord.column.checked_add_signed(dc)?;
        let row = coord.row.checked_add_signed(dr)?;
        (column < self.columns && row < self.rows).then_some(Coordinate { column, row })
    }

    /// Cells of one column from the bottom row up.
    pub fn column(&self, column: usize) -> Option<&[Cell]> {
        (column < self.columns).then(|| {
            let start = column * self.rows;
            &self.cells[start..start + self.rows]
        })
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.column(column) {
            Some(cells) => cells.iter().all(|cell| !cell.is_empty()),
            None => true,
        }
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of discs on the grid.
    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Return a copy of this grid with `coord` holding a disc placed on
    /// `turn`. `self` is left untouched.
    ///
    /// Callers are responsible for keeping columns gravity-packed, which is why
    /// this stays inside the crate; the move engine is the public way in.
    pub(crate) fn with_disc(&self, coord: Coordinate, turn: u32) -> Result<Grid, GameError> {
        let idx = self
            .index(coord.column, coord.row)
            .ok_or(GameError::OutOfBounds {
                column: coord.column,
                row: coord.row,
                columns: self.columns,
                rows: self.rows,
            })?;

        let mut cells = self.cells.to_vec();
        cells[idx] = Cell::Occupied {
            placed_on_turn: turn,
        };

        Ok(Grid {
            columns: self.columns,
            rows: self.rows,
            cells: cells.into(),
        })
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| column * self.rows + row)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns: Vec<&[Cell]> = self.cells.chunks(self.rows.max(1)).collect();
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cells", &columns)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::empty(&GameConfig::default())
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = grid();
        assert_eq!(grid.columns(), 7);
        assert_eq!(grid.rows(), 6);
        for column in 0..7 {
            for row in 0..6 {
                assert_eq!(grid.cell_at(column, row).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(grid.disc_count(), 0);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let grid = grid();
        assert_eq!(
            grid.cell_at(7, 0),
            Err(GameError::OutOfBounds {
                column: 7,
                row: 0,
                columns: 7,
                rows: 6
            })
        );
        assert!(grid.cell_at(0, 6).is_err());
    }

    #[test]
    fn test_with_disc_leaves_original_untouched() {
        let before = grid();
        let after = before.with_disc(Coordinate::new(3, 0), 0).unwrap();

        assert_eq!(before.cell_at(3, 0).unwrap(), Cell::Empty);
        assert_eq!(
            after.cell_at(3, 0).unwrap(),
            Cell::Occupied { placed_on_turn: 0 }
        );
        assert_ne!(before, after);
        assert_eq!(after.disc_count(), 1);
    }

    #[test]
    fn test_with_disc_out_of_bounds() {
        let grid = grid();
        assert!(grid.with_disc(Coordinate::new(0, 6), 0).is_err());
        assert!(grid.with_disc(Coordinate::new(9, 0), 0).is_err());
    }

    #[test]
    fn test_cell_player_is_derived_from_turn() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(
            Cell::Occupied { placed_on_turn: 4 }.player(),
            Some(Player::One)
        );
        assert_eq!(
            Cell::Occupied { placed_on_turn: 7 }.player(),
            Some(Player::Two)
        );
    }

    #[test]
    fn test_offset_stops_at_edges() {
        let grid = grid();
        let corner = Coordinate::new(0, 0);
        assert_eq!(grid.offset(corner, -1, 0), None);
        assert_eq!(grid.offset(corner, 0, -1), None);
        assert_eq!(grid.offset(corner, 1, 1), Some(Coordinate::new(1, 1)));
        assert_eq!(grid.offset(Coordinate::new(6, 5), 1, 0), None);
        assert_eq!(grid.offset(Coordinate::new(6, 5), 0, 1), None);
    }

    #[test]
    fn test_column_full() {
        let mut grid = grid();
        for row in 0..6 {
            grid = grid.with_disc(Coordinate::new(2, row), row as u32).unwrap();
        }
        assert!(grid.is_column_full(2));
        assert!(!grid.is_column_full(3));
        // Out-of-range columns never accept discs
        assert!(grid.is_column_full(7));
    }

    #[test]
    fn test_column_slice_is_bottom_up() {
        let grid = grid()
            .with_disc(Coordinate::new(1, 0), 0)
            .unwrap()
            .with_disc(Coordinate::new(1, 1), 1)
            .unwrap();
        let column = grid.column(1).unwrap();
        assert_eq!(column.len(), 6);
        assert_eq!(column[0], Cell::Occupied { placed_on_turn: 0 });
        assert_eq!(column[1], Cell::Occupied { placed_on_turn: 1 });
        assert!(column[2].is_empty());
        assert!(grid.column(7).is_none());
    }

    #[test]
    fn test_serializes_column_major() {
        let config = GameConfig::new(2, 2, 2);
        let grid = Grid::empty(&config)
            .with_disc(Coordinate::new(1, 0), 3)
            .unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "columns": 2,
                "rows": 2,
                "cells": [
                    [{"state": "empty"}, {"state": "empty"}],
                    [{"state": "occupied", "placed_on_turn": 3}, {"state": "empty"}]
                ]
            })
        );
    }
}
