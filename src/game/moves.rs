//! Disc placement: locating the landing row in a column and producing the
//! next grid snapshot.

use super::{Coordinate, Grid};
use crate::error::GameError;

/// Lowest empty row in `column`, or `None` when the column is full.
///
/// A column index outside the grid is an error, not a full column.
pub fn find_landing_row(grid: &Grid, column: usize) -> Result<Option<usize>, GameError> {
    let cells = grid.column(column).ok_or(GameError::InvalidColumn {
        column: column as i64,
        columns: grid.columns(),
    })?;
    Ok(cells.iter().position(|cell| cell.is_empty()))
}

/// Drop a disc for `turn` into `column`.
///
/// Returns the new grid together with the cell that was filled, or `None` if
/// the column has no room left. The input grid is never modified.
pub fn apply_move(
    grid: &Grid,
    column: usize,
    turn: u32,
) -> Result<Option<(Grid, Coordinate)>, GameError> {
    let Some(row) = find_landing_row(grid, column)? else {
        return Ok(None);
    };

    let landed = Coordinate::new(column, row);
    let next = grid.with_disc(landed, turn)?;
    Ok(Some((next, landed)))
}

/// Columns that still accept a disc, in ascending order.
pub fn legal_columns(grid: &Grid) -> Vec<usize> {
    (0..grid.columns())
        .filter(|&column| !grid.is_column_full(column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Cell;

    fn grid() -> Grid {
        Grid::empty(&GameConfig::default())
    }

    #[test]
    fn test_landing_row_on_empty_column() {
        assert_eq!(find_landing_row(&grid(), 3), Ok(Some(0)));
    }

    #[test]
    fn test_drop_stacks_upwards() {
        let grid = grid();

        let (grid, first) = apply_move(&grid, 3, 0).unwrap().unwrap();
        assert_eq!(first, Coordinate::new(3, 0));

        let (grid, second) = apply_move(&grid, 3, 1).unwrap().unwrap();
        assert_eq!(second, Coordinate::new(3, 1));
        assert_eq!(
            grid.cell_at(3, 1).unwrap(),
            Cell::Occupied { placed_on_turn: 1 }
        );
        assert_eq!(find_landing_row(&grid, 3), Ok(Some(2)));
    }

    #[test]
    fn test_full_column_returns_none() {
        let mut grid = grid();
        for turn in 0..6 {
            grid = apply_move(&grid, 0, turn).unwrap().unwrap().0;
        }

        assert_eq!(find_landing_row(&grid, 0), Ok(None));
        assert_eq!(apply_move(&grid, 0, 6), Ok(None));
    }

    #[test]
    fn test_invalid_column_is_an_error() {
        let grid = grid();
        assert_eq!(
            find_landing_row(&grid, 7),
            Err(GameError::InvalidColumn {
                column: 7,
                columns: 7
            })
        );
        assert!(apply_move(&grid, 7, 0).is_err());
    }

    #[test]
    fn test_apply_move_keeps_previous_snapshot() {
        let before = grid();
        let (after, _) = apply_move(&before, 5, 0).unwrap().unwrap();
        assert_eq!(before.disc_count(), 0);
        assert_eq!(after.disc_count(), 1);
    }

    #[test]
    fn test_legal_columns_skip_full_columns() {
        let config = GameConfig::new(3, 2, 2);
        let mut grid = Grid::empty(&config);
        assert_eq!(legal_columns(&grid), vec![0, 1, 2]);

        grid = apply_move(&grid, 1, 0).unwrap().unwrap().0;
        grid = apply_move(&grid, 1, 1).unwrap().unwrap().0;
        assert_eq!(legal_columns(&grid), vec![0, 2]);
    }
}
