//! Win detection rooted at the most recently placed disc.
//!
//! A new run can only appear through the disc that was just dropped, so the
//! scan walks outward from that disc along each of the four line axes instead
//! of re-checking the whole grid.

use super::{Cell, Coordinate, Grid};

/// A line direction through a cell, as a pair of opposite unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// The two `(column, row)` steps along this axis. Rows grow upwards.
    pub fn steps(self) -> [(isize, isize); 2] {
        match self {
            Axis::Vertical => [(0, -1), (0, 1)],
            Axis::Horizontal => [(1, 0), (-1, 0)],
            Axis::DiagonalUp => [(1, 1), (-1, -1)],
            Axis::DiagonalDown => [(-1, 1), (1, -1)],
        }
    }
}

/// Whether the disc placed at `placed` on `placed_turn` completes a run of
/// `win_length`.
///
/// Each axis keeps one counter, seeded with the placed disc and shared by both
/// of its directions, so the final value is the full run length through
/// `placed`. The scan stops as soon as any counter reaches `win_length`.
pub fn is_winning_move(
    grid: &Grid,
    placed: Coordinate,
    placed_turn: u32,
    win_length: usize,
) -> bool {
    Axis::ALL.iter().any(|&axis| {
        let mut count = 1;
        for (dc, dr) in axis.steps() {
            let mut current = placed;
            // At most win_length - 1 neighbours can matter in one direction
            for _ in 1..win_length {
                match grid.offset(current, dc, dr) {
                    Some(next) if same_owner(grid, next, placed_turn) => {
                        count += 1;
                        if count >= win_length {
                            return true;
                        }
                        current = next;
                    }
                    _ => break,
                }
            }
        }
        false
    })
}

/// The full contiguous run through `placed` on the first axis whose run is at
/// least `win_length` long, ordered from one end to the other.
///
/// Unlike [`is_winning_move`] this walks each direction to the end of the run
/// so that every connected disc is reported.
pub fn winning_line(
    grid: &Grid,
    placed: Coordinate,
    placed_turn: u32,
    win_length: usize,
) -> Option<Vec<Coordinate>> {
    if !same_owner(grid, placed, placed_turn) {
        return None;
    }

    for axis in Axis::ALL {
        let [forward, backward] = axis.steps();
        let ahead = walk(grid, placed, forward, placed_turn);
        let behind = walk(grid, placed, backward, placed_turn);

        if ahead.len() + behind.len() + 1 >= win_length {
            let mut line: Vec<Coordinate> = behind.into_iter().rev().collect();
            line.push(placed);
            line.extend(ahead);
            return Some(line);
        }
    }

    None
}

fn walk(grid: &Grid, from: Coordinate, (dc, dr): (isize, isize), turn: u32) -> Vec<Coordinate> {
    let mut run = Vec::new();
    let mut current = from;
    while let Some(next) = grid.offset(current, dc, dr) {
        if !same_owner(grid, next, turn) {
            break;
        }
        run.push(next);
        current = next;
    }
    run
}

fn same_owner(grid: &Grid, coord: Coordinate, turn: u32) -> bool {
    match grid.get(coord) {
        Some(Cell::Occupied { placed_on_turn }) => placed_on_turn % 2 == turn % 2,
        _ => false,
    }
}
