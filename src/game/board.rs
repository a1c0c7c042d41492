//! The 3×3 board and line scanning.

use serde::Serialize;

use crate::config::game::BOARD_SIZE;
use crate::game::types::{Cell, Mark};

/// Row-major grid of cells. Serializes as an array of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Board([[Cell; BOARD_SIZE]; BOARD_SIZE]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Place `mark` at `(row, col)`. Callers check bounds and emptiness first.
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.0[row][col] = Cell::Marked(mark);
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// First complete line found, scanning rows, then columns, then the two
    /// diagonals.
    pub fn winner(&self) -> Option<Mark> {
        let g = &self.0;
        let rows = (0..BOARD_SIZE).map(|i| [g[i][0], g[i][1], g[i][2]]);
        let cols = (0..BOARD_SIZE).map(|i| [g[0][i], g[1][i], g[2][i]]);
        let diagonals = [[g[0][0], g[1][1], g[2][2]], [g[0][2], g[1][1], g[2][0]]];

        rows.chain(cols)
            .chain(diagonals)
            .find_map(|line| match line[0] {
                Cell::Marked(mark) if line.iter().all(|c| *c == line[0]) => Some(mark),
                _ => None,
            })
    }
}
