//! The 9x9 cell matrix and its row, column and block views.

use crate::consts::{BLOCK_SIDE, GRID_SIDE, N_CELLS};
use crate::errors::LineParseError;
use std::fmt;

/// One position's content: `None` for an empty cell, `Some(value)` for a
/// present value.
///
/// A *valid* cell holds a digit in `1..=9`, but the type deliberately admits
/// arbitrary integers so that unchecked external input (a form field with 22
/// or -5 in it) can be held and then classified by
/// [`Grid::check_range`].
pub type Cell = Option<i32>;

/// A 9x9 sudoku grid.
///
/// Cells are stored row-major. The grid owns its cells exclusively; cloning
/// yields an independent snapshot, which the solver uses to restore the
/// original position when a search fails.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid(pub(crate) [Cell; N_CELLS]);

impl Grid {
    /// Creates an all-empty grid.
    pub const fn new() -> Grid {
        Grid([None; N_CELLS])
    }

    /// Creates a grid from 9 rows of 9 optional values, top to bottom.
    ///
    /// This is the boundary format for external callers that bind input
    /// cell-by-cell. No value checking happens here.
    pub fn from_rows(rows: [[Cell; 9]; 9]) -> Grid {
        let mut grid = Grid::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                grid.set(row, col, cell);
            }
        }
        grid
    }

    /// Returns the grid as 9 rows of 9 optional values, top to bottom.
    pub fn to_rows(&self) -> [[Cell; 9]; 9] {
        std::array::from_fn(|row| self.row(row))
    }

    /// Creates a grid from a line of 81 cell characters: `1`-`9` for digits,
    /// `.`, `_` or `0` for empty cells. Everything after the 81st cell is
    /// ignored if delimited by a space or tab.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = Grid::new();
        let mut n_cells: u8 = 0;
        for ch in s.chars() {
            if n_cells as usize == N_CELLS {
                match ch {
                    ' ' | '\t' => break,
                    _ => return Err(LineParseError::TooManyCells),
                }
            }
            let cell = match ch {
                '1'..='9' => Some(ch as i32 - '0' as i32),
                '.' | '_' | '0' => None,
                _ => return Err(LineParseError::InvalidEntry { cell: n_cells, ch }),
            };
            grid.0[n_cells as usize] = cell;
            n_cells += 1;
        }
        if (n_cells as usize) < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(grid)
    }

    /// Returns the grid as a line of 81 cell characters, `.` for empty cells.
    ///
    /// Out-of-range values render as `?`; they cannot occur in parsed grids,
    /// only in programmatically built ones.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&cell| match cell {
                None => '.',
                Some(digit @ 1..=9) => (b'0' + digit as u8) as char,
                Some(_) => '?',
            })
            .collect()
    }

    /// Returns the content of the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not in `0..=8`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < GRID_SIDE && col < GRID_SIDE);
        self.0[row * GRID_SIDE + col]
    }

    /// Overwrites the cell at `(row, col)`.
    ///
    /// No value checking happens here; range and rule checking is the job of
    /// [`Grid::check_range`] and [`Grid::check_rules`].
    ///
    /// # Panics
    /// Panics if `row` or `col` is not in `0..=8`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        assert!(row < GRID_SIDE && col < GRID_SIDE);
        self.0[row * GRID_SIDE + col] = value;
    }

    /// Returns a snapshot of row `row`, left to right.
    ///
    /// # Panics
    /// Panics if `row` is not in `0..=8`.
    pub fn row(&self, row: usize) -> [Cell; 9] {
        std::array::from_fn(|col| self.get(row, col))
    }

    /// Returns a snapshot of column `col`, top to bottom.
    ///
    /// # Panics
    /// Panics if `col` is not in `0..=8`.
    pub fn column(&self, col: usize) -> [Cell; 9] {
        std::array::from_fn(|row| self.get(row, col))
    }

    /// Returns a snapshot of block `block`, row-major within the block.
    ///
    /// Blocks are numbered 0..=8 row-major: the top-left block is 0, the
    /// top-right 2, the bottom-right 8.
    ///
    /// # Panics
    /// Panics if `block` is not in `0..=8`.
    pub fn block(&self, block: usize) -> [Cell; 9] {
        let (row0, col0) = block_origin(block);
        std::array::from_fn(|i| self.get(row0 + i / BLOCK_SIDE, col0 + i % BLOCK_SIDE))
    }

    /// Resets all 81 cells to empty.
    pub fn clear(&mut self) {
        self.0 = [None; N_CELLS];
    }

    /// Returns an iterator over all cells, going from left to right, top to
    /// bottom.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }

    /// Returns true if no cell is empty.
    pub fn is_filled(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns true if the grid is completely filled and breaks no rule, i.e.
    /// every row, column and block is a permutation of the digits 1-9.
    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.check_range().is_ok() && self.check_rules().is_ok()
    }

    /// Returns the number of present values.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|cell| cell.is_some()).count() as u8
    }

    // First empty cell at or after `start` in row-major order.
    pub(crate) fn next_empty(&self, start: usize) -> Option<usize> {
        (start..N_CELLS).find(|&i| self.0[i].is_none())
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

/// Top-left cell `(row, col)` of block `block`.
pub(crate) fn block_origin(block: usize) -> (usize, usize) {
    assert!(block < GRID_SIDE);
    (
        BLOCK_SIDE * (block / BLOCK_SIDE),
        BLOCK_SIDE * (block % BLOCK_SIDE),
    )
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.0.iter().enumerate() {
            let (row, col) = (i / GRID_SIDE, i % GRID_SIDE);
            match (row, col) {
                (0, 0) => {}
                (_, 3) | (_, 6) => write!(f, " ")?, // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) => writeln!(f)?,
                _ => {}
            }
            match cell {
                None => f.write_str("_")?,
                Some(digit @ 1..=9) => write!(f, "{}", digit)?,
                Some(_) => f.write_str("?")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Cell, Grid, N_CELLS};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let cells = Vec::<Cell>::deserialize(deserializer)?;
            if cells.len() != N_CELLS {
                return Err(D::Error::invalid_length(
                    cells.len(),
                    &"a sequence of 81 cells",
                ));
            }
            let mut grid = Grid::new();
            grid.0.copy_from_slice(&cells);
            Ok(grid)
        }
    }
}
