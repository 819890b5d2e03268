//! Backtracking completion of a validated grid.
//!
//! Cells are visited in fixed row-major order and digits tried in ascending
//! order, so the search is deterministic: a uniquely solvable grid yields the
//! same solution every run, and a grid with multiple solutions yields the
//! lexicographically first one under this order.

use crate::consts::{BLOCK_SIDE, GRID_SIDE};
use crate::errors::SolveError;
use crate::grid::Grid;

enum Search {
    Solved,
    Exhausted,
    OutOfSteps,
}

impl Grid {
    /// Fills every empty cell with a digit such that each row, column and
    /// block ends up a permutation of 1-9. Originally filled cells are never
    /// touched.
    ///
    /// The grid is validated first; an inadmissible grid is rejected without
    /// searching. If the search exhausts every branch the grid is restored to
    /// its original state and [`SolveError::Unsolvable`] is returned.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        // the full 81-cell search space fits in far fewer steps than this
        self.solve_with_limit(u64::MAX)
    }

    /// Like [`Grid::solve`], but gives up once `max_steps` digit placements
    /// have been tried, returning [`SolveError::StepLimit`] and restoring the
    /// original grid.
    ///
    /// "No solution found within the budget" is distinct from "provably
    /// unsolvable": a grid rejected with `StepLimit` may well have a solution.
    pub fn solve_with_limit(&mut self, max_steps: u64) -> Result<(), SolveError> {
        self.validate()?;
        let snapshot = self.clone();
        let mut steps = 0;
        match fill_from(self, 0, &mut steps, max_steps) {
            Search::Solved => Ok(()),
            Search::Exhausted => {
                *self = snapshot;
                Err(SolveError::Unsolvable)
            }
            Search::OutOfSteps => {
                *self = snapshot;
                Err(SolveError::StepLimit(max_steps))
            }
        }
    }
}

// Recursively fills empty cells from row-major position `start` onward.
// Everything before `start` is already filled in this branch.
fn fill_from(grid: &mut Grid, start: usize, steps: &mut u64, max_steps: u64) -> Search {
    let Some(cell) = grid.next_empty(start) else {
        // no empty cell left, the grid is complete
        return Search::Solved;
    };
    let (row, col) = (cell / GRID_SIDE, cell % GRID_SIDE);

    for digit in 1..=9 {
        if !is_candidate(grid, row, col, digit) {
            continue;
        }
        if *steps == max_steps {
            return Search::OutOfSteps;
        }
        *steps += 1;

        grid.set(row, col, Some(digit));
        match fill_from(grid, cell + 1, steps, max_steps) {
            // undo the placement and try the next digit
            Search::Exhausted => grid.set(row, col, None),
            done => return done,
        }
    }

    Search::Exhausted
}

// A digit is a candidate at (row, col) iff it appears nowhere else in that
// row, column or block in the current search state.
pub(crate) fn is_candidate(grid: &Grid, row: usize, col: usize, digit: i32) -> bool {
    for i in 0..GRID_SIDE {
        if grid.get(row, i) == Some(digit) || grid.get(i, col) == Some(digit) {
            return false;
        }
    }
    let (row0, col0) = (
        BLOCK_SIDE * (row / BLOCK_SIDE),
        BLOCK_SIDE * (col / BLOCK_SIDE),
    );
    for r in row0..row0 + BLOCK_SIDE {
        for c in col0..col0 + BLOCK_SIDE {
            if grid.get(r, c) == Some(digit) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn candidate_respects_row_column_and_block() {
        let mut grid = Grid::new();
        grid.set(0, 4, Some(3)); // row 0
        grid.set(5, 0, Some(4)); // column 0
        grid.set(1, 1, Some(5)); // block 0

        assert!(!is_candidate(&grid, 0, 0, 3));
        assert!(!is_candidate(&grid, 0, 0, 4));
        assert!(!is_candidate(&grid, 0, 0, 5));
        assert!(is_candidate(&grid, 0, 0, 6));

        // (8, 8) shares no house with any of the placements
        for digit in 1..=9 {
            assert!(is_candidate(&grid, 8, 8, digit));
        }
    }

    #[test]
    fn already_complete_grid_solves_trivially() {
        let mut grid = Grid::from_str_line(
            "123456789456789123789123456234567891567891234891234567345678912678912345912345678",
        )
        .unwrap();
        let before = grid.clone();
        assert_eq!(grid.solve(), Ok(()));
        assert_eq!(grid, before);
    }
}
