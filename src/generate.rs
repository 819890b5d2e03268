//! Random generation of fully filled grids.
//!
//! Generation is done via randomized solving of an empty grid: the same
//! backtracking search as [`Grid::solve`](crate::Grid::solve), but with the
//! digit order shuffled at every cell.

use rand::prelude::*;

use crate::consts::GRID_SIDE;
use crate::grid::Grid;
use crate::solve::is_candidate;

impl Grid {
    /// Generates a random, fully filled, valid grid.
    pub fn generate_filled() -> Grid {
        let mut grid = Grid::new();
        let mut rng = thread_rng();
        // an empty grid always has a completion, the search cannot fail
        fill_random(&mut grid, 0, &mut rng);
        grid
    }
}

fn fill_random(grid: &mut Grid, start: usize, rng: &mut impl Rng) -> bool {
    let Some(cell) = grid.next_empty(start) else {
        return true;
    };
    let (row, col) = (cell / GRID_SIDE, cell % GRID_SIDE);

    let mut digits: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);

    for &digit in &digits {
        if !is_candidate(grid, row, col, digit) {
            continue;
        }
        grid.set(row, col, Some(digit));
        if fill_random(grid, cell + 1, rng) {
            return true;
        }
        grid.set(row, col, None);
    }

    false
}
