// Dimensions of the standard sudoku grid.
pub(crate) const GRID_SIDE: usize = 9;
pub(crate) const BLOCK_SIDE: usize = 3;
pub(crate) const N_CELLS: usize = GRID_SIDE * GRID_SIDE;
