#![warn(missing_docs)]
//! Validation and backtracking completion of 9x9 sudoku grids.
//!
//! ## Overview
//!
//! This library takes a partially filled grid from an external source (a web
//! form, a file, a test fixture), checks that it is an admissible sudoku
//! starting position and, if so, completes it in place by exhaustive
//! backtracking search.
//!
//! Validation is split into two passes mirroring the two ways external input
//! can be bad: [`Grid::check_range`] rejects present values outside `1..=9`,
//! [`Grid::check_rules`] rejects duplicate digits within a row, column or
//! block. [`Grid::solve`] runs both before searching and reports a distinct
//! outcome for grids that pass validation but have no completion, leaving the
//! grid untouched in every failure case.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::Grid;
//!
//! let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
//!
//! let mut grid = Grid::from_str_line(line)?;
//! grid.solve()?;
//!
//! assert!(grid.is_solved());
//! println!("{}", grid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod consts;
mod generate;
mod grid;
mod solve;
mod validate;

pub mod errors;

pub use crate::grid::{Cell, Grid};
