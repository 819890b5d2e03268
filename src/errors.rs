//! Errors reported when parsing, validating or solving a grid.
//!
//! Every operation returns a discriminated result instead of storing a "last
//! error" anywhere, so grids owned by independent callers never interfere.

use std::fmt;

/// Identifies the row, column or block in which a rule violation was found.
///
/// Indices run from 0 to 8; blocks are numbered row-major, left to right, top
/// to bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum House {
    Row(u8),
    Col(u8),
    Block(u8),
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            House::Row(n) => write!(f, "row {}", n),
            House::Col(n) => write!(f, "column {}", n),
            House::Block(n) => write!(f, "block {}", n),
        }
    }
}

/// A present cell value outside the digit range `1..=9`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell ({row}, {col}) contains {value}, only digits 1-9 are allowed")]
pub struct InvalidDigit {
    /// Row index from 0..=8, topmost row is 0
    pub row: u8,
    /// Column index from 0..=8, leftmost column is 0
    pub col: u8,
    /// The offending value
    pub value: i32,
}

/// The same digit appears more than once in a row, column or block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("digit {digit} appears more than once in {house}")]
pub struct RuleViolation {
    /// The duplicated digit
    pub digit: i32,
    /// The house containing the duplicate
    pub house: House,
}

/// Why a grid was rejected as a starting position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// A present value lies outside `1..=9`
    #[error(transparent)]
    InvalidDigit(#[from] InvalidDigit),
    /// A digit is duplicated within a row, column or block
    #[error(transparent)]
    RuleViolation(#[from] RuleViolation),
}

/// Error for [`Grid::solve`](crate::Grid::solve) and
/// [`Grid::solve_with_limit`](crate::Grid::solve_with_limit).
///
/// On every variant the grid is left exactly as it was before the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SolveError {
    /// The grid failed validation before the search started
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The grid is a valid starting position but has no completion
    #[error("grid has no solution")]
    Unsolvable,
    /// No solution was found within the step budget. The grid may or may not
    /// be solvable.
    #[error("no solution found within {0} steps")]
    StepLimit(u64),
}

/// Error for [`Grid::from_str_line`](crate::Grid::from_str_line).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the digits 1-9 and '0', '.' or '_' for empty cells
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
        cell: u8,
        /// The rejected character
        ch: char,
    },
    /// Input ran out before 81 cells were supplied. Contains the number of cells found.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 cells are supplied, or the trailing comment is not
    /// delimited by a space or tab
    #[error("line contains more than 81 cells or is missing a comment delimiter")]
    TooManyCells,
}
