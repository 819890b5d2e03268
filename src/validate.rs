//! Admissibility checks for a starting position.
//!
//! Range checking and rule checking are independent passes. The documented
//! caller contract ([`Grid::validate`]) runs the range check first and only
//! proceeds to the rule check if it passes, because an out-of-range value
//! would make duplicate classification meaningless to the caller.

use crate::consts::GRID_SIDE;
use crate::errors::{House, InvalidDigit, RuleViolation, ValidationError};
use crate::grid::{Cell, Grid};

impl Grid {
    /// Checks that every present value is a digit in `1..=9`.
    ///
    /// Cells are scanned in row-major order and the first violation wins.
    /// Empty cells always pass.
    pub fn check_range(&self) -> Result<(), InvalidDigit> {
        for (i, cell) in self.iter().enumerate() {
            if let Some(value) = cell {
                if !(1..=9).contains(&value) {
                    return Err(InvalidDigit {
                        row: (i / GRID_SIDE) as u8,
                        col: (i % GRID_SIDE) as u8,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks that no row, column or block contains the same value twice.
    ///
    /// For each `i` in `0..=8` the check visits row `i`, column `i` and block
    /// `i`, in that order, and stops at the first house containing a
    /// duplicate. Empty cells never count as duplicates. Values are compared
    /// by plain equality, so this check does not require a prior
    /// [`Grid::check_range`] pass to be meaningful.
    pub fn check_rules(&self) -> Result<(), RuleViolation> {
        for i in 0..GRID_SIDE {
            check_house(self.row(i), House::Row(i as u8))?;
            check_house(self.column(i), House::Col(i as u8))?;
            check_house(self.block(i), House::Block(i as u8))?;
        }
        Ok(())
    }

    /// Checks that the grid is an admissible starting position: every present
    /// value in range, no duplicates in any row, column or block.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check_range()?;
        self.check_rules()?;
        Ok(())
    }
}

fn check_house(cells: [Cell; 9], house: House) -> Result<(), RuleViolation> {
    for (i, &cell) in cells.iter().enumerate() {
        let Some(digit) = cell else { continue };
        if cells[..i].contains(&cell) {
            return Err(RuleViolation { digit, house });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn range_scan_is_row_major() {
        let mut grid = Grid::new();
        grid.set(4, 4, Some(-5));
        grid.set(2, 7, Some(22));
        let err = grid.check_range().unwrap_err();
        assert_eq!(
            err,
            InvalidDigit {
                row: 2,
                col: 7,
                value: 22
            }
        );
    }

    #[test]
    fn rules_ignore_empties() {
        // plenty of empty cells sharing houses, no duplicates among digits
        let mut grid = Grid::new();
        grid.set(0, 0, Some(1));
        grid.set(0, 8, Some(2));
        grid.set(8, 0, Some(3));
        assert_eq!(grid.check_rules(), Ok(()));
    }

    #[test]
    fn duplicate_in_shared_column_and_block_reported_against_block() {
        // (0, 2) and (1, 2) share column 2 and block 0; the scan visits
        // block 0 (at i = 0) before column 2 (at i = 2)
        let mut grid = Grid::new();
        grid.set(0, 2, Some(4));
        grid.set(1, 2, Some(4));
        let err = grid.check_rules().unwrap_err();
        assert_eq!(
            err,
            RuleViolation {
                digit: 4,
                house: House::Block(0)
            }
        );
    }

    #[test]
    fn out_of_range_duplicates_still_count() {
        // check_rules is callable without a prior range check
        let mut grid = Grid::new();
        grid.set(3, 1, Some(22));
        grid.set(3, 6, Some(22));
        let err = grid.check_rules().unwrap_err();
        assert_eq!(
            err,
            RuleViolation {
                digit: 22,
                house: House::Row(3)
            }
        );
    }

    #[test]
    fn validate_reports_range_before_rules() {
        let mut grid = Grid::new();
        grid.set(0, 0, Some(12));
        grid.set(5, 3, Some(7));
        grid.set(5, 8, Some(7));
        match grid.validate() {
            Err(ValidationError::InvalidDigit(err)) => assert_eq!(err.value, 12),
            other => panic!("expected InvalidDigit, got {:?}", other),
        }
    }
}
