//! Grid Session
//!
//! The grid store behind the interactive surface: a fixed size picked from
//! [`SUPPORTED_SIZES`], bounded cell values, and a fresh [`CheckResult`]
//! after every accepted change.

use crate::core::grid::{Grid, GridError};
use crate::validation::{evaluate, CheckResult};

/// Grid sizes offered by the size selector
pub const SUPPORTED_SIZES: [usize; 3] = [3, 4, 5];

pub const DEFAULT_SIZE: usize = 3;

/// Inclusive range a cell value must fall in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for CellBounds {
    fn default() -> Self {
        Self { min: 1, max: 9 }
    }
}

impl CellBounds {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Rejected session operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("unsupported grid size {size} (choose one of 3, 4, 5)")]
    UnsupportedSize { size: usize },

    #[error("invalid cell bounds: minimum {min} is greater than maximum {max}")]
    InvalidBounds { min: i64, max: i64 },

    #[error("cell ({}, {}) is outside the {size}x{size} grid", .row + 1, .col + 1)]
    CellOutOfBounds { row: usize, col: usize, size: usize },

    #[error("value {value} for cell ({}, {}) is outside {min}..={max}", .row + 1, .col + 1)]
    OutOfRange {
        row: usize,
        col: usize,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub fn check_size(size: usize) -> Result<(), SessionError> {
    if SUPPORTED_SIZES.contains(&size) {
        Ok(())
    } else {
        Err(SessionError::UnsupportedSize { size })
    }
}

/// Interactive grid state
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    bounds: CellBounds,
    result: CheckResult,
}

impl Session {
    /// Start a session with every cell at the lower bound
    pub fn new(size: usize, bounds: CellBounds) -> Result<Self, SessionError> {
        check_size(size)?;
        if bounds.min > bounds.max {
            return Err(SessionError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }

        let grid = Grid::filled(size, bounds.min)?;
        let result = evaluate(&grid);
        log::debug!("Started {}x{} session", size, size);

        Ok(Self {
            grid,
            bounds,
            result,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn bounds(&self) -> CellBounds {
        self.bounds
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Result of the most recent evaluation
    pub fn result(&self) -> &CheckResult {
        &self.result
    }

    /// Set one cell (0-based) and re-evaluate. The grid is unchanged on error.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: i64,
    ) -> Result<&CheckResult, SessionError> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(SessionError::CellOutOfBounds { row, col, size });
        }
        if !self.bounds.contains(value) {
            return Err(SessionError::OutOfRange {
                row,
                col,
                value,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        self.grid.set(row, col, value)?;
        log::debug!("Cell ({}, {}) set to {}", row + 1, col + 1, value);
        Ok(self.refresh())
    }

    /// Switch to another supported size, keeping the overlapping cells
    pub fn resize(&mut self, size: usize) -> Result<&CheckResult, SessionError> {
        check_size(size)?;

        let mut grid = Grid::filled(size, self.bounds.min)?;
        let keep = size.min(self.size());
        for row in 0..keep {
            for col in 0..keep {
                if let Some(value) = self.grid.get(row, col) {
                    grid.set(row, col, value)?;
                }
            }
        }

        log::info!("Grid resized from {} to {}", self.size(), size);
        self.grid = grid;
        Ok(self.refresh())
    }

    /// Put every cell back to the lower bound
    pub fn reset(&mut self) -> &CheckResult {
        self.grid.fill(self.bounds.min);
        log::debug!("Grid reset to {}", self.bounds.min);
        self.refresh()
    }

    /// Replace the whole grid, subject to the size and value rules
    pub fn load(&mut self, grid: Grid) -> Result<&CheckResult, SessionError> {
        check_size(grid.size())?;
        for (row, values) in grid.rows().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !self.bounds.contains(value) {
                    return Err(SessionError::OutOfRange {
                        row,
                        col,
                        value,
                        min: self.bounds.min,
                        max: self.bounds.max,
                    });
                }
            }
        }

        self.grid = grid;
        Ok(self.refresh())
    }

    fn refresh(&mut self) -> &CheckResult {
        self.result = evaluate(&self.grid);
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_magic() {
        let session = Session::new(DEFAULT_SIZE, CellBounds::default()).unwrap();
        assert_eq!(session.size(), 3);
        assert!(session.result().is_magic());
        assert_eq!(session.result().target(), 3);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = CellBounds::default();
        assert!(bounds.contains(1));
        assert!(bounds.contains(9));
        assert!(!bounds.contains(0));
        assert!(!bounds.contains(10));
    }

    #[test]
    fn test_unsupported_sizes() {
        for size in [0, 1, 2, 6] {
            assert_eq!(
                Session::new(size, CellBounds::default()).unwrap_err(),
                SessionError::UnsupportedSize { size }
            );
        }
    }

    #[test]
    fn test_inverted_bounds() {
        let err = Session::new(3, CellBounds { min: 5, max: 2 }).unwrap_err();
        assert_eq!(err, SessionError::InvalidBounds { min: 5, max: 2 });
    }
}
