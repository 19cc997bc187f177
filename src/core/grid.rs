//! Grid Value
//!
//! A square matrix of integers. A `Grid` can only be built through the
//! shape-checking constructors, so every instance is square and non-empty.

use serde::Serialize;

/// Shape problems found while assembling a grid
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("grid is not square: row {} has {found} cells, expected {expected}", .row + 1)]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid declares size {declared} but is {actual}x{actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("cell ({}, {}) is outside a {size}x{size} grid", .row + 1, .col + 1)]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// An N×N integer matrix stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Vec<Vec<i64>>")]
pub struct Grid {
    size: usize,
    cells: Vec<i64>,
}

impl Grid {
    /// Build a grid from rows, rejecting anything that is not a non-empty square.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::Ragged {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { size, cells })
    }

    /// A grid with every cell set to `value`
    pub fn filled(size: usize, value: i64) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            size,
            cells: vec![value; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Overwrite one cell (0-based coordinates)
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<(), GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    /// Overwrite every cell
    pub fn fill(&mut self, value: i64) {
        self.cells.fill(value);
    }

    /// Row `index` as a slice.
    ///
    /// # Panics
    /// Panics if `index >= size`.
    pub fn row(&self, index: usize) -> &[i64] {
        let start = index * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.cells.chunks(self.size)
    }

    /// Cells as a flat row-major slice
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }
}

impl From<Grid> for Vec<Vec<i64>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
