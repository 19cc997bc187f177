//! Validation Engine
//!
//! Magic-square checking, separated from parsing and presentation concerns.
//! The reference sum is always the sum of row 0, even when row 0 is the line
//! that deviates from the rest.

use std::fmt;

use serde::Serialize;

use crate::core::grid::{Grid, GridError};

/// One checked line of a grid (0-based indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(i) => write!(f, "Row {}", i + 1),
            Line::Column(i) => write!(f, "Col {}", i + 1),
            Line::MainDiagonal => f.write_str("Main Diag"),
            Line::AntiDiagonal => f.write_str("Other Diag"),
        }
    }
}

/// Result of checking one grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    rows: Vec<bool>,
    cols: Vec<bool>,
    main_diagonal: bool,
    anti_diagonal: bool,
    target: i128,
    row_sums: Vec<i128>,
    col_sums: Vec<i128>,
    main_diagonal_sum: i128,
    anti_diagonal_sum: i128,
}

impl CheckResult {
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Per-row pass flags, in row order
    pub fn rows(&self) -> &[bool] {
        &self.rows
    }

    /// Per-column pass flags, in column order
    pub fn cols(&self) -> &[bool] {
        &self.cols
    }

    pub fn main_diagonal(&self) -> bool {
        self.main_diagonal
    }

    pub fn anti_diagonal(&self) -> bool {
        self.anti_diagonal
    }

    /// `[main, anti]`
    pub fn diagonals(&self) -> [bool; 2] {
        [self.main_diagonal, self.anti_diagonal]
    }

    /// The reference sum: the sum of row 0
    pub fn target(&self) -> i128 {
        self.target
    }

    pub fn row_sums(&self) -> &[i128] {
        &self.row_sums
    }

    pub fn col_sums(&self) -> &[i128] {
        &self.col_sums
    }

    pub fn main_diagonal_sum(&self) -> i128 {
        self.main_diagonal_sum
    }

    pub fn anti_diagonal_sum(&self) -> i128 {
        self.anti_diagonal_sum
    }

    /// True when every row, every column and both diagonals hit the target
    pub fn is_magic(&self) -> bool {
        self.rows.iter().all(|&ok| ok)
            && self.cols.iter().all(|&ok| ok)
            && self.main_diagonal
            && self.anti_diagonal
    }

    /// Lines that miss the target: rows, then columns, then the diagonals
    pub fn failing_lines(&self) -> Vec<Line> {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(_, &ok)| !ok)
            .map(|(i, _)| Line::Row(i));
        let cols = self
            .cols
            .iter()
            .enumerate()
            .filter(|&(_, &ok)| !ok)
            .map(|(i, _)| Line::Column(i));
        let diagonals = [
            (Line::MainDiagonal, self.main_diagonal),
            (Line::AntiDiagonal, self.anti_diagonal),
        ]
        .into_iter()
        .filter(|&(_, ok)| !ok)
        .map(|(line, _)| line);

        rows.chain(cols).chain(diagonals).collect()
    }

    /// Sum of a given line
    pub fn sum_of(&self, line: Line) -> Option<i128> {
        match line {
            Line::Row(i) => self.row_sums.get(i).copied(),
            Line::Column(i) => self.col_sums.get(i).copied(),
            Line::MainDiagonal => Some(self.main_diagonal_sum),
            Line::AntiDiagonal => Some(self.anti_diagonal_sum),
        }
    }
}

/// Check a grid against the magic-square rule
pub fn evaluate(grid: &Grid) -> CheckResult {
    let n = grid.size();

    let row_sums: Vec<i128> = grid
        .rows()
        .map(|row| row.iter().map(|&v| i128::from(v)).sum())
        .collect();

    let mut col_sums = vec![0i128; n];
    for row in grid.rows() {
        for (sum, &v) in col_sums.iter_mut().zip(row) {
            *sum += i128::from(v);
        }
    }

    let main_diagonal_sum: i128 = (0..n).map(|i| i128::from(grid.row(i)[i])).sum();
    let anti_diagonal_sum: i128 = (0..n).map(|i| i128::from(grid.row(i)[n - 1 - i])).sum();

    // Grid is never empty, so row 0 always exists.
    let target = row_sums[0];

    CheckResult {
        rows: row_sums.iter().map(|&s| s == target).collect(),
        cols: col_sums.iter().map(|&s| s == target).collect(),
        main_diagonal: main_diagonal_sum == target,
        anti_diagonal: anti_diagonal_sum == target,
        target,
        row_sums,
        col_sums,
        main_diagonal_sum,
        anti_diagonal_sum,
    }
}

/// Check a raw matrix, failing on anything that is not a non-empty square
pub fn evaluate_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<CheckResult, GridError> {
    let grid = Grid::from_rows(rows)?;
    Ok(evaluate(&grid))
}
