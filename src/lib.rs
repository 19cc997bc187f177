//! Magic Box
//!
//! Checks whether an N×N grid of integers is a magic square: every row,
//! every column and both diagonals summing to the same value.
//!
//! This library provides:
//! - A shape-checked grid value and the magic-square validator
//! - An interactive grid session with bounded cells
//! - A plain-text grid format and report rendering
//! - Configuration and the `check`, `watch` and `play` commands

pub mod cli;
pub mod config;
pub mod core;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use crate::core::{CellBounds, Grid, GridError, Session, SessionError};
pub use parser::{parse_grid, ParseError, ParsedGrid};
pub use validation::{evaluate, evaluate_rows, CheckResult, Line};
