//! Validation Engine
//!
//! Magic-square checking kept apart from parsing and rendering.

pub mod engine;

pub use engine::{evaluate, evaluate_rows, CheckResult, Line};
