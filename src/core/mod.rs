//! Core Grid State
//!
//! The grid value and the interactive grid store built on it.

pub mod grid;
pub mod session;

pub use grid::{Grid, GridError};
pub use session::{CellBounds, Session, SessionError, DEFAULT_SIZE, SUPPORTED_SIZES};
