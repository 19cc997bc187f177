//! Grid Parser
//!
//! Turns grid text into rows of integers. Shape rules are applied later by
//! [`ParsedGrid::into_grid`], so a ragged file still parses and the caller
//! gets a precise shape error instead of a generic parse failure.

pub mod lexer;

use std::sync::LazyLock;

use regex::Regex;

use crate::core::grid::{Grid, GridError};

pub use lexer::{tokenize_line, Token, TokenKind};

static SIZE_DIRECTIVE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"magic_size\s*=\s*(\d+)").ok());

/// Errors in grid text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}, column {column}: '{text}' is not an integer")]
    InvalidNumber {
        line: usize,
        column: usize,
        text: String,
    },
}

/// Rows read from grid text, not yet shape-checked
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedGrid {
    pub rows: Vec<Vec<i64>>,
    /// Size announced by a `magic_size=N` comment
    pub declared_size: Option<usize>,
}

impl ParsedGrid {
    /// Apply the shape rules, including any declared size
    pub fn into_grid(self) -> Result<Grid, GridError> {
        let grid = Grid::from_rows(&self.rows)?;
        match self.declared_size {
            Some(declared) if declared != grid.size() => Err(GridError::SizeMismatch {
                declared,
                actual: grid.size(),
            }),
            _ => Ok(grid),
        }
    }
}

/// Parse grid text. Blank and comment-only lines are skipped.
pub fn parse_grid(content: &str) -> Result<ParsedGrid, ParseError> {
    let mut parsed = ParsedGrid::default();

    for (line_idx, line) in content.lines().enumerate() {
        let mut row = Vec::new();

        for token in tokenize_line(line) {
            match token.kind {
                TokenKind::Number(value) => row.push(value),
                TokenKind::Comment => {
                    if parsed.declared_size.is_none() {
                        parsed.declared_size = detect_size_directive(&token.text);
                    }
                }
                TokenKind::Invalid => {
                    return Err(ParseError::InvalidNumber {
                        line: line_idx + 1,
                        column: token.column,
                        text: token.text,
                    });
                }
            }
        }

        if !row.is_empty() {
            parsed.rows.push(row);
        }
    }

    log::debug!(
        "Parsed {} grid rows (declared size: {:?})",
        parsed.rows.len(),
        parsed.declared_size
    );
    Ok(parsed)
}

/// Find a `magic_size=N` directive in a comment
pub fn detect_size_directive(comment: &str) -> Option<usize> {
    let captures = SIZE_DIRECTIVE.as_ref()?.captures(comment)?;
    captures.get(1)?.as_str().parse().ok()
}
