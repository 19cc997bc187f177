//! One-shot checking of a grid file or stdin.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::core::grid::Grid;
use crate::core::session::CellBounds;
use crate::parser::parse_grid;
use crate::report::render;
use crate::validation::{evaluate, CheckResult};
use crate::Config;

/// Read grid text from a file, or from stdin for `None` and `-`
pub async fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read grid file: {}", path.display())),
        _ => {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .context("Failed to read grid from stdin")?;
            Ok(content)
        }
    }
}

/// Parse and shape-check grid text
pub fn load_grid(content: &str) -> Result<Grid> {
    let parsed = parse_grid(content)?;
    Ok(parsed.into_grid()?)
}

/// Cells that fall outside the accepted range, as (row, col, value), 0-based
pub fn out_of_range_cells(grid: &Grid, bounds: CellBounds) -> Vec<(usize, usize, i64)> {
    grid.rows()
        .enumerate()
        .flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .filter(|&(_, &value)| !bounds.contains(value))
                .map(move |(col, &value)| (row, col, value))
        })
        .collect()
}

/// Load grid text and evaluate it. Range problems are only logged: the
/// validator itself accepts any integer.
pub fn check_content(content: &str, bounds: CellBounds) -> Result<(Grid, CheckResult)> {
    let grid = load_grid(content)?;

    for (row, col, value) in out_of_range_cells(&grid, bounds) {
        log::warn!(
            "Cell ({}, {}) = {} is outside {}..={}",
            row + 1,
            col + 1,
            value,
            bounds.min,
            bounds.max
        );
    }

    let result = evaluate(&grid);
    log::debug!(
        "Evaluated {}x{} grid: target {}, magic {}",
        grid.size(),
        grid.size(),
        result.target(),
        result.is_magic()
    );
    Ok((grid, result))
}

pub async fn run(config: &Config, path: Option<&Path>) -> Result<ExitCode> {
    let content = read_source(path).await?;
    let (grid, result) = check_content(&content, config.bounds)?;

    print!("{}", render(config.format, &grid, &result)?);

    Ok(exit_code(&result))
}

/// Process status for a checked grid: 0 when magic, 1 otherwise
pub fn exit_code(result: &CheckResult) -> ExitCode {
    if result.is_magic() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_content_magic() {
        let (grid, result) = check_content("2 7 6\n9 5 1\n4 3 8\n", CellBounds::default()).unwrap();
        assert_eq!(grid.size(), 3);
        assert!(result.is_magic());
    }

    #[test]
    fn test_check_content_shape_error() {
        let err = check_content("1 2 3\n4 5 6\n7 8\n", CellBounds::default()).unwrap_err();
        assert!(err.to_string().contains("not square"));
    }

    #[test]
    fn test_exit_code() {
        let (_, magic) = check_content("2 7 6\n9 5 1\n4 3 8\n", CellBounds::default()).unwrap();
        assert_eq!(
            format!("{:?}", exit_code(&magic)),
            format!("{:?}", ExitCode::SUCCESS)
        );

        let (_, not_magic) =
            check_content("1 1 1\n1 1 1\n1 1 2\n", CellBounds::default()).unwrap();
        assert_eq!(
            format!("{:?}", exit_code(&not_magic)),
            format!("{:?}", ExitCode::from(1))
        );
    }

    #[test]
    fn test_out_of_range_cells() {
        let grid = load_grid("1 10\n0 5\n").unwrap();
        assert_eq!(
            out_of_range_cells(&grid, CellBounds::default()),
            vec![(0, 1, 10), (1, 0, 0)]
        );
    }
}
