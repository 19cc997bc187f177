//! Report rendering for check results.
//!
//! Text output mirrors the pass/fail indicators of the grid page: one marker
//! per row, column and diagonal, then a banner carrying the target sum.
//! JSON output serializes the same data for scripts.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;
use crate::validation::{CheckResult, Line};

const PASS: &str = "[ok]";
const FAIL: &str = "[!!]";

/// How reports are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    size: usize,
    grid: &'a Grid,
    magic: bool,
    result: &'a CheckResult,
}

/// Final success/failure message
pub fn banner(result: &CheckResult) -> String {
    if result.is_magic() {
        format!("Magic square complete! Common sum = {}", result.target())
    } else {
        format!("Not magic yet. Target sum = {}", result.target())
    }
}

fn marker(ok: bool) -> &'static str {
    if ok { PASS } else { FAIL }
}

fn render_checks(title: &str, checks: &[(Line, bool)]) -> String {
    let cells: Vec<String> = checks
        .iter()
        .map(|(line, ok)| format!("{} {}", marker(*ok), line))
        .collect();
    format!("{:<17}{}\n", format!("{title}:"), cells.join("  "))
}

/// Grid cells right-aligned in columns
pub fn render_grid(grid: &Grid) -> String {
    let width = grid
        .cells()
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in grid.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        out.push_str(&format!("  {}\n", cells.join("  ")));
    }
    out
}

/// Human-readable report
pub fn render_text(grid: &Grid, result: &CheckResult) -> String {
    let mut out = render_grid(grid);
    out.push('\n');

    let rows: Vec<(Line, bool)> = result
        .rows()
        .iter()
        .enumerate()
        .map(|(i, &ok)| (Line::Row(i), ok))
        .collect();
    let cols: Vec<(Line, bool)> = result
        .cols()
        .iter()
        .enumerate()
        .map(|(i, &ok)| (Line::Column(i), ok))
        .collect();
    let diagonals = [
        (Line::MainDiagonal, result.main_diagonal()),
        (Line::AntiDiagonal, result.anti_diagonal()),
    ];

    out.push_str(&render_checks("Row checks", &rows));
    out.push_str(&render_checks("Column checks", &cols));
    out.push_str(&render_checks("Diagonal checks", &diagonals));

    for line in result.failing_lines() {
        if let Some(sum) = result.sum_of(line) {
            out.push_str(&format!(
                "  {line} sums to {sum}, expected {}\n",
                result.target()
            ));
        }
    }

    out.push_str(&banner(result));
    out.push('\n');
    out
}

/// Machine-readable report
pub fn render_json(grid: &Grid, result: &CheckResult) -> Result<String> {
    let report = JsonReport {
        size: grid.size(),
        grid,
        magic: result.is_magic(),
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render(format: OutputFormat, grid: &Grid, result: &CheckResult) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(grid, result)),
        OutputFormat::Json => {
            let mut json = render_json(grid, result)?;
            json.push('\n');
            Ok(json)
        }
    }
}
