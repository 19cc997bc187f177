//! Interactive grid session on stdin/stdout.
//!
//! Every accepted edit re-evaluates the grid and prints a fresh report.
//! Coordinates are 1-based, matching the "Cell r,c" labels of the grid.

use std::io::Write;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::core::session::Session;
use crate::report::{render, OutputFormat};
use crate::Config;

static SET_COMMAND: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:set\s+)?(\d+)[\s,]+(\d+)(?:\s*=\s*|\s+)([+-]?\d+)$").ok()
});

pub const HELP: &str = "\
Commands:
  set R C V   set the cell at row R, column C to V (also: R C V)
  size N      switch to an N x N grid (3, 4 or 5)
  reset       put every cell back to its minimum
  show        print the current grid and checks
  help        print this message
  quit        leave the session
";

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// 0-based coordinates
    Set { row: usize, col: usize, value: i64 },
    Size(usize),
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("rows and columns are numbered from 1")]
    ZeroCoordinate,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<PlayCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let rest: Vec<&str> = words.collect();

    let command = match keyword.as_str() {
        "size" => match rest.as_slice() {
            [n] => PlayCommand::Size(n.parse().map_err(|_| CommandError::Usage("size N"))?),
            _ => return Err(CommandError::Usage("size N")),
        },
        "reset" => PlayCommand::Reset,
        "show" => PlayCommand::Show,
        "help" | "?" => PlayCommand::Help,
        "quit" | "exit" | "q" => PlayCommand::Quit,
        _ => return parse_set(line).map(Some),
    };

    Ok(Some(command))
}

fn parse_set(line: &str) -> Result<PlayCommand, CommandError> {
    let captures = SET_COMMAND
        .as_ref()
        .and_then(|re| re.captures(line))
        .ok_or_else(|| {
            if line.to_ascii_lowercase().starts_with("set") {
                CommandError::Usage("set R C V")
            } else {
                CommandError::Unknown(line.to_string())
            }
        })?;

    let usage = || CommandError::Usage("set R C V");
    let row: usize = captures[1].parse().map_err(|_| usage())?;
    let col: usize = captures[2].parse().map_err(|_| usage())?;
    let value: i64 = captures[3].parse().map_err(|_| usage())?;

    Ok(PlayCommand::Set {
        row: row.checked_sub(1).ok_or(CommandError::ZeroCoordinate)?,
        col: col.checked_sub(1).ok_or(CommandError::ZeroCoordinate)?,
        value,
    })
}

/// Run a session over any line source, writing reports to `out`
pub async fn drive<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", render(format, session.grid(), session.result())?)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let outcome = match command {
            PlayCommand::Quit => break,
            PlayCommand::Help => {
                write!(out, "{HELP}")?;
                continue;
            }
            PlayCommand::Show => Ok(()),
            PlayCommand::Reset => {
                session.reset();
                Ok(())
            }
            PlayCommand::Size(size) => session.resize(size).map(|_| ()),
            PlayCommand::Set { row, col, value } => session.set_cell(row, col, value).map(|_| ()),
        };

        match outcome {
            Ok(()) => {
                writeln!(out)?;
                write!(out, "{}", render(format, session.grid(), session.result())?)?;
            }
            Err(e) => {
                log::debug!("Rejected edit: {}", e);
                writeln!(out, "error: {e}")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}

pub async fn run(config: &Config) -> Result<()> {
    let mut session = Session::new(config.size, config.bounds)?;
    log::info!(
        "Starting {}x{} session, cells in {}..={}",
        config.size,
        config.size,
        config.bounds.min,
        config.bounds.max
    );

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{HELP}")?;
    drive(
        &mut session,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
        config.format,
    )
    .await
}
