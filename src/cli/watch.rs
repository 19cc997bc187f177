//! Re-check a grid file every time it changes on disk.
//!
//! The parent directory is watched rather than the file itself, so editors
//! that save by writing a temporary file and renaming it are still followed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::cli::check::check_content;
use crate::report::render;
use crate::Config;

/// Events from the file watcher
#[derive(Debug)]
enum WatchEvent {
    GridChanged,
    WatcherError(notify::Error),
}

/// Whether a filesystem event touches the watched grid file
pub fn is_grid_event(event: &Event, target: &Path) -> bool {
    let relevant_kind = match event.kind {
        EventKind::Create(_) => true,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };

    relevant_kind
        && event
            .paths
            .iter()
            .any(|path| path.file_name().is_some() && path.file_name() == target.file_name())
}

/// Directory to watch for a given grid path
pub fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Evaluate the file and render a report, or describe why that failed
pub async fn report_file(config: &Config, path: &Path) -> String {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => return format!("{}: {}\n", path.display(), e),
    };

    match check_content(&content, config.bounds).and_then(|(grid, result)| {
        render(config.format, &grid, &result)
    }) {
        Ok(report) => report,
        Err(e) => format!("{}: {:#}\n", path.display(), e),
    }
}

pub async fn run(config: &Config, path: &Path) -> Result<()> {
    print!("{}", report_file(config, path).await);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let target = path.to_path_buf();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if is_grid_event(&event, &target) {
                    let _ = tx.send(WatchEvent::GridChanged);
                }
            }
            Err(e) => {
                let _ = tx.send(WatchEvent::WatcherError(e));
            }
        },
        notify::Config::default(),
    )?;

    let dir = watch_dir(path);
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch directory: {}", dir.display()))?;
    log::info!("Watching {} for changes", path.display());

    while let Some(event) = rx.recv().await {
        match event {
            WatchEvent::GridChanged => {
                log::debug!("Grid file changed: {}", path.display());
                println!();
                print!("{}", report_file(config, path).await);
            }
            WatchEvent::WatcherError(e) => {
                log::error!("Grid file watcher error: {}", e);
            }
        }
    }

    Ok(())
}
