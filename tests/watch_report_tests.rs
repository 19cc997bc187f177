//! Reports produced by the watch loop as the grid file changes
use clap::Parser;
use magic_box::cli::watch::report_file;
use magic_box::config::{Args, Config, FileConfig};
use tokio::fs;

fn watch_config(path: &str) -> Config {
    let args = Args::try_parse_from(["magic-box", "watch", path]).unwrap();
    Config::from_parts(args, FileConfig::default()).expect("create config")
}

#[tokio::test]
async fn test_report_recovers_after_bad_edit() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("grid.txt");
    let config = watch_config(path.to_str().expect("utf-8 path"));

    // Ragged save
    fs::write(&path, "1 2\n3\n").await.expect("write grid");
    let report = report_file(&config, &path).await;
    assert!(report.contains("grid is not square"), "got: {report}");
    assert!(report.starts_with(&path.display().to_string()));

    // Fixed on the next save
    fs::write(&path, "1\n").await.expect("write grid");
    let report = report_file(&config, &path).await;
    assert!(
        report.contains("Magic square complete! Common sum = 1"),
        "got: {report}"
    );
}

#[tokio::test]
async fn test_report_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("gone.txt");
    let config = watch_config(path.to_str().expect("utf-8 path"));

    let report = report_file(&config, &path).await;
    assert!(report.starts_with(&path.display().to_string()));
    assert!(!report.contains("Magic square"));
}
