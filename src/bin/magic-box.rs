use std::process::ExitCode;

use anyhow::Result;
use magic_box::cli::run;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    run().await
}
