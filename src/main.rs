//! nsfix - adds the missing Android `namespace` to a cached Flutter plugin
//!
//! nsfix:
//! - Locates the plugin's android/build.gradle in the pub cache
//! - Keeps a pristine build.gradle.backup and restores it on every run
//! - Inserts `namespace "..."` after `android {` when it is missing
//! - Reports what it did (md/jsonl/json/raw)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod patch;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
