//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::model::{ReportError, ResultItem, ResultSet};
use crate::core::paths::{package_gradle_path, pub_cache_root};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::status::Status;
use crate::core::util::wait_for_enter;
use crate::patch::error::PatchError;
use crate::patch::run::{apply, Outcome, PatchOptions};

pub const DEFAULT_PACKAGE: &str = "edge_detection";
pub const DEFAULT_PACKAGE_VERSION: &str = "1.1.3";
pub const DEFAULT_NAMESPACE: &str = "com.sample.edgedetection";

const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// nsfix - add the missing Android namespace to a cached Flutter plugin.
#[derive(Parser, Debug)]
#[command(name = "nsfix")]
#[command(
    author,
    version,
    about,
    long_about = r#"Android Gradle Plugin 8+ requires every library module to declare a
`namespace`. Some published Flutter plugins predate that rule and fail to
build. nsfix patches the plugin's android/build.gradle inside the pub cache.

The first run saves the pristine file as build.gradle.backup. Every run
restores that backup before patching, so running nsfix again is safe.

Examples:
    nsfix
    nsfix --package edge_detection --package-version 1.1.3
    nsfix --pub-cache ~/.pub-cache --dry-run --format jsonl
    nsfix --file path/to/android/build.gradle --namespace com.example.plugin
"#
)]
pub struct Cli {
    /// Pub cache root directory.
    #[arg(
        long,
        env = "PUB_CACHE",
        value_name = "DIR",
        long_help = "Pub cache root directory.\n\n\
Defaults to %LOCALAPPDATA%\\Pub\\Cache on Windows and $HOME/.pub-cache elsewhere."
    )]
    pub pub_cache: Option<PathBuf>,

    /// Name of the cached package to patch.
    #[arg(long, default_value = DEFAULT_PACKAGE, value_name = "NAME")]
    pub package: String,

    /// Version of the cached package to patch.
    #[arg(long, default_value = DEFAULT_PACKAGE_VERSION, value_name = "VERSION")]
    pub package_version: String,

    /// Namespace to declare in the android block.
    #[arg(long, default_value = DEFAULT_NAMESPACE, value_name = "NAMESPACE")]
    pub namespace: String,

    /// Patch this build.gradle instead of looking it up in the pub cache.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Do not wait for Enter before exiting.
    #[arg(
        long,
        env = "NSFIX_NO_PAUSE",
        long_help = "Do not wait for Enter before exiting.\n\n\
The pause only ever happens when stdin is a terminal."
    )]
    pub no_pause: bool,

    /// Report format (jsonl/json/md/raw).
    #[arg(long, default_value = "md", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored status output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (only errors and the report).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (resolved paths and content hashes).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The gradle file this run targets
    pub fn target(&self) -> Result<PathBuf, PatchError> {
        if let Some(file) = &self.file {
            return Ok(file.clone());
        }
        let root = pub_cache_root(self.pub_cache.as_deref())?;
        Ok(package_gradle_path(&root, &self.package, &self.package_version))
    }

    fn pause(&self) {
        if !self.no_pause {
            wait_for_enter(PAUSE_PROMPT);
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));
    let status = Status::new(cli.quiet, cli.verbose, cli.no_color);

    status.banner(&format!("Fixing {} Package", cli.package));

    let target = cli.target()?;
    status.debug(format!("target: {}", target.display()));

    let options = PatchOptions {
        target,
        namespace: cli.namespace.clone(),
        dry_run: cli.dry_run,
    };

    let report = match apply(&options, &status) {
        Ok(report) => report,
        Err(err) => {
            if let Some(patch_err @ PatchError::NotFound { .. }) = err.downcast_ref::<PatchError>() {
                report_not_found(&cli, &renderer, &status, patch_err);
            }
            return Err(err);
        }
    };

    status.blank();
    if cli.dry_run {
        status.banner("Dry Run Complete (nothing written)");
    } else if report.result_set.has_errors() {
        status.banner("No Fix Applied");
    } else {
        status.banner("Fix Applied!");
    }

    if !cli.dry_run && report.outcome != Outcome::AnchorMissing {
        status.info("Now run these commands in your Flutter project folder:");
        status.info("  flutter clean");
        status.info("  flutter pub get");
        status.info("  flutter build apk --debug");
        status.blank();
    }

    println!("{}", renderer.render(&report.result_set));

    cli.pause();
    Ok(())
}

/// Print remediation for a missing package and exit with code 1
fn report_not_found(cli: &Cli, renderer: &Renderer, status: &Status, patch_err: &PatchError) -> ! {
    status.error(patch_err.to_string());
    status.info("");
    status.info("Please make sure you've run 'flutter pub get' first.");

    let mut result_set = ResultSet::new();
    result_set.push(ResultItem::error(ReportError::new(
        patch_err.code(),
        patch_err.to_string(),
    )));
    println!("{}", renderer.render(&result_set));

    cli.pause();
    std::process::exit(1)
}
