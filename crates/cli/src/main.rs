//! Command-line interface for linecompare
//!
//! Reads two text files, aligns them line by line and prints the verdict and
//! the aligned records.
//!
//! Usage:
//!   linecompare `<original>` `<changed>` [-w] [--strategy `<strategy>`] [-f table|json]

mod acquire;
mod error;
mod render;
mod settings;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use linecompare_core::{AlignmentStrategy, DiffEngine};
use log::{info, LevelFilter};
use std::path::PathBuf;

use crate::render::TableOptions;
use crate::settings::{Loader, OutputFormat, Settings, LOCAL_SETTINGS_FILE};

#[derive(Debug, Parser)]
#[command(name = "linecompare", version, about = "Compare two text files line by line")]
struct Cli {
    /// Path to the original document
    original: PathBuf,

    /// Path to the changed document
    changed: PathBuf,

    /// Ignore whitespace differences when comparing
    #[arg(short = 'w', long)]
    ignore_whitespace: bool,

    /// Line alignment strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Lines scanned ahead when resynchronizing
    #[arg(long, value_name = "LINES")]
    window: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Only print records that are not equal
    #[arg(long)]
    only_changes: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Settings file to layer over the defaults
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Lookahead,
    Positional,
}

impl From<StrategyArg> for AlignmentStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Lookahead => AlignmentStrategy::Lookahead,
            StrategyArg::Positional => AlignmentStrategy::Positional,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli).context("Failed to load settings")?;

    let original = acquire::read_document(&cli.original)?;
    let changed = acquire::read_document(&cli.changed)?;

    let engine = DiffEngine::new(settings.diff.clone());
    let outcome = engine.compare(Some(&original), Some(&changed));
    let diff = engine.diff(Some(&original), Some(&changed));

    info!(
        "Compared {} with {}: {:?}",
        cli.original.display(),
        cli.changed.display(),
        outcome.verdict
    );

    match settings.output.format {
        OutputFormat::Table => {
            let options = TableOptions {
                color: settings.output.color,
                only_changes: settings.output.only_changes,
            };
            print!("{}", render::table(&outcome, &diff, options));
        }
        OutputFormat::Json => {
            let report = render::json(&outcome, &diff).context("Failed to serialize report")?;
            println!("{}", report);
        }
    }

    Ok(())
}

/// Defaults, then the settings file, then the environment, then flags.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut loader = match &cli.config {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_SETTINGS_FILE),
    }
    .with_environment();

    if cli.ignore_whitespace {
        loader = loader.set_override("diff.ignore_whitespace", true)?;
    }
    if let Some(strategy) = cli.strategy {
        loader = loader.set_override("diff.strategy", AlignmentStrategy::from(strategy).as_str())?;
    }
    if let Some(window) = cli.window {
        let window = i64::try_from(window).context("Lookahead window is too large")?;
        loader = loader.set_override("diff.lookahead_window", window)?;
    }
    if let Some(format) = cli.format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if cli.only_changes {
        loader = loader.set_override("output.only_changes", true)?;
    }
    if cli.no_color {
        loader = loader.set_override("output.color", false)?;
    }

    Ok(loader.build()?)
}
