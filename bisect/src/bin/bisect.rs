//! bisect - find a value in a sorted integer sequence
//!
//! With no arguments, searches `[1, 2, 3, 4, 5, 6, 7, 8]` for `5`.

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bisect::{
    parse_integer, search_reports, ElementType, MmapSequence, SearchConfig, SearchElement,
    SearchError, SearchReport, SortedVec, DEMO_SEQUENCE, DEMO_TARGET,
};

/// Binary search over a sorted integer sequence
///
/// Prints one `Index of <target>: <index>` line per target, with -1 for
/// targets that are absent.
#[derive(Parser, Debug)]
#[command(name = "bisect")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Values to search for
    targets: Vec<String>,

    /// Sorted values separated by commas or whitespace
    #[arg(long, conflicts_with = "file", allow_hyphen_values = true)]
    values: Option<String>,

    /// Sequence file of raw little-endian integers, memory-mapped
    #[arg(long)]
    file: Option<PathBuf>,

    /// Element type of --values or --file (i32, i64, u32, u64)
    #[arg(long, value_name = "TYPE")]
    element_type: Option<String>,

    /// Reject input that is not sorted
    #[arg(long)]
    verify: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.debug)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    debug!(?config, "effective configuration");

    if cli.values.is_none() && cli.file.is_none() {
        return run_demo(&cli, &config);
    }

    match config.element_type {
        ElementType::I32 => run::<i32>(&cli, &config),
        ElementType::I64 => run::<i64>(&cli, &config),
        ElementType::U32 => run::<u32>(&cli, &config),
        ElementType::U64 => run::<u64>(&cli, &config),
    }
}

/// Merge the optional config file with command line overrides
fn load_config(cli: &Cli) -> anyhow::Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SearchConfig::default(),
    };

    if cli.verify {
        config = config.with_verify_sorted(true);
    }

    if let Some(name) = &cli.element_type {
        let element_type = ElementType::from_name(name)
            .map_err(SearchError::from)
            .with_context(|| format!("Invalid element type '{name}'"))?;
        config = config.with_element_type(element_type);
    }

    Ok(config)
}

/// Search the built-in demonstration sequence
fn run_demo(cli: &Cli, config: &SearchConfig) -> anyhow::Result<()> {
    info!("no input given, searching the demo sequence");

    let seq = SortedVec::from_unchecked(DEMO_SEQUENCE.to_vec());
    let targets = if cli.targets.is_empty() {
        vec![DEMO_TARGET]
    } else {
        parse_targets::<i32>(&cli.targets)?
    };

    print_reports(&search_reports(&seq, &targets, config), cli.json)
}

/// Search --values or --file as a sequence of `T`
fn run<T: SearchElement + Serialize>(cli: &Cli, config: &SearchConfig) -> anyhow::Result<()> {
    let targets = parse_targets::<T>(&cli.targets)?;
    if targets.is_empty() {
        anyhow::bail!("No targets given. Pass one or more values to search for.");
    }

    let reports = if let Some(path) = &cli.file {
        let seq = MmapSequence::<T>::open(path, config)
            .with_context(|| format!("Failed to load sequence from {}", path.display()))?;
        search_reports(&seq, &targets, config)
    } else {
        let values = cli.values.as_deref().unwrap_or_default();
        let seq = SortedVec::<T>::parse(values, config).context("Failed to parse --values")?;
        search_reports(&seq, &targets, config)
    };

    print_reports(&reports, cli.json)
}

fn parse_targets<T: SearchElement>(raw: &[String]) -> anyhow::Result<Vec<T>> {
    raw.iter()
        .map(|s| {
            parse_integer::<T>(s)
                .map_err(SearchError::from)
                .with_context(|| format!("Invalid target '{s}'"))
        })
        .collect()
}

fn print_reports<T: Display + Serialize>(
    reports: &[SearchReport<T>],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            println!("{report}");
        }
    }
    Ok(())
}
