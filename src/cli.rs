//! Command-line front end.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::canonicalizer::{Canonicalizer, RunReport};
use crate::io::{read_lines, write_lines};
use crate::settings;
use crate::utils::timing::StageTimings;

/// Turns a list of URLs into a sorted, deduplicated set of crawl seeds.
#[derive(Debug, Parser)]
#[command(name = "crawl_seed")]
#[command(about = "Canonicalize a URL list into sorted crawl seeds", long_about = None)]
pub struct Cli {
    /// Path to the input file containing URLs, one per line.
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    pub input: PathBuf,

    /// Path to the output file.
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Optional settings file (TOML, JSON or YAML).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of parsing workers; overrides the settings file.
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Write logs to a timestamped file in this directory instead of stderr.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Reads the input, runs the pipeline and writes the output.
///
/// # Errors
/// Any failure here is fatal for the process: unreadable settings or input,
/// or an output file that cannot be written.
pub async fn run(cli: &Cli) -> Result<RunReport> {
    let mut settings = settings::load(cli.config.as_deref())?;
    if let Some(workers) = cli.workers {
        settings.workers = workers;
    }
    let canonicalizer = Canonicalizer::from_settings(&settings);

    let mut timings = StageTimings::new();
    let lines = timings.time_async("read", read_lines(&cli.input)).await?;
    info!("Processing {} URLs from {}", lines.len(), cli.input.display());

    let (entries, mut report) = canonicalizer.run(lines).await?;
    timings.merge(std::mem::take(&mut report.timings));

    timings.time_async("write", write_lines(&cli.output, &entries)).await?;
    info!("Wrote {} entries to {}", entries.len(), cli.output.display());

    report.timings = timings;
    report.log();
    Ok(report)
}
