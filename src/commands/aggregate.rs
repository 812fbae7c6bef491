//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Discovers report files in the input directory
//! 2. Parses each report into flow records
//! 3. Averages each report's counters
//! 4. Writes the CSV output

use crate::aggregator::{aggregate_report, ReportAverages};
use crate::output::write_averages;
use crate::parser::parse_report;
use crate::utils::config::{REPORT_FILE_EXTENSION, REPORT_FILE_PREFIX};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Directory containing the simulation report files
    pub input_dir: PathBuf,

    /// Output path for the averages CSV
    pub output_csv: PathBuf,

    /// Report file name prefix; a report is `<prefix><run-index>.xml`
    pub file_prefix: String,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_csv: PathBuf::from("averages.csv"),
            file_prefix: REPORT_FILE_PREFIX.to_string(),
        }
    }
}

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Aggregate command arguments
///
/// # Returns
/// Ok when the batch finishes. Per-file parse failures are logged and
/// skipped, never fatal; with zero matching files the command logs the
/// condition and returns without creating the output file.
///
/// # Errors
/// * Input directory cannot be listed
/// * Output file cannot be written
pub fn execute_aggregate(args: AggregateArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Aggregating reports in: {}", args.input_dir.display());

    // Step 1: Discover report files
    info!("Step 1/3: Discovering report files...");
    let files = discover_reports(&args.input_dir, &args.file_prefix)
        .context("Failed to list input directory")?;

    if files.is_empty() {
        warn!(
            "No files matching {}<run-index>{} found in {}",
            args.file_prefix,
            REPORT_FILE_EXTENSION,
            args.input_dir.display()
        );
        return Ok(());
    }

    debug!("Found {} report files", files.len());

    // Step 2: Parse and average each report
    info!("Step 2/3: Averaging {} reports...", files.len());
    let rows: Vec<ReportAverages> = files.iter().filter_map(|p| average_one_report(p)).collect();

    // Step 3: Write output
    info!("Step 3/3: Writing CSV output...");
    write_averages(&rows, &args.output_csv).context("Failed to write averages CSV")?;

    info!(
        "✓ Average statistics saved to: {}",
        args.output_csv.display()
    );

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Parse and average a single report, soft-failing to None
///
/// **Private** - internal helper for execute_aggregate
///
/// A parse failure and a zero-flow report both yield None (no output row);
/// they get distinct diagnostics.
fn average_one_report(path: &Path) -> Option<ReportAverages> {
    let report = match parse_report(path) {
        Ok(report) => report,
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            return None;
        }
    };

    let row = aggregate_report(&report.file_name, &report.flows);
    if row.is_none() {
        debug!("No flow records in {}, no row emitted", report.file_name);
    }
    row
}

/// List report files matching `<prefix><run-index>.xml` in the directory
///
/// **Private** - internal helper for execute_aggregate
///
/// Names are kept in directory-enumeration order; the run index is a
/// naming convention only and is never parsed or sorted on. Non-matching
/// entries are silently ignored.
fn discover_reports(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let pattern = Regex::new(&format!(
        r"^{}\d+{}$",
        regex::escape(prefix),
        regex::escape(REPORT_FILE_EXTENSION)
    ))
    .context("Invalid report name pattern")?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if pattern.is_match(name) {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    if !args.input_dir.exists() {
        anyhow::bail!(
            "Input directory does not exist: {}",
            args.input_dir.display()
        );
    }

    if !args.input_dir.is_dir() {
        anyhow::bail!(
            "Input path is not a directory: {}",
            args.input_dir.display()
        );
    }

    if args.file_prefix.is_empty() {
        anyhow::bail!("Report file prefix cannot be empty");
    }

    if args.output_csv.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_csv.is_dir() {
        anyhow::bail!(
            "Output path is a directory: {}",
            args.output_csv.display()
        );
    }

    Ok(())
}
