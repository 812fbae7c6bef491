//! CSV report writer.
//!
//! Writes ReportAverages rows to a comma-separated file with a fixed
//! header, one data row per processed report.

use crate::aggregator::ReportAverages;
use crate::utils::config::OUTPUT_COLUMNS;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::path::Path;

/// Write aggregate rows to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Arguments
/// * `rows` - Aggregate rows in the order they should appear
/// * `output_path` - Path to the output CSV file (overwritten if present)
///
/// # Returns
/// Ok if the file was written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::Csv` - row serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
///
/// The header row is always written, even when `rows` is empty, so a run
/// whose every report was skipped still produces a well-formed file.
pub fn write_averages(
    rows: &[ReportAverages],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing averages to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    // The header is written explicitly so that zero rows still yields a
    // header line; serialize() therefore runs with headers disabled.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Report written successfully ({} data rows)", rows.len());

    Ok(())
}

/// Read aggregate rows back from a CSV file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - file read error (reusing WriteFailed for I/O)
/// * `OutputError::Csv` - malformed CSV or mismatched columns
pub fn read_averages(input_path: impl AsRef<Path>) -> Result<Vec<ReportAverages>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading averages from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let mut reader = csv::Reader::from_reader(file);
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<ReportAverages>, csv::Error>>()?;

    debug!("Loaded {} rows", rows.len());

    Ok(rows)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
