//! Flowmon Report CLI
//!
//! Averages the per-flow counters of ns-3 FlowMonitor XML reports
//! into one CSV row per simulation run.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use flowmon_report::commands::{
    display_schema, display_version, execute_aggregate, inspect_report_file, validate_args,
    AggregateArgs,
};
use flowmon_report::utils::config::REPORT_FILE_PREFIX;

/// Flowmon Report - per-run flow statistics averaging
#[derive(Parser, Debug)]
#[command(name = "flowmon-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Average every report in a directory into one CSV file
    Aggregate {
        /// Directory containing the simulation report files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output path for the averages CSV
        #[arg(short, long, default_value = "averages.csv")]
        output: PathBuf,

        /// Report file name prefix (a report is <prefix><run-index>.xml)
        #[arg(long, default_value = REPORT_FILE_PREFIX)]
        prefix: String,
    },

    /// Parse a single report and print its averages
    Inspect {
        /// Path to a FlowMonitor XML report
        #[arg(short, long)]
        file: PathBuf,

        /// Print the averages as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display output schema information
    Schema {
        /// Show per-column details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Aggregate {
            dir,
            output,
            prefix,
        } => {
            let args = AggregateArgs {
                input_dir: dir,
                output_csv: output,
                file_prefix: prefix,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute aggregation
            execute_aggregate(args)?;
        }

        Commands::Inspect { file, json } => {
            inspect_report_file(file, json)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
