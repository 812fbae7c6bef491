use crate::aggregator::aggregate_report;
use crate::parser::parse_report;
use crate::utils::config::OUTPUT_COLUMNS;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Parse a single report file and print its averages
pub fn inspect_report_file(file_path: PathBuf, as_json: bool) -> Result<()> {
    println!("Inspecting report: {}", file_path.display());

    let report = parse_report(&file_path).context("Failed to parse report")?;

    let Some(row) = aggregate_report(&report.file_name, &report.flows) else {
        println!("Report contains no flow records");
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&row)?);
        return Ok(());
    }

    println!("✓ Valid FlowMonitor report");
    println!("  Flows:            {}", report.flows.len());
    println!("  Avg tx packets:   {}", row.avg_tx_packets);
    println!("  Avg rx packets:   {}", row.avg_rx_packets);
    println!("  Avg lost packets: {}", row.avg_lost_packets);
    println!("  Avg tx bytes:     {}", row.avg_tx_bytes);
    println!("  Avg rx bytes:     {}", row.avg_rx_bytes);
    println!("  Avg delay sum:    {}", row.avg_delay_sum);
    println!("  Avg jitter sum:   {}", row.avg_jitter_sum);
    println!("  Avg throughput:   {} Mbps", row.avg_throughput);

    Ok(())
}

/// Display output schema information
pub fn display_schema(show_details: bool) {
    println!("Flowmon Report CSV Schema");
    println!("Columns: {}", OUTPUT_COLUMNS.join(", "));
    println!();

    if show_details {
        println!("Column details:");
        println!("  file             - Base name of the source report file");
        println!("  avg_tx_packets   - Mean transmitted packets per flow");
        println!("  avg_rx_packets   - Mean received packets per flow");
        println!("  avg_lost_packets - Mean lost packets per flow");
        println!("  avg_tx_bytes     - Mean transmitted bytes per flow");
        println!("  avg_rx_bytes     - Mean received bytes per flow");
        println!("  avg_delay_sum    - Mean delay accumulator per flow (ns)");
        println!("  avg_jitter_sum   - Mean jitter accumulator per flow (ns)");
        println!("  avg_throughput   - Mean derived throughput per flow (Mbps)");
    } else {
        println!("Use --show for per-column details");
    }
}

/// Display version information
pub fn display_version() {
    println!("Flowmon Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Per-run averaging of ns-3 FlowMonitor XML reports into CSV.");
}
