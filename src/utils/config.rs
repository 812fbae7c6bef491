//! Configuration and constants for the CLI.

/// Default file-name prefix identifying one experiment's report files.
/// A report name is `<prefix><run-index><extension>`, e.g.
/// `flowmon-data-sta-mloinf12.xml`.
pub const REPORT_FILE_PREFIX: &str = "flowmon-data-sta-mloinf";

/// Extension shared by all report files
pub const REPORT_FILE_EXTENSION: &str = ".xml";

// Element names in the FlowMonitor XML document
pub const FLOW_STATS_TAG: &str = "FlowStats";
pub const FLOW_TAG: &str = "Flow";

/// Unit marker carried by duration-valued attributes ("40320.5ns")
pub const TIME_UNIT_SUFFIX: &str = "ns";

/// Column names of the output CSV, in write order
pub const OUTPUT_COLUMNS: &[&str] = &[
    "file",
    "avg_tx_packets",
    "avg_rx_packets",
    "avg_lost_packets",
    "avg_tx_bytes",
    "avg_rx_bytes",
    "avg_delay_sum",
    "avg_jitter_sum",
    "avg_throughput",
];
