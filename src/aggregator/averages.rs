//! Per-report averaging of flow counters.
//!
//! Reduces one report's flow records to a single row of arithmetic means.
//! The reduction is a pure fold over the flow slice; no aggregate state
//! survives past the returned row.

use crate::parser::FlowRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// One output row: the per-report mean of every flow metric
///
/// **Public** - the unit of CSV output
///
/// Field names double as the CSV column names, so they must stay in sync
/// with `utils::config::OUTPUT_COLUMNS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAverages {
    /// Base name of the report file this row was computed from
    pub file: String,

    pub avg_tx_packets: f64,
    pub avg_rx_packets: f64,
    pub avg_lost_packets: f64,
    pub avg_tx_bytes: f64,
    pub avg_rx_bytes: f64,
    pub avg_delay_sum: f64,
    pub avg_jitter_sum: f64,
    pub avg_throughput: f64,
}

/// Running sums accumulated while folding over a report's flows
#[derive(Debug, Clone, Copy, Default)]
struct FlowTotals {
    tx_packets: u64,
    rx_packets: u64,
    lost_packets: u64,
    tx_bytes: u64,
    rx_bytes: u64,
    delay_sum: f64,
    jitter_sum: f64,
    throughput: f64,
}

impl FlowTotals {
    fn add(mut self, flow: &FlowRecord) -> Self {
        self.tx_packets += flow.tx_packets;
        self.rx_packets += flow.rx_packets;
        self.lost_packets += flow.lost_packets;
        self.tx_bytes += flow.tx_bytes;
        self.rx_bytes += flow.rx_bytes;
        self.delay_sum += flow.delay_sum;
        self.jitter_sum += flow.jitter_sum;
        self.throughput += flow.throughput_mbps();
        self
    }
}

/// Compute the mean of every counter across one report's flows
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `file_name` - base name of the source report, copied into the row
/// * `flows` - that report's flow records
///
/// # Returns
/// `None` for a report with zero flows (no row is emitted for it),
/// otherwise the row of means. Each mean uses this report's own flow
/// count as denominator.
pub fn aggregate_report(file_name: &str, flows: &[FlowRecord]) -> Option<ReportAverages> {
    if flows.is_empty() {
        return None;
    }

    let totals = flows.iter().fold(FlowTotals::default(), FlowTotals::add);
    let count = flows.len() as f64;

    debug!("Averaging {} flows for {}", flows.len(), file_name);

    Some(ReportAverages {
        file: file_name.to_string(),
        avg_tx_packets: totals.tx_packets as f64 / count,
        avg_rx_packets: totals.rx_packets as f64 / count,
        avg_lost_packets: totals.lost_packets as f64 / count,
        avg_tx_bytes: totals.tx_bytes as f64 / count,
        avg_rx_bytes: totals.rx_bytes as f64 / count,
        avg_delay_sum: totals.delay_sum / count,
        avg_jitter_sum: totals.jitter_sum / count,
        avg_throughput: totals.throughput / count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flow(tx: u64, rx: u64, delay: f64) -> FlowRecord {
        FlowRecord {
            tx_packets: tx,
            rx_packets: rx,
            lost_packets: tx - rx,
            tx_bytes: tx * 1500,
            rx_bytes: rx * 1500,
            delay_sum: delay,
            jitter_sum: delay / 10.0,
            time_first_rx_packet: 0.0,
            time_last_rx_packet: 0.0,
        }
    }

    #[test]
    fn test_aggregate_means_exact() {
        let flows = vec![flow(100, 90, 500.0), flow(50, 50, 300.0)];
        let row = aggregate_report("run1.xml", &flows).unwrap();

        assert_eq!(row.file, "run1.xml");
        assert_eq!(row.avg_tx_packets, 75.0);
        assert_eq!(row.avg_rx_packets, 70.0);
        assert_eq!(row.avg_lost_packets, 5.0);
        assert_eq!(row.avg_tx_bytes, 112_500.0);
        assert_eq!(row.avg_rx_bytes, 105_000.0);
        assert_eq!(row.avg_delay_sum, 400.0);
        assert_eq!(row.avg_jitter_sum, 40.0);
    }

    #[test]
    fn test_aggregate_single_flow_is_identity() {
        let flows = vec![flow(10, 10, 120.0)];
        let row = aggregate_report("solo.xml", &flows).unwrap();

        assert_eq!(row.avg_tx_packets, 10.0);
        assert_eq!(row.avg_delay_sum, 120.0);
    }

    #[test]
    fn test_aggregate_empty_report() {
        assert!(aggregate_report("empty.xml", &[]).is_none());
    }

    #[test]
    fn test_zero_duration_flow_contributes_zero_throughput() {
        // rx_bytes > 0 but both timestamps equal: throughput must be 0,
        // not a division error
        let flows = vec![FlowRecord {
            rx_bytes: 10_000,
            time_first_rx_packet: 5.0,
            time_last_rx_packet: 5.0,
            ..Default::default()
        }];
        let row = aggregate_report("stalled.xml", &flows).unwrap();
        assert_eq!(row.avg_throughput, 0.0);
    }

    #[test]
    fn test_throughput_mixes_active_and_stalled_flows() {
        let active = FlowRecord {
            rx_bytes: 1_000_000,
            time_first_rx_packet: 0.0,
            time_last_rx_packet: 8.0,
            ..Default::default()
        };
        let stalled = FlowRecord {
            rx_bytes: 999,
            ..Default::default()
        };
        let row = aggregate_report("mixed.xml", &[active, stalled]).unwrap();
        // (1.0 + 0.0) / 2
        assert_eq!(row.avg_throughput, 0.5);
    }
}
