//! FlowMonitor report parser.
//!
//! Parses the XML report a simulation run writes into structured flow
//! records. A report's root element holds a `FlowStats` container whose
//! `Flow` children carry all counters as attributes.

use super::fields::{parse_counter, parse_duration};
use crate::utils::config::{FLOW_STATS_TAG, FLOW_TAG};
use crate::utils::error::ParseError;
use log::debug;
use std::fs;
use std::path::Path;

/// Counters for one tracked traffic stream within a simulation run
///
/// All fields default to zero when the corresponding attribute is absent
/// or malformed; see [`super::fields`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowRecord {
    pub tx_packets: u64,
    pub rx_packets: u64,
    pub lost_packets: u64,
    pub tx_bytes: u64,
    pub rx_bytes: u64,
    pub delay_sum: f64,
    pub jitter_sum: f64,
    pub time_first_rx_packet: f64,
    pub time_last_rx_packet: f64,
}

impl FlowRecord {
    /// Derived throughput in megabits per second.
    ///
    /// **Public** - fed into the per-report average
    ///
    /// Received bytes converted to bits, divided by the flow's observed
    /// active duration. A non-positive duration (e.g. a flow that never
    /// received a packet, where both timestamps defaulted to zero) yields
    /// `0.0` rather than a division blow-up.
    pub fn throughput_mbps(&self) -> f64 {
        let duration = self.time_last_rx_packet - self.time_first_rx_packet;
        if duration > 0.0 {
            (self.rx_bytes as f64 * 8.0) / duration / 1e6
        } else {
            0.0
        }
    }
}

/// One parsed report file: base name plus its flows in document order
#[derive(Debug, Clone)]
pub struct FlowReport {
    /// Base file name, no directory component
    pub file_name: String,

    /// Flow records in document order
    pub flows: Vec<FlowRecord>,
}

/// Parse a report file into flow records
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Path to a FlowMonitor XML report
///
/// # Returns
/// The parsed report; a valid report with zero flows is Ok with an empty
/// flow list, not an error.
///
/// # Errors
/// * `ParseError::Io` - file missing or unreadable
/// * `ParseError::Xml` - malformed XML document
/// * `ParseError::MissingFlowStats` - no `FlowStats` container under the root
pub fn parse_report(path: impl AsRef<Path>) -> Result<FlowReport, ParseError> {
    let path = path.as_ref();
    debug!("Parsing report: {}", path.display());

    let text = fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_report_str(&text, file_name)
}

/// Parse report XML already held in memory
///
/// **Public** - used by `parse_report` and by tests that build documents
/// inline
pub fn parse_report_str(xml: &str, file_name: String) -> Result<FlowReport, ParseError> {
    let doc = roxmltree::Document::parse(xml)?;

    let flow_stats = doc
        .root_element()
        .children()
        .find(|node| node.has_tag_name(FLOW_STATS_TAG))
        .ok_or(ParseError::MissingFlowStats)?;

    let flows: Vec<FlowRecord> = flow_stats
        .children()
        .filter(|node| node.has_tag_name(FLOW_TAG))
        .map(parse_flow)
        .collect();

    debug!("Parsed {} flows from {}", flows.len(), file_name);

    Ok(FlowReport { file_name, flows })
}

/// Build one FlowRecord from a `Flow` element's attributes
///
/// **Private** - internal helper for parse_report_str
fn parse_flow(node: roxmltree::Node) -> FlowRecord {
    FlowRecord {
        tx_packets: parse_counter(node.attribute("txPackets")),
        rx_packets: parse_counter(node.attribute("rxPackets")),
        lost_packets: parse_counter(node.attribute("lostPackets")),
        tx_bytes: parse_counter(node.attribute("txBytes")),
        rx_bytes: parse_counter(node.attribute("rxBytes")),
        delay_sum: parse_duration(node.attribute("delaySum")),
        jitter_sum: parse_duration(node.attribute("jitterSum")),
        time_first_rx_packet: parse_duration(node.attribute("timeFirstRxPacket")),
        time_last_rx_packet: parse_duration(node.attribute("timeLastRxPacket")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_REPORT: &str = r#"<?xml version="1.0" ?>
<FlowMonitor>
  <FlowStats>
    <Flow flowId="1" txPackets="100" rxPackets="95" lostPackets="5"
          txBytes="150000" rxBytes="142500"
          delaySum="4750.5ns" jitterSum="120.25ns"
          timeFirstRxPacket="1000000ns" timeLastRxPacket="2000000ns" />
    <Flow flowId="2" txPackets="50" rxPackets="50" lostPackets="0"
          txBytes="75000" rxBytes="75000"
          delaySum="2000ns" jitterSum="80ns"
          timeFirstRxPacket="1500000ns" timeLastRxPacket="1900000ns" />
  </FlowStats>
  <FlowClassifier />
</FlowMonitor>"#;

    #[test]
    fn test_parse_full_report() {
        let report = parse_report_str(FULL_REPORT, "run1.xml".to_string()).unwrap();

        assert_eq!(report.file_name, "run1.xml");
        assert_eq!(report.flows.len(), 2);

        let first = &report.flows[0];
        assert_eq!(first.tx_packets, 100);
        assert_eq!(first.rx_packets, 95);
        assert_eq!(first.lost_packets, 5);
        assert_eq!(first.tx_bytes, 150_000);
        assert_eq!(first.rx_bytes, 142_500);
        assert_eq!(first.delay_sum, 4750.5);
        assert_eq!(first.jitter_sum, 120.25);
        assert_eq!(first.time_first_rx_packet, 1_000_000.0);
        assert_eq!(first.time_last_rx_packet, 2_000_000.0);
    }

    #[test]
    fn test_missing_attributes_default_to_zero() {
        let xml = r#"<FlowMonitor><FlowStats><Flow flowId="1" txPackets="10"/></FlowStats></FlowMonitor>"#;
        let report = parse_report_str(xml, "sparse.xml".to_string()).unwrap();

        assert_eq!(report.flows.len(), 1);
        let flow = &report.flows[0];
        assert_eq!(flow.tx_packets, 10);
        assert_eq!(flow.rx_packets, 0);
        assert_eq!(flow.delay_sum, 0.0);
        assert_eq!(flow.time_last_rx_packet, 0.0);
    }

    #[test]
    fn test_empty_flow_stats_is_ok() {
        let xml = "<FlowMonitor><FlowStats></FlowStats></FlowMonitor>";
        let report = parse_report_str(xml, "empty.xml".to_string()).unwrap();
        assert!(report.flows.is_empty());
    }

    #[test]
    fn test_missing_flow_stats_container() {
        let xml = "<FlowMonitor><FlowClassifier/></FlowMonitor>";
        let result = parse_report_str(xml, "bad.xml".to_string());
        assert!(matches!(result, Err(ParseError::MissingFlowStats)));
    }

    #[test]
    fn test_malformed_document() {
        let result = parse_report_str("<FlowMonitor><FlowSta", "truncated.xml".to_string());
        assert!(matches!(result, Err(ParseError::Xml(_))));
    }

    #[test]
    fn test_throughput_zero_duration() {
        let flow = FlowRecord {
            rx_bytes: 10_000,
            ..Default::default()
        };
        assert_eq!(flow.throughput_mbps(), 0.0);
    }

    #[test]
    fn test_throughput_positive_duration() {
        let flow = FlowRecord {
            rx_bytes: 1_000_000,
            time_first_rx_packet: 0.0,
            time_last_rx_packet: 8.0,
            ..Default::default()
        };
        // 1e6 bytes * 8 bits / 8 / 1e6 = 1.0
        assert_eq!(flow.throughput_mbps(), 1.0);
    }
}
