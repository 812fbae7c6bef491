//! Parse-or-default combinators for optional flow attributes.
//!
//! Every numeric attribute on a `Flow` element is optional, and the
//! duration-valued ones carry an `ns` unit marker. Rather than suppressing
//! errors at the call sites, the degrade-to-zero policy lives here as two
//! explicit combinators: absent or malformed input yields zero, never an
//! error.

use crate::utils::config::TIME_UNIT_SUFFIX;

/// Parse a duration-valued attribute ("40320.5ns") into a float.
///
/// **Public** - used for delaySum, jitterSum, and the rx timestamps
///
/// Strips one trailing `ns` marker and surrounding whitespace, then parses
/// the remainder as `f64`. Returns `0.0` on absence, empty input, or any
/// parse failure.
pub fn parse_duration(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(TIME_UNIT_SUFFIX).unwrap_or(trimmed);

    trimmed.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parse an integer counter attribute (txPackets, rxBytes, ...) into a u64.
///
/// **Public** - used for the packet and byte counters
///
/// Symmetric with [`parse_duration`]: absent or malformed input yields `0`.
pub fn parse_counter(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(0)
}
