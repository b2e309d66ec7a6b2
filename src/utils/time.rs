//! Time normalisation for node-reported timestamps

use chrono::{TimeZone, Utc};

/// Unit a node response reports its `time` field in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Verbose transaction JSON
    Milliseconds,
    /// `getrawtransaction` results and block headers
    Seconds,
}

/// Normalise a node timestamp to whole seconds
///
/// # Examples
/// ```
/// use dcr_chain_adapter::utils::time::{normalize_time, TimeUnit};
/// assert_eq!(normalize_time(1535632670000, TimeUnit::Milliseconds), 1535632670);
/// assert_eq!(normalize_time(1535632670, TimeUnit::Seconds), 1535632670);
/// ```
pub fn normalize_time(value: i64, unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Milliseconds => value / 1000,
        TimeUnit::Seconds => value,
    }
}

/// Convert Unix timestamp to an RFC 3339 UTC string
///
/// Returns "1970-01-01T00:00:00Z" for invalid timestamps.
pub fn timestamp_to_rfc3339(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
}
