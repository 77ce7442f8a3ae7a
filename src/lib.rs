//! Snapview - a terminal snapshot console for telemetry records
//!
//! Browse a snapshot of recent pipeline telemetry - logs, metrics, and trace
//! spans - as a scrollable list of rows, each with an expandable detail panel
//! showing the full field table plus attribute and resource metadata.
//!
//! # Record Types
//!
//! | Type | Collapsed summary | Listed under |
//! |------|-------------------|--------------|
//! | log | severity chip + body | `timestamp` |
//! | metric | name chip + value and unit | `timestamp` |
//! | span | name chip + duration | `end` |
//!
//! # Quick Start
//!
//! ```
//! use snapview::record::PipelineType;
//! use snapview::snapshot::Snapshot;
//! use snapview::timefmt::FormatConfig;
//!
//! let snapshot = Snapshot::from_json(
//!     r#"{"logs": [{"timestamp": "2024-05-01T10:00:00Z", "body": "ready", "severity": "info"}]}"#,
//! ).unwrap();
//!
//! let mut out = Vec::new();
//! snapview::dump::write_rows(
//!     &mut out,
//!     &snapshot,
//!     PipelineType::Logs,
//!     true,
//!     &FormatConfig::utc(),
//! ).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("ready"));
//! ```

pub mod config;
pub mod dump;
pub mod record;
pub mod snapshot;
pub mod timefmt;
pub mod tui;

pub use config::Config;
pub use record::{
    AttrMap, LogRecord, MetricRecord, PipelineType, Severity, SpanRecord, TelemetryRecord,
};
pub use snapshot::{Snapshot, SnapshotError};
pub use timefmt::{display_timestamp, format_display_date, span_duration, FormatConfig, TzSpec};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify core types are re-exported from crate root
        let _ = PipelineType::Logs;
        let _ = Severity::Default;
    }
}
