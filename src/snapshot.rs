//! Snapshot loading - the data-source boundary
//!
//! A snapshot file is a JSON object with `logs`, `metrics`, and `traces`
//! lists. Records are validated here, once, when the file is read; a record
//! missing a required field fails the whole load rather than reaching a row
//! renderer half-formed. Lists are reversed on load so the newest records
//! come first in the console.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::record::{LogRecord, MetricRecord, PipelineType, SpanRecord, TelemetryRecord};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Wire shape of a snapshot file. A snapshot request names one pipeline type,
/// so usually only one of the three lists is populated.
#[derive(Debug, Default, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    logs: Vec<LogRecord>,
    #[serde(default)]
    metrics: Vec<MetricRecord>,
    #[serde(default)]
    traces: Vec<SpanRecord>,
}

/// Validated, display-ordered snapshot contents.
#[derive(Debug, Default)]
pub struct Snapshot {
    logs: Vec<TelemetryRecord>,
    metrics: Vec<TelemetryRecord>,
    traces: Vec<TelemetryRecord>,
}

impl Snapshot {
    /// Read and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Snapshot, SnapshotError> {
        let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Snapshot::from_json(&contents).map_err(|source| SnapshotError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse snapshot JSON. Newest records end up first in each list.
    pub fn from_json(contents: &str) -> Result<Snapshot, serde_json::Error> {
        let raw: RawSnapshot = serde_json::from_str(contents)?;
        Ok(Snapshot {
            logs: newest_first(raw.logs),
            metrics: newest_first(raw.metrics),
            traces: newest_first(raw.traces),
        })
    }

    /// Records for one pipeline tab, newest first.
    pub fn rows(&self, pipeline: PipelineType) -> &[TelemetryRecord] {
        match pipeline {
            PipelineType::Logs => &self.logs,
            PipelineType::Metrics => &self.metrics,
            PipelineType::Traces => &self.traces,
        }
    }

    /// Total record count across all three lists.
    pub fn total(&self) -> usize {
        self.logs.len() + self.metrics.len() + self.traces.len()
    }
}

fn newest_first<R: Into<TelemetryRecord>>(records: Vec<R>) -> Vec<TelemetryRecord> {
    records.into_iter().rev().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timefmt::display_timestamp;

    const FIXTURE: &str = r#"{
        "logs": [
            {"timestamp": "2024-05-01T10:00:00Z", "body": "first", "severity": "info"},
            {"timestamp": "2024-05-01T10:00:05Z", "body": "second", "severity": "error"}
        ],
        "metrics": [],
        "traces": [
            {
                "start": "2024-05-01T10:00:00Z",
                "end": "2024-05-01T10:00:01Z",
                "name": "GET /",
                "spanID": "s1",
                "parentSpanID": "",
                "traceID": "t1"
            }
        ]
    }"#;

    #[test]
    fn test_load_reverses_to_newest_first() {
        let snapshot = Snapshot::from_json(FIXTURE).unwrap();
        let logs = snapshot.rows(PipelineType::Logs);
        assert_eq!(logs.len(), 2);
        assert_eq!(display_timestamp(&logs[0]), "2024-05-01T10:00:05Z");
        assert_eq!(display_timestamp(&logs[1]), "2024-05-01T10:00:00Z");
    }

    #[test]
    fn test_missing_lists_default_empty() {
        let snapshot = Snapshot::from_json(r#"{"logs": []}"#).unwrap();
        assert_eq!(snapshot.total(), 0);
        assert!(snapshot.rows(PipelineType::Traces).is_empty());
    }

    #[test]
    fn test_malformed_record_fails_fast() {
        // A trace without start/end must not reach a renderer.
        let bad = r#"{"traces": [{"name": "orphan", "spanID": "s", "traceID": "t"}]}"#;
        assert!(Snapshot::from_json(bad).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Snapshot::load(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_total_counts_all_pipelines() {
        let snapshot = Snapshot::from_json(FIXTURE).unwrap();
        assert_eq!(snapshot.total(), 3);
        assert_eq!(snapshot.rows(PipelineType::Metrics).len(), 0);
        assert_eq!(snapshot.rows(PipelineType::Traces).len(), 1);
    }
}
