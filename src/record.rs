//! Telemetry record model for the snapshot console
//!
//! A snapshot carries three kinds of records - logs, metrics, and trace spans -
//! selected by a pipeline-type discriminant. The discriminant is supplied by
//! the data source, never guessed from record shape. `TelemetryRecord` is the
//! tagged union that gives the row dispatcher a single exhaustive match point.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// String-keyed scalar metadata attached to a record.
///
/// serde_json is built with `preserve_order`, so iteration follows the order
/// the keys appeared on the wire. Display code relies on that.
pub type AttrMap = serde_json::Map<String, Value>;

/// Which telemetry schema a record conforms to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineType {
    Logs,
    Metrics,
    Traces,
}

impl PipelineType {
    pub const ALL: [PipelineType; 3] = [
        PipelineType::Logs,
        PipelineType::Metrics,
        PipelineType::Traces,
    ];

    /// Tab label shown in the console header.
    pub fn label(self) -> &'static str {
        match self {
            PipelineType::Logs => "Logs",
            PipelineType::Metrics => "Metrics",
            PipelineType::Traces => "Traces",
        }
    }

    /// Lowercase name used in status lines ("Showing recent logs").
    pub fn noun(self) -> &'static str {
        match self {
            PipelineType::Logs => "logs",
            PipelineType::Metrics => "metrics",
            PipelineType::Traces => "traces",
        }
    }

    /// Next pipeline in tab order, wrapping around.
    pub fn next(self) -> PipelineType {
        match self {
            PipelineType::Logs => PipelineType::Metrics,
            PipelineType::Metrics => PipelineType::Traces,
            PipelineType::Traces => PipelineType::Logs,
        }
    }

    /// Previous pipeline in tab order, wrapping around.
    pub fn prev(self) -> PipelineType {
        match self {
            PipelineType::Logs => PipelineType::Traces,
            PipelineType::Metrics => PipelineType::Logs,
            PipelineType::Traces => PipelineType::Metrics,
        }
    }
}

impl std::fmt::Display for PipelineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified severity bucket for a log record.
///
/// Drives chip coloring; distinct from the raw `severity` field value. Any
/// string outside the six recognized names (or a missing field) classifies as
/// `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Default,
}

impl Severity {
    /// Classify a raw severity field value. Exact lowercase match only.
    pub fn classify(raw: Option<&str>) -> Severity {
        match raw {
            Some("trace") => Severity::Trace,
            Some("debug") => Severity::Debug,
            Some("info") => Severity::Info,
            Some("warning") => Severity::Warning,
            Some("error") => Severity::Error,
            Some("fatal") => Severity::Fatal,
            _ => Severity::Default,
        }
    }

    /// Display label. Note this is what the detail table shows for the
    /// severity field - the raw string is not preserved for unrecognized
    /// values.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
            Severity::Default => "default",
        }
    }
}

/// A single log record from a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// ISO-8601 instant the log was emitted.
    pub timestamp: String,
    pub body: String,
    /// Raw severity field; classified for display via [`Severity::classify`].
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub attributes: Option<AttrMap>,
    #[serde(default)]
    pub resource: Option<AttrMap>,
}

/// A single metric data point from a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRecord {
    /// ISO-8601 instant the point was observed.
    pub timestamp: String,
    pub name: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub metric_type: String,
    pub unit: String,
    #[serde(default)]
    pub attributes: Option<AttrMap>,
    #[serde(default)]
    pub resource: Option<AttrMap>,
}

/// A single trace span from a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanRecord {
    /// ISO-8601 start instant.
    pub start: String,
    /// ISO-8601 end instant. This is the span's display timestamp; sorting
    /// and timestamp consistency across record types use end time.
    pub end: String,
    pub name: String,
    #[serde(rename = "spanID")]
    pub span_id: String,
    #[serde(rename = "parentSpanID", default)]
    pub parent_span_id: String,
    #[serde(rename = "traceID")]
    pub trace_id: String,
    #[serde(default)]
    pub attributes: Option<AttrMap>,
    #[serde(default)]
    pub resource: Option<AttrMap>,
}

/// Tagged union over the three record variants. Exactly one variant is active
/// per record; the tag comes from which snapshot list the record arrived in.
#[derive(Debug, Clone)]
pub enum TelemetryRecord {
    Log(LogRecord),
    Metric(MetricRecord),
    Span(SpanRecord),
}

impl TelemetryRecord {
    /// The pipeline type this record actually conforms to.
    pub fn pipeline_type(&self) -> PipelineType {
        match self {
            TelemetryRecord::Log(_) => PipelineType::Logs,
            TelemetryRecord::Metric(_) => PipelineType::Metrics,
            TelemetryRecord::Span(_) => PipelineType::Traces,
        }
    }
}

impl From<LogRecord> for TelemetryRecord {
    fn from(log: LogRecord) -> Self {
        TelemetryRecord::Log(log)
    }
}

impl From<MetricRecord> for TelemetryRecord {
    fn from(metric: MetricRecord) -> Self {
        TelemetryRecord::Metric(metric)
    }
}

impl From<SpanRecord> for TelemetryRecord {
    fn from(span: SpanRecord) -> Self {
        TelemetryRecord::Span(span)
    }
}
