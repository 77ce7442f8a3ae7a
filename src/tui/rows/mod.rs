//! Console row rendering
//!
//! Each telemetry record renders as a [`RowView`]: a one-line collapsed
//! summary plus, only while the row is open, an expanded detail block. The
//! pipeline-type tag selects which renderer runs; [`render_row`] is the single
//! match point over record variants, so a mislabeled record is an error here
//! rather than a silently skipped row.

pub mod cells;
pub mod log;
pub mod metric;
pub mod span;
pub mod summary;

use ratatui::prelude::*;
use thiserror::Error;

use crate::record::{PipelineType, Severity, TelemetryRecord};
use crate::timefmt::FormatConfig;

/// A rendered row: collapsed summary line and, while open, the detail lines.
/// `detail` is `None` for a closed row - detail content is only constructed
/// on open and dropped again on collapse.
#[derive(Debug, Clone)]
pub struct RowView {
    pub summary: Line<'static>,
    pub detail: Option<Vec<Line<'static>>>,
}

impl RowView {
    /// Total rendered height in terminal lines.
    pub fn height(&self) -> usize {
        1 + self.detail.as_ref().map_or(0, Vec::len)
    }

    /// Flatten into the lines the console draws.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = vec![self.summary];
        if let Some(detail) = self.detail {
            lines.extend(detail);
        }
        lines
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    /// The record's variant does not match the pipeline tab it was rendered
    /// under. Reported and rendered as a placeholder row, never coerced.
    #[error("record is {record} but was labeled {pipeline}")]
    PipelineMismatch {
        pipeline: PipelineType,
        record: PipelineType,
    },
}

/// Render a record under a pipeline-type tag.
pub fn render_row(
    record: &TelemetryRecord,
    pipeline: PipelineType,
    open: bool,
    config: &FormatConfig,
) -> Result<RowView, RowError> {
    match (pipeline, record) {
        (PipelineType::Logs, TelemetryRecord::Log(log)) => Ok(log::render(log, open, config)),
        (PipelineType::Metrics, TelemetryRecord::Metric(metric)) => {
            Ok(metric::render(metric, open, config))
        }
        (PipelineType::Traces, TelemetryRecord::Span(span)) => Ok(span::render(span, open, config)),
        (pipeline, record) => Err(RowError::PipelineMismatch {
            pipeline,
            record: record.pipeline_type(),
        }),
    }
}

/// Visible stand-in for a record that failed to dispatch.
pub fn placeholder_row(error: &RowError) -> RowView {
    RowView {
        summary: Line::from(Span::styled(
            format!(" ! {error}"),
            Style::default().fg(Color::Red).bold(),
        )),
        detail: None,
    }
}

/// Chip color for a severity category.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Trace => Color::Magenta,
        Severity::Debug => Color::Blue,
        Severity::Info => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Fatal => Color::LightRed,
        Severity::Default => Color::Gray,
    }
}

/// Severity chip for a log summary line.
pub fn severity_chip(severity: Severity) -> Span<'static> {
    Span::styled(
        format!(" {} ", severity.label()),
        Style::default()
            .fg(Color::Black)
            .bg(severity_color(severity))
            .bold(),
    )
}

/// Neutral name chip for metric and span summary lines.
pub fn name_chip(name: &str) -> Span<'static> {
    Span::styled(
        format!(" {name} "),
        Style::default().fg(Color::Black).bg(Color::Gray),
    )
}

/// Concatenated text content of a line, ignoring styling. Used by the
/// non-interactive `dump` renderer and by tests.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Text of a block of lines joined with newlines.
#[cfg(test)]
pub(crate) fn lines_text(lines: &[Line<'_>]) -> String {
    lines.iter().map(line_text).collect::<Vec<_>>().join("\n")
}
