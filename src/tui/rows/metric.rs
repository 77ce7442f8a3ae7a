//! Metric record row

use ratatui::prelude::*;

use super::cells::field_row;
use super::summary::{detail_block, summary_line};
use super::{name_chip, RowView};
use crate::record::MetricRecord;
use crate::timefmt::{format_display_date, FormatConfig};

/// Render one metric row. Summary is a name chip plus `"<value> <unit>"`;
/// the detail table is timestamp, name, value, type, unit.
pub fn render(metric: &MetricRecord, open: bool, config: &FormatConfig) -> RowView {
    let timestamp = format_display_date(&metric.timestamp, config);

    let summary = summary_line(
        open,
        &timestamp,
        vec![
            name_chip(&metric.name),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", metric.value, metric.unit),
                Style::default().fg(Color::White),
            ),
        ],
    );

    let detail = open.then(|| {
        let fields = vec![
            field_row("timestamp", &timestamp),
            field_row("name", &metric.name),
            field_row("value", &metric.value.to_string()),
            field_row("type", &metric.metric_type),
            field_row("unit", &metric.unit),
        ];
        detail_block(
            "Metric",
            fields,
            metric.attributes.as_ref(),
            metric.resource.as_ref(),
        )
    });

    RowView { summary, detail }
}
