//! Trace span row

use ratatui::prelude::*;

use super::cells::field_row;
use super::summary::{detail_block, summary_line};
use super::{name_chip, RowView};
use crate::record::SpanRecord;
use crate::timefmt::{format_display_date, span_duration, FormatConfig};

/// Render one span row. Summary is a name chip plus the computed duration;
/// the row's display timestamp is the span's end instant. The detail table
/// shows start/end as raw ISO text, then name and the three identifiers.
pub fn render(span: &SpanRecord, open: bool, config: &FormatConfig) -> RowView {
    let timestamp = format_display_date(&span.end, config);
    let duration = span_duration(&span.start, &span.end);

    let summary = summary_line(
        open,
        &timestamp,
        vec![
            name_chip(&span.name),
            Span::raw(" "),
            Span::styled(duration, Style::default().fg(Color::White)),
        ],
    );

    let detail = open.then(|| {
        let fields = vec![
            field_row("start", &span.start),
            field_row("end", &span.end),
            field_row("name", &span.name),
            field_row("id", &span.span_id),
            field_row("parent", &span.parent_span_id),
            field_row("trace", &span.trace_id),
        ];
        detail_block(
            "Span",
            fields,
            span.attributes.as_ref(),
            span.resource.as_ref(),
        )
    });

    RowView { summary, detail }
}
