//! Log record row

use ratatui::prelude::*;

use super::cells::{field_row, multiline_field_rows};
use super::summary::{detail_block, summary_line};
use super::{severity_chip, RowView};
use crate::record::{LogRecord, Severity};
use crate::timefmt::{format_display_date, FormatConfig};

/// Render one log row. Summary is severity chip + body; the detail table is
/// timestamp, body (whitespace preserved), severity. The severity field shows
/// the classified category, so an unrecognized raw value reads "default".
pub fn render(log: &LogRecord, open: bool, config: &FormatConfig) -> RowView {
    let severity = Severity::classify(log.severity.as_deref());
    let timestamp = format_display_date(&log.timestamp, config);

    let summary = summary_line(
        open,
        &timestamp,
        vec![
            severity_chip(severity),
            Span::raw(" "),
            Span::styled(log.body.clone(), Style::default().fg(Color::White)),
        ],
    );

    let detail = open.then(|| {
        let mut fields = vec![field_row("timestamp", &timestamp)];
        fields.extend(multiline_field_rows("body", &log.body));
        fields.push(field_row("severity", severity.label()));
        detail_block("Log", fields, log.attributes.as_ref(), log.resource.as_ref())
    });

    RowView { summary, detail }
}
