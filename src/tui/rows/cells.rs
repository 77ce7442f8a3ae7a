//! Detail-table cells and the key/value map renderer

use ratatui::prelude::*;
use serde_json::Value;

use crate::record::AttrMap;

/// Label column width in detail tables. Longer labels overflow rather than
/// truncate.
const LABEL_WIDTH: usize = 24;

/// Indentation for detail content under a row.
const DETAIL_INDENT: &str = "    ";

fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn value_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn empty_style() -> Style {
    Style::default().fg(Color::DarkGray).italic()
}

/// Textual representation of a map value. Strings display verbatim; numbers,
/// booleans, arrays, and objects display via their JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One label/value row of a detail table.
pub fn field_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{DETAIL_INDENT}{label:<width$}", width = LABEL_WIDTH),
            label_style(),
        ),
        Span::styled(value.to_string(), value_style()),
    ])
}

/// A label/value row whose value keeps literal newlines: the first value line
/// sits next to the label, the rest continue under it in the value column.
pub fn multiline_field_rows(label: &str, value: &str) -> Vec<Line<'static>> {
    let mut value_lines = value.lines();
    let first = value_lines.next().unwrap_or("");
    let mut rows = vec![field_row(label, first)];
    for continuation in value_lines {
        rows.push(field_row("", continuation));
    }
    rows
}

/// Render a string-keyed map as label/value rows in insertion order, or a
/// single muted line with `empty_message` when the map is absent or empty.
/// No truncation, sorting, or filtering.
pub fn map_rows(value: Option<&AttrMap>, empty_message: &str) -> Vec<Line<'static>> {
    match value {
        Some(map) if !map.is_empty() => map
            .iter()
            .map(|(key, value)| field_row(key, &value_text(value)))
            .collect(),
        _ => vec![Line::from(Span::styled(
            format!("{DETAIL_INDENT}{empty_message}"),
            empty_style(),
        ))],
    }
}
