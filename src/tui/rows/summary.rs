//! Shared row chrome: the collapsed summary line and the expanded detail block
//!
//! Both are stateless builders. The open flag and the key that flips it belong
//! to the app; these functions just render whichever state they are handed.

use ratatui::prelude::*;

use super::cells::map_rows;
use crate::record::AttrMap;

const OPEN_TOGGLE: &str = "▾";
const CLOSED_TOGGLE: &str = "▸";

const ATTRIBUTES_EMPTY: &str = "No attribute values";
const RESOURCE_EMPTY: &str = "No resource values";

fn heading_style() -> Style {
    Style::default().fg(Color::White).bold()
}

/// Collapsed summary line, left to right: toggle glyph, formatted display
/// timestamp, then the caller's record-specific summary spans.
pub fn summary_line(open: bool, timestamp: &str, summary: Vec<Span<'static>>) -> Line<'static> {
    let toggle = if open { OPEN_TOGGLE } else { CLOSED_TOGGLE };
    let mut spans = vec![
        Span::styled(format!(" {toggle} "), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{timestamp}  "), Style::default().fg(Color::Gray)),
    ];
    spans.extend(summary);
    Line::from(spans)
}

/// Expanded detail block: type heading, the caller's field-table rows, then
/// "Attributes" and "Resource" map sections with their fixed empty texts.
pub fn detail_block(
    heading: &'static str,
    fields: Vec<Line<'static>>,
    attributes: Option<&AttrMap>,
    resource: Option<&AttrMap>,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(format!("   {heading}"), heading_style()))];
    lines.extend(fields);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("   Attributes", heading_style())));
    lines.extend(map_rows(attributes, ATTRIBUTES_EMPTY));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("   Resource", heading_style())));
    lines.extend(map_rows(resource, RESOURCE_EMPTY));

    lines.push(Line::from(""));
    lines
}
