//! Console view - the scrollable list of snapshot rows

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::tui::app::App;
use crate::tui::rows::{placeholder_row, render_row};

/// Draw the row list for the active pipeline tab.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Snapshot Console ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if app.rows().is_empty() {
        let empty = Paragraph::new(format!("No recent {}", app.pipeline.noun()))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner_area);
        return;
    }

    let layout =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner_area);

    // Column header line, mirroring the toggle/timestamp/summary order
    let header = Paragraph::new("   Time                 Message")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(header, layout[0]);

    let selected = app.selected_index();
    let items: Vec<ListItem> = app
        .rows()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let view = render_row(record, app.pipeline, app.is_open(index), &app.format)
                .unwrap_or_else(|err| placeholder_row(&err));

            let style = if index == selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Text::from(view.into_lines())).style(style)
        })
        .collect();

    let list = List::new(items);

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, layout[1], &mut state);
}
