//! UI rendering for the snapshot console

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use super::views::console;

/// Main draw function - orchestrates all rendering
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, tab bar, content, footer
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Pipeline tabs
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Footer/status
    ])
    .split(area);

    draw_header(frame, app, main_layout[0]);
    draw_tab_bar(frame, app, main_layout[1]);
    console::draw(frame, app, main_layout[2]);
    draw_footer(frame, app, main_layout[3]);

    if app.show_help {
        draw_help_overlay(frame, area);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let refresh_indicator = if app.refresh_shown_at.is_some() {
        " [Updated]"
    } else {
        ""
    };

    let header_text = format!(
        " snapview │ {} │ [{} records]{}",
        app.snapshot_path().display(),
        app.total_records(),
        refresh_indicator
    );

    let header =
        Paragraph::new(header_text).style(Style::default().bg(Color::Blue).fg(Color::White).bold());

    frame.render_widget(header, area);
}

fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for pipeline in crate::record::PipelineType::ALL {
        let style = if pipeline == app.pipeline {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}]", pipeline.label()), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        format!("│ Showing recent {} ({})", app.pipeline.noun(), app.rows().len()),
        Style::default().fg(Color::Gray),
    ));

    let tab_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(tab_bar, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keybinds =
        "j/k:move  Enter:toggle detail  c:collapse all  Tab:switch type  r:reload  ?:help  q:quit";

    // Show status message if present, otherwise show keybinds
    let footer_text = if let Some((ref msg, _)) = app.status_message {
        msg.clone()
    } else {
        keybinds.to_string()
    };

    let footer = Paragraph::new(format!(" {}", footer_text))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(footer, area);
}

fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = 52.min(area.width.saturating_sub(4));
    let popup_height = 20.min(area.height.saturating_sub(4));

    let popup_area = Rect {
        x: (area.width - popup_width) / 2,
        y: (area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = r#"
  Snapshot Console
  ────────────────────────────────
  j/k, ↑/↓     Move up/down
  gg           Jump to top
  G            Jump to bottom
  Ctrl+d/u     Page down/up
  Enter, Space Toggle row detail
  Esc          Collapse selected row
  c            Collapse all rows
  Tab          Next telemetry type
  Shift+Tab    Previous telemetry type
  r            Reload snapshot
  q            Quit

  Press ? or Esc to close
"#;

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(help, popup_area);
}
