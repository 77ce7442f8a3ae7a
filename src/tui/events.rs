//! Event handling for the snapshot console
//!
//! Vim-style keybindings over a single list view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Handle a key event, returns true if app should quit
pub fn handle_event(app: &mut App, key: KeyEvent) -> bool {
    // Help overlay swallows everything except its close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return false;
    }

    // 'g' prefix: gg jumps to top
    if app.pending_g {
        app.pending_g = false;
        if key.code == KeyCode::Char('g') {
            app.jump_to_top();
        }
        return false;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => return true,

        // Help
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => {
            app.pending_g = true;
        }
        KeyCode::Char('G') => app.jump_to_bottom(),

        // Page navigation
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => app.page_down(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),

        // Toggle the selected row's detail panel
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),

        // Collapse every open row in this tab
        KeyCode::Char('c') => app.collapse_all(),

        // Switch telemetry tab
        KeyCode::Tab => app.next_pipeline(),
        KeyCode::BackTab => app.prev_pipeline(),

        // Reload the snapshot file
        KeyCode::Char('r') => {
            if let Err(e) = app.reload() {
                app.set_status(format!("Reload failed: {}", e));
            } else {
                app.show_refresh_indicator();
            }
        }

        // Escape collapses the selected row if open
        KeyCode::Esc => {
            app.collapse_selected();
        }

        _ => {}
    }
    false
}
