//! Application state for the snapshot console

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};

use super::state;
use crate::record::{PipelineType, TelemetryRecord};
use crate::snapshot::{Snapshot, SnapshotError};
use crate::timefmt::FormatConfig;

/// Per-pipeline-tab view state. Each tab keeps its own selection and open
/// rows, so switching tabs and back loses nothing; open state only resets
/// when the snapshot itself is reloaded.
#[derive(Debug, Default)]
struct TabState {
    selected: usize,
    open: HashSet<usize>,
}

/// Main application state
pub struct App {
    snapshot_path: PathBuf,
    snapshot: Snapshot,

    // Which telemetry tab is showing
    pub pipeline: PipelineType,
    tabs: [TabState; 3],

    pub format: FormatConfig,

    // UI state
    pub show_help: bool,
    pub viewport_width: u16,
    pub viewport_height: u16,

    // Refresh indicator
    pub refresh_shown_at: Option<Instant>,

    // Vim-style 'g' prefix tracking
    pub pending_g: bool,

    // Status message
    pub status_message: Option<(String, Instant)>,
}

fn tab_index(pipeline: PipelineType) -> usize {
    match pipeline {
        PipelineType::Logs => 0,
        PipelineType::Metrics => 1,
        PipelineType::Traces => 2,
    }
}

impl App {
    pub fn new(
        snapshot_path: PathBuf,
        pipeline: PipelineType,
        format: FormatConfig,
    ) -> Result<Self, SnapshotError> {
        let snapshot = Snapshot::load(&snapshot_path)?;
        Ok(Self {
            snapshot_path,
            snapshot,
            pipeline,
            tabs: Default::default(),
            format,
            show_help: false,
            viewport_width: 80,
            viewport_height: 24,
            refresh_shown_at: None,
            pending_g: false,
            status_message: None,
        })
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Records for the active tab, newest first.
    pub fn rows(&self) -> &[TelemetryRecord] {
        self.snapshot.rows(self.pipeline)
    }

    pub fn total_records(&self) -> usize {
        self.snapshot.total()
    }

    /// Reload the snapshot from disk. Every row is a fresh instance after a
    /// reload, so all open state resets to closed and selections re-clamp.
    pub fn reload(&mut self) -> Result<(), SnapshotError> {
        self.snapshot = Snapshot::load(&self.snapshot_path)?;
        for pipeline in PipelineType::ALL {
            let len = self.snapshot.rows(pipeline).len();
            let tab = &mut self.tabs[tab_index(pipeline)];
            tab.open.clear();
            tab.selected = state::clamp_selection(tab.selected, len);
        }
        Ok(())
    }

    /// Show the refresh indicator
    pub fn show_refresh_indicator(&mut self) {
        self.refresh_shown_at = Some(Instant::now());
    }

    /// Periodic tick for transient indicators
    pub fn tick(&mut self) {
        if let Some(shown_at) = self.refresh_shown_at {
            if shown_at.elapsed().as_secs() >= 2 {
                self.refresh_shown_at = None;
            }
        }

        if let Some((_, shown_at)) = &self.status_message {
            if shown_at.elapsed().as_secs() >= 3 {
                self.status_message = None;
            }
        }
    }

    fn tab(&self) -> &TabState {
        &self.tabs[tab_index(self.pipeline)]
    }

    fn tab_mut(&mut self) -> &mut TabState {
        &mut self.tabs[tab_index(self.pipeline)]
    }

    pub fn selected_index(&self) -> usize {
        self.tab().selected
    }

    /// Whether the row at `index` in the active tab is expanded.
    pub fn is_open(&self, index: usize) -> bool {
        self.tab().open.contains(&index)
    }

    /// Flip the selected row between open and closed.
    pub fn toggle_selected(&mut self) {
        if self.rows().is_empty() {
            return;
        }
        let selected = self.tab().selected;
        let tab = self.tab_mut();
        if !tab.open.remove(&selected) {
            tab.open.insert(selected);
        }
    }

    /// Collapse the selected row; returns false if it was already closed.
    pub fn collapse_selected(&mut self) -> bool {
        let selected = self.tab().selected;
        self.tab_mut().open.remove(&selected)
    }

    /// Collapse every row in the active tab.
    pub fn collapse_all(&mut self) {
        self.tab_mut().open.clear();
    }

    // Navigation methods
    pub fn move_up(&mut self) {
        let tab = self.tab_mut();
        tab.selected = state::move_selection_up(tab.selected);
    }

    pub fn move_down(&mut self) {
        let len = self.rows().len();
        let tab = self.tab_mut();
        tab.selected = state::move_selection_down(tab.selected, len);
    }

    pub fn jump_to_top(&mut self) {
        self.tab_mut().selected = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.rows().len();
        self.tab_mut().selected = state::clamp_selection(usize::MAX, len);
    }

    fn page_size(&self) -> usize {
        (self.viewport_height as usize).saturating_sub(5).max(1)
    }

    pub fn page_down(&mut self) {
        let len = self.rows().len();
        let page = self.page_size();
        let tab = self.tab_mut();
        tab.selected = state::page_down(tab.selected, page, len);
    }

    pub fn page_up(&mut self) {
        let page = self.page_size();
        let tab = self.tab_mut();
        tab.selected = state::page_up(tab.selected, page);
    }

    // Tab switching. Selection and open rows of the other tabs are kept.
    pub fn next_pipeline(&mut self) {
        self.pipeline = self.pipeline.next();
    }

    pub fn prev_pipeline(&mut self) {
        self.pipeline = self.pipeline.prev();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::ScrollDown => self.move_down(),
            MouseEventKind::ScrollUp => self.move_up(),
            _ => {}
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "logs": [
            {"timestamp": "2024-05-01T10:00:00Z", "body": "a"},
            {"timestamp": "2024-05-01T10:00:01Z", "body": "b"},
            {"timestamp": "2024-05-01T10:00:02Z", "body": "c"}
        ],
        "metrics": [
            {"timestamp": "2024-05-01T10:00:00Z", "name": "m", "value": 1.0, "type": "Gauge", "unit": "1"}
        ]
    }"#;

    fn app() -> (App, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        let app = App::new(
            file.path().to_path_buf(),
            PipelineType::Logs,
            FormatConfig::utc(),
        )
        .unwrap();
        (app, file)
    }

    #[test]
    fn test_rows_follow_active_pipeline() {
        let (mut app, _file) = app();
        assert_eq!(app.rows().len(), 3);
        app.next_pipeline();
        assert_eq!(app.pipeline, PipelineType::Metrics);
        assert_eq!(app.rows().len(), 1);
    }

    #[test]
    fn test_open_state_is_per_row_and_per_tab() {
        let (mut app, _file) = app();
        app.move_down();
        app.toggle_selected();
        assert!(app.is_open(1));
        assert!(!app.is_open(0));

        // Switching tabs keeps the other tab's open rows.
        app.next_pipeline();
        assert!(!app.is_open(1));
        app.prev_pipeline();
        app.prev_pipeline();
        app.next_pipeline();
        assert!(app.is_open(1));

        // Toggling again closes.
        app.toggle_selected();
        assert!(!app.is_open(1));
    }

    #[test]
    fn test_reload_resets_open_state_and_clamps_selection() {
        let (mut app, file) = app();
        app.jump_to_bottom();
        app.toggle_selected();
        assert!(app.is_open(2));

        // Shrink the snapshot under the app.
        std::fs::write(
            file.path(),
            r#"{"logs": [{"timestamp": "2024-05-01T10:00:00Z", "body": "only"}]}"#,
        )
        .unwrap();
        app.reload().unwrap();

        assert_eq!(app.rows().len(), 1);
        assert_eq!(app.selected_index(), 0);
        assert!(!app.is_open(0) && !app.is_open(2), "reload closes all rows");
    }

    #[test]
    fn test_navigation_respects_bounds() {
        let (mut app, _file) = app();
        app.move_up();
        assert_eq!(app.selected_index(), 0);
        app.jump_to_bottom();
        assert_eq!(app.selected_index(), 2);
        app.move_down();
        assert_eq!(app.selected_index(), 2);
        app.page_up();
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn test_toggle_on_empty_tab_is_noop() {
        let (mut app, _file) = app();
        app.next_pipeline();
        app.next_pipeline();
        assert!(app.rows().is_empty());
        app.toggle_selected();
        assert!(!app.is_open(0));
    }
}
