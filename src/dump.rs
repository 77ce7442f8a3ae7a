//! Non-interactive snapshot rendering
//!
//! `snapview dump` prints the same rows the TUI draws, stripped of styling,
//! so snapshots can be inspected in scripts and piped through grep. Rendering
//! goes through the row dispatcher, so a mislabeled record shows up as the
//! same placeholder line the console would draw.

use std::io;

use crate::record::PipelineType;
use crate::snapshot::Snapshot;
use crate::timefmt::FormatConfig;
use crate::tui::rows::{line_text, placeholder_row, render_row};

/// Write one pipeline's rows to `out`, newest first. With `open` set, every
/// row is expanded to its full detail block.
pub fn write_rows<W: io::Write>(
    out: &mut W,
    snapshot: &Snapshot,
    pipeline: PipelineType,
    open: bool,
    config: &FormatConfig,
) -> io::Result<()> {
    let rows = snapshot.rows(pipeline);
    if rows.is_empty() {
        writeln!(out, "No recent {}", pipeline.noun())?;
        return Ok(());
    }

    for record in rows {
        let view = render_row(record, pipeline, open, config)
            .unwrap_or_else(|err| placeholder_row(&err));
        for line in view.into_lines() {
            writeln!(out, "{}", line_text(&line))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "logs": [
            {
                "timestamp": "2024-05-01T10:00:00Z",
                "body": "listener started",
                "severity": "info",
                "attributes": {"port": 8080},
                "resource": {"host.name": "web-1"}
            }
        ]
    }"#;

    fn dump(open: bool) -> String {
        let snapshot = Snapshot::from_json(FIXTURE).unwrap();
        let mut out = Vec::new();
        write_rows(
            &mut out,
            &snapshot,
            PipelineType::Logs,
            open,
            &FormatConfig::utc(),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_closed_dump_is_one_line_per_record() {
        let out = dump(false);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("listener started"));
        assert!(out.contains("May 01 10:00:00 UTC"));
        // Detail content stays unrendered while closed.
        assert!(!out.contains("Attributes"));
        assert!(!out.contains("web-1"));
    }

    #[test]
    fn test_open_dump_includes_detail() {
        let out = dump(true);
        assert!(out.contains("Attributes"));
        assert!(out.contains("port"));
        assert!(out.contains("8080"));
        assert!(out.contains("host.name"));
        assert!(out.contains("web-1"));
    }

    #[test]
    fn test_empty_pipeline_prints_notice() {
        let snapshot = Snapshot::from_json(FIXTURE).unwrap();
        let mut out = Vec::new();
        write_rows(
            &mut out,
            &snapshot,
            PipelineType::Traces,
            false,
            &FormatConfig::utc(),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "No recent traces");
    }
}
