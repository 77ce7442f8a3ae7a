//! Timestamp and duration formatting for console rows
//!
//! All functions here are pure. The timezone a timestamp is rendered in comes
//! from an explicit [`FormatConfig`] rather than ambient process state, so
//! output is deterministic under test.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::record::TelemetryRecord;

/// Display format for row timestamps: short month, 2-digit day, 2-digit
/// hour/minute/second, short zone name. The year is intentionally omitted -
/// a snapshot only ever covers recent records.
const DISPLAY_DATE_FORMAT: &str = "%b %d %H:%M:%S %Z";

/// Placeholder shown when a timestamp field fails to parse for a duration.
const UNPARSEABLE_DURATION: &str = "—";

/// Timezone the console formats timestamps in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TzSpec {
    /// Host timezone.
    #[default]
    Local,
    Utc,
    /// Fixed offset, e.g. `+05:30`.
    Fixed(FixedOffset),
}

impl FromStr for TzSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(TzSpec::Local),
            "utc" | "UTC" => Ok(TzSpec::Utc),
            other => parse_fixed_offset(other)
                .map(TzSpec::Fixed)
                .ok_or_else(|| {
                    format!("invalid timezone {other:?} (expected \"local\", \"utc\", or ±HH:MM)")
                }),
        }
    }
}

fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
        (1i32, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1i32, rest)
    } else {
        return None;
    };
    let (hh, mm) = rest.split_once(':')?;
    let hours: i32 = hh.parse().ok()?;
    let minutes: i32 = mm.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Explicit formatting configuration, injected into every renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatConfig {
    pub tz: TzSpec,
}

impl FormatConfig {
    pub fn utc() -> Self {
        FormatConfig { tz: TzSpec::Utc }
    }
}

/// The instant a row is listed and sorted under.
///
/// Logs and metrics use their `timestamp`; spans use `end`, not `start` -
/// consistency across record types is anchored on when a record finished.
pub fn display_timestamp(record: &TelemetryRecord) -> &str {
    match record {
        TelemetryRecord::Log(log) => &log.timestamp,
        TelemetryRecord::Metric(metric) => &metric.timestamp,
        TelemetryRecord::Span(span) => &span.end,
    }
}

/// Format an ISO-8601 instant for display. Falls back to the raw string when
/// the instant does not parse.
pub fn format_display_date(instant: &str, config: &FormatConfig) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(instant) else {
        return instant.to_string();
    };
    match config.tz {
        TzSpec::Local => parsed
            .with_timezone(&Local)
            .format(DISPLAY_DATE_FORMAT)
            .to_string(),
        TzSpec::Utc => parsed
            .with_timezone(&Utc)
            .format(DISPLAY_DATE_FORMAT)
            .to_string(),
        TzSpec::Fixed(offset) => parsed
            .with_timezone(&offset)
            .format(DISPLAY_DATE_FORMAT)
            .to_string(),
    }
}

/// Whole-millisecond duration between two ISO-8601 instants, rendered as
/// `"<n> ms"`. Negative when `end` precedes `start`; upstream data occasionally
/// carries inverted spans and the console shows them as-is rather than
/// clamping. Unparseable input degrades to a placeholder.
pub fn span_duration(start: &str, end: &str) -> String {
    let (Ok(start), Ok(end)) = (
        DateTime::parse_from_rfc3339(start),
        DateTime::parse_from_rfc3339(end),
    ) else {
        return UNPARSEABLE_DURATION.to_string();
    };
    format!("{} ms", (end - start).num_milliseconds())
}
