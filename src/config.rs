//! Configuration file support for snapview
//!
//! Reads from .snapview/config.toml in the working directory. Everything is
//! optional; CLI flags override whatever the file sets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::PipelineType;
use crate::timefmt::TzSpec;

const CONFIG_PATH: &str = ".snapview/config.toml";

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Timestamp formatting settings
    #[serde(default)]
    pub format: FormatSection,

    /// Console defaults
    #[serde(default)]
    pub console: ConsoleSection,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct FormatSection {
    /// Timezone timestamps display in: "local", "utc", or a fixed offset
    /// like "+05:30". Default: local.
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct ConsoleSection {
    /// Telemetry tab the console opens on. Default: logs.
    #[serde(default)]
    pub pipeline: Option<PipelineType>,
}

impl Config {
    /// Load from the default location. A missing file is an empty config;
    /// a file that exists but does not parse is an error.
    pub fn load() -> Result<Config, toml::de::Error> {
        Config::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<Config, toml::de::Error> {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents),
            Err(_) => Ok(Config::default()),
        }
    }

    /// Resolve the configured timezone, defaulting to local time.
    pub fn timezone(&self) -> Result<TzSpec, String> {
        match self.format.timezone.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(TzSpec::Local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timezone().unwrap(), TzSpec::Local);
        assert!(config.console.pipeline.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [format]
            timezone = "utc"

            [console]
            pipeline = "traces"
            "#,
        )
        .unwrap();
        assert_eq!(config.timezone().unwrap(), TzSpec::Utc);
        assert_eq!(config.console.pipeline, Some(PipelineType::Traces));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[format]\ntimezone = \"+09:00\"\n").unwrap();
        assert!(matches!(config.timezone().unwrap(), TzSpec::Fixed(_)));
        assert!(config.console.pipeline.is_none());
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(config.format.timezone.is_none());
    }

    #[test]
    fn test_bad_timezone_is_an_error() {
        let config: Config = toml::from_str("[format]\ntimezone = \"PST\"\n").unwrap();
        assert!(config.timezone().is_err());
    }
}
