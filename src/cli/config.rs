//! Configuration file
//!
//! Optional JSON file; every field has a default.
//!
//! ```json
//! { "log_level": "info", "logical_type": "timestamp-micros" }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::{CliError, CliResult};
use crate::logical::{EpochUnit, LogicalTimestampType};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lowest severity written to the log (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: Severity,

    /// Logical type the commands operate on (default "timestamp-micros")
    #[serde(default = "default_logical_type")]
    pub logical_type: String,
}

fn default_log_level() -> Severity {
    Severity::Warn
}

fn default_logical_type() -> String {
    EpochUnit::MICROS.name.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            logical_type: default_logical_type(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.epoch_unit().map(|_| ())
    }

    fn epoch_unit(&self) -> CliResult<EpochUnit> {
        EpochUnit::by_name(&self.logical_type).ok_or_else(|| {
            let available: Vec<_> = EpochUnit::ALL.iter().map(|u| u.name).collect();
            CliError::config_error(format!(
                "Unsupported logical_type: '{}'. Available: {}.",
                self.logical_type,
                available.join(", ")
            ))
        })
    }

    /// Apply the log level and report the loaded configuration
    pub fn apply(&self) {
        Logger::set_level(self.log_level);
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("log_level", self.log_level.as_str()),
                ("logical_type", self.logical_type.as_str()),
            ],
        );
    }

    /// Returns the logical type named by `logical_type`
    pub fn timestamp_type(&self) -> CliResult<LogicalTimestampType> {
        self.epoch_unit().map(LogicalTimestampType::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logical::LogicalType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, Severity::Warn);
        assert_eq!(config.logical_type, "timestamp-micros");
        assert_eq!(config.timestamp_type().unwrap().name(), "timestamp-micros");
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_config("{}");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_log_level() {
        let file = write_config(r#"{"log_level": "trace"}"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.log_level, Severity::Trace);
    }

    #[test]
    fn test_unknown_logical_type_rejected() {
        let file = write_config(r#"{"logical_type": "timestamp-nanos"}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "AERO_CLI_CONFIG_ERROR");
        assert!(err.message().contains("timestamp-nanos"));
    }

    #[test]
    fn test_timestamp_type_follows_logical_type() {
        let config = Config {
            logical_type: "timestamp-nanos".into(),
            ..Config::default()
        };
        let err = config.timestamp_type().unwrap_err();
        assert_eq!(err.code_str(), "AERO_CLI_CONFIG_ERROR");
        assert!(err.message().contains("timestamp-micros"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config(r#"{"precision": "micros"}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
