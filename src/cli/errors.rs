//! CLI-specific error types
//!
//! Rejections from the schema and logical layers keep their own codes so the
//! JSON error response names the exact failure.

use std::fmt;
use std::io;

use crate::logical::LogicalError;
use crate::schema::SchemaError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Schema could not be parsed or bound
    SchemaRejected,
    /// Value conversion failed
    ConversionRejected,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "AERO_CLI_CONFIG_ERROR",
            Self::IoError => "AERO_CLI_IO_ERROR",
            Self::SchemaRejected => "AERO_CLI_SCHEMA_REJECTED",
            Self::ConversionRejected => "AERO_CLI_CONVERSION_REJECTED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    /// Code of the underlying schema or logical error, if any
    cause_code: Option<&'static str>,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            cause_code: None,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the most specific error code string
    pub fn code_str(&self) -> &'static str {
        self.cause_code.unwrap_or_else(|| self.code.code())
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self {
            code: CliErrorCode::SchemaRejected,
            cause_code: Some(e.code().code()),
            message: e.message().to_string(),
        }
    }
}

impl From<LogicalError> for CliError {
    fn from(e: LogicalError) -> Self {
        let code = if e.is_schema_error() {
            CliErrorCode::SchemaRejected
        } else {
            CliErrorCode::ConversionRejected
        };
        Self {
            code,
            cause_code: Some(e.code()),
            message: e.to_string(),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logical::ValueKind;
    use crate::schema::SchemaTag;

    #[test]
    fn test_logical_error_keeps_code() {
        let err: CliError = LogicalError::SchemaMismatch {
            logical_type: "timestamp-micros".into(),
            expected: SchemaTag::Long,
            actual: SchemaTag::Float,
        }
        .into();
        assert_eq!(err.code(), CliErrorCode::SchemaRejected);
        assert_eq!(err.code_str(), "AERO_LOGICAL_SCHEMA_MISMATCH");
        assert!(err.message().contains("float"));
    }

    #[test]
    fn test_conversion_error_category() {
        let err: CliError = LogicalError::UnsupportedConversion {
            logical_type: "timestamp-micros".into(),
            requested: ValueKind::Bytes,
            actual: ValueKind::Timestamp,
        }
        .into();
        assert_eq!(err.code(), CliErrorCode::ConversionRejected);
    }

    #[test]
    fn test_plain_error_uses_own_code() {
        let err = CliError::config_error("bad");
        assert_eq!(err.code_str(), "AERO_CLI_CONFIG_ERROR");
        assert_eq!(err.to_string(), "AERO_CLI_CONFIG_ERROR: bad");
    }
}
