//! # Logical Type Errors
//!
//! None of these are retried at this layer. A conversion either returns a
//! value or fails with one of these.

use thiserror::Error;

use super::value::ValueKind;
use crate::schema::SchemaTag;

/// Result type for logical type operations
pub type LogicalResult<T> = Result<T, LogicalError>;

/// Logical type errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicalError {
    /// Physical schema cannot carry this logical type
    #[error("'{logical_type}' can only be used with an underlying {expected} type, got {actual}")]
    SchemaMismatch {
        logical_type: String,
        expected: SchemaTag,
        actual: SchemaTag,
    },

    /// No mapping between the given and requested kinds
    #[error("'{logical_type}' cannot convert {actual} to {requested}")]
    UnsupportedConversion {
        logical_type: String,
        requested: ValueKind,
        actual: ValueKind,
    },

    /// Count lies outside the native timestamp range
    #[error("'{logical_type}' count {count} is outside the supported timestamp range")]
    ValueOutOfRange { logical_type: String, count: i64 },

    /// String branch could not be parsed as a timestamp
    #[error("'{logical_type}' cannot parse '{text}' as a timestamp")]
    MalformedText { logical_type: String, text: String },

    /// Schema annotation names a different logical type
    #[error("'{logical_type}' cannot bind to a schema annotated as '{found}'")]
    NameMismatch { logical_type: String, found: String },
}

impl LogicalError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            LogicalError::SchemaMismatch { .. } => "AERO_LOGICAL_SCHEMA_MISMATCH",
            LogicalError::UnsupportedConversion { .. } => "AERO_LOGICAL_UNSUPPORTED_CONVERSION",
            LogicalError::ValueOutOfRange { .. } => "AERO_LOGICAL_VALUE_OUT_OF_RANGE",
            LogicalError::MalformedText { .. } => "AERO_LOGICAL_MALFORMED_TEXT",
            LogicalError::NameMismatch { .. } => "AERO_LOGICAL_NAME_MISMATCH",
        }
    }

    /// Returns the logical type name the error was raised for
    pub fn logical_type(&self) -> &str {
        match self {
            LogicalError::SchemaMismatch { logical_type, .. }
            | LogicalError::UnsupportedConversion { logical_type, .. }
            | LogicalError::ValueOutOfRange { logical_type, .. }
            | LogicalError::MalformedText { logical_type, .. }
            | LogicalError::NameMismatch { logical_type, .. } => logical_type,
        }
    }

    /// Returns whether the error was raised while binding a schema
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            LogicalError::SchemaMismatch { .. } | LogicalError::NameMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_message() {
        let err = LogicalError::SchemaMismatch {
            logical_type: "timestamp-micros".into(),
            expected: SchemaTag::Long,
            actual: SchemaTag::String,
        };
        assert_eq!(
            err.to_string(),
            "'timestamp-micros' can only be used with an underlying long type, got string"
        );
        assert_eq!(err.code(), "AERO_LOGICAL_SCHEMA_MISMATCH");
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_unsupported_conversion_names_both_kinds() {
        let err = LogicalError::UnsupportedConversion {
            logical_type: "timestamp-micros".into(),
            requested: ValueKind::String,
            actual: ValueKind::Long,
        };
        let msg = err.to_string();
        assert!(msg.contains("timestamp-micros"));
        assert!(msg.contains("string"));
        assert!(msg.contains("long"));
        assert!(!err.is_schema_error());
        assert_eq!(err.logical_type(), "timestamp-micros");
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            LogicalError::SchemaMismatch {
                logical_type: "t".into(),
                expected: SchemaTag::Long,
                actual: SchemaTag::Int,
            },
            LogicalError::UnsupportedConversion {
                logical_type: "t".into(),
                requested: ValueKind::Bytes,
                actual: ValueKind::Timestamp,
            },
            LogicalError::ValueOutOfRange {
                logical_type: "t".into(),
                count: i64::MAX,
            },
            LogicalError::MalformedText {
                logical_type: "t".into(),
                text: "x".into(),
            },
            LogicalError::NameMismatch {
                logical_type: "t".into(),
                found: "date".into(),
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
