//! Schema error types
//!
//! Error codes:
//! - AERO_SCHEMA_MALFORMED (REJECT)
//! - AERO_SCHEMA_UNKNOWN_TYPE (REJECT)

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema JSON does not have the expected shape
    AeroSchemaMalformed,
    /// Schema names a base type that does not exist
    AeroSchemaUnknownType,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::AeroSchemaMalformed => "AERO_SCHEMA_MALFORMED",
            SchemaErrorCode::AeroSchemaUnknownType => "AERO_SCHEMA_UNKNOWN_TYPE",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
}

impl SchemaError {
    /// Create an error for a schema with the wrong shape
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::AeroSchemaMalformed,
            message: format!("Malformed schema: {}", reason.into()),
        }
    }

    /// Create an unknown base type error
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::AeroSchemaUnknownType,
            message: format!("Unknown schema type '{}'", type_name.into()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REJECT] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
