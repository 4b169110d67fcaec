//! Physical schema surface consumed by logical types
//!
//! Only the parts a logical type needs are modelled here:
//! - the base type tag of the physical schema
//! - the `logicalType` annotation carried next to it
//!
//! Record and other complex bodies are owned by the host schema model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::errors::{SchemaError, SchemaResult};

/// Base type tags of the physical schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaTag {
    Null,
    Boolean,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    Float,
    Double,
    Bytes,
    String,
    Record,
    Enum,
    Array,
    Map,
    Union,
    Fixed,
}

impl SchemaTag {
    /// Returns the tag name as written in schema JSON
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaTag::Null => "null",
            SchemaTag::Boolean => "boolean",
            SchemaTag::Int => "int",
            SchemaTag::Long => "long",
            SchemaTag::Float => "float",
            SchemaTag::Double => "double",
            SchemaTag::Bytes => "bytes",
            SchemaTag::String => "string",
            SchemaTag::Record => "record",
            SchemaTag::Enum => "enum",
            SchemaTag::Array => "array",
            SchemaTag::Map => "map",
            SchemaTag::Union => "union",
            SchemaTag::Fixed => "fixed",
        }
    }
}

impl fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for SchemaTag {
    type Err = SchemaError;

    fn from_str(s: &str) -> SchemaResult<Self> {
        let tag = match s {
            "null" => SchemaTag::Null,
            "boolean" => SchemaTag::Boolean,
            "int" => SchemaTag::Int,
            "long" => SchemaTag::Long,
            "float" => SchemaTag::Float,
            "double" => SchemaTag::Double,
            "bytes" => SchemaTag::Bytes,
            "string" => SchemaTag::String,
            "record" => SchemaTag::Record,
            "enum" => SchemaTag::Enum,
            "array" => SchemaTag::Array,
            "map" => SchemaTag::Map,
            "union" => SchemaTag::Union,
            "fixed" => SchemaTag::Fixed,
            other => return Err(SchemaError::unknown_type(other)),
        };
        Ok(tag)
    }
}

/// A resolved physical schema.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicalSchema {
    tag: SchemaTag,
}

impl PhysicalSchema {
    /// Create a physical schema with the given base tag
    pub const fn new(tag: SchemaTag) -> Self {
        Self { tag }
    }

    /// 64-bit signed integer schema
    pub const fn long() -> Self {
        Self::new(SchemaTag::Long)
    }

    /// Returns the base type tag
    pub fn base_tag(&self) -> SchemaTag {
        self.tag
    }
}

impl From<SchemaTag> for PhysicalSchema {
    fn from(tag: SchemaTag) -> Self {
        Self::new(tag)
    }
}

/// A physical schema annotated with a logical type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalSchema {
    base: PhysicalSchema,
    logical_type: String,
}

impl LogicalSchema {
    /// Create a new annotated schema
    pub fn new(base: PhysicalSchema, logical_type: impl Into<String>) -> Self {
        Self {
            base,
            logical_type: logical_type.into(),
        }
    }

    /// Returns the underlying physical schema
    pub fn base_schema(&self) -> &PhysicalSchema {
        &self.base
    }

    /// Returns the logical type name from the annotation
    pub fn logical_type(&self) -> &str {
        &self.logical_type
    }

    /// Parse an annotated schema from JSON text.
    pub fn parse(text: &str) -> SchemaResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| SchemaError::malformed(format!("invalid JSON: {}", e)))?;
        Self::from_json(&value)
    }

    /// Build an annotated schema from a JSON object.
    ///
    /// Expected shape: `{"type": "long", "logicalType": "timestamp-micros"}`.
    ///
    /// # Errors
    ///
    /// - `AERO_SCHEMA_MALFORMED` if the value is not an object, or `type`
    ///   or `logicalType` is missing or not a string
    /// - `AERO_SCHEMA_UNKNOWN_TYPE` if `type` names no known tag
    pub fn from_json(value: &Value) -> SchemaResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| SchemaError::malformed("schema must be a JSON object"))?;

        let type_name = obj
            .get("type")
            .ok_or_else(|| SchemaError::malformed("missing 'type'"))?
            .as_str()
            .ok_or_else(|| SchemaError::malformed("'type' must be a string"))?;

        let logical_type = obj
            .get("logicalType")
            .ok_or_else(|| SchemaError::malformed("missing 'logicalType'"))?
            .as_str()
            .ok_or_else(|| SchemaError::malformed("'logicalType' must be a string"))?;

        let tag: SchemaTag = type_name.parse()?;

        Ok(Self::new(PhysicalSchema::new(tag), logical_type))
    }
}
