//! Value representations exchanged with the host pipeline
//!
//! - `Datum`: the host's generic value, tagged with a runtime `ValueKind`
//! - `LogicalValue`: the closed set of representations a timestamp can take
//! - `PhysicalRepr`: typed access to a `Datum` for the supported kinds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime kind tag of a host value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Timestamp,
}

impl ValueKind {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Bytes => "bytes",
            ValueKind::String => "string",
            ValueKind::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// Representations a logical timestamp can be held in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalValue {
    /// Epoch-relative count
    Long(i64),
    /// Absolute UTC instant
    Timestamp(DateTime<Utc>),
    /// ISO-8601 text
    Text(String),
}

impl LogicalValue {
    /// Returns the runtime kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            LogicalValue::Long(_) => ValueKind::Long,
            LogicalValue::Timestamp(_) => ValueKind::Timestamp,
            LogicalValue::Text(_) => ValueKind::String,
        }
    }
}

impl From<i64> for LogicalValue {
    fn from(count: i64) -> Self {
        LogicalValue::Long(count)
    }
}

impl From<DateTime<Utc>> for LogicalValue {
    fn from(ts: DateTime<Utc>) -> Self {
        LogicalValue::Timestamp(ts)
    }
}

impl From<String> for LogicalValue {
    fn from(text: String) -> Self {
        LogicalValue::Text(text)
    }
}

/// Generic host value
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
    String(String),
    Timestamp(DateTime<Utc>),
}

impl Datum {
    /// Returns the runtime kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Datum::Null => ValueKind::Null,
            Datum::Boolean(_) => ValueKind::Boolean,
            Datum::Int(_) => ValueKind::Int,
            Datum::Long(_) => ValueKind::Long,
            Datum::Float(_) => ValueKind::Float,
            Datum::Double(_) => ValueKind::Double,
            Datum::Bytes(_) => ValueKind::Bytes,
            Datum::String(_) => ValueKind::String,
            Datum::Timestamp(_) => ValueKind::Timestamp,
        }
    }
}

impl From<LogicalValue> for Datum {
    fn from(value: LogicalValue) -> Self {
        match value {
            LogicalValue::Long(n) => Datum::Long(n),
            LogicalValue::Timestamp(ts) => Datum::Timestamp(ts),
            LogicalValue::Text(s) => Datum::String(s),
        }
    }
}

/// Rust types a timestamp can be converted into.
///
/// Each implementation names the `ValueKind` it is requested as and extracts
/// itself from a `Datum` of that kind.
pub trait PhysicalRepr: Sized {
    /// Kind requested when converting to this type
    const KIND: ValueKind;

    /// Extract from a datum of kind `KIND`
    fn from_datum(datum: Datum) -> Option<Self>;
}

impl PhysicalRepr for i64 {
    const KIND: ValueKind = ValueKind::Long;

    fn from_datum(datum: Datum) -> Option<Self> {
        match datum {
            Datum::Long(n) => Some(n),
            _ => None,
        }
    }
}

impl PhysicalRepr for DateTime<Utc> {
    const KIND: ValueKind = ValueKind::Timestamp;

    fn from_datum(datum: Datum) -> Option<Self> {
        match datum {
            Datum::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

impl PhysicalRepr for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_datum(datum: Datum) -> Option<Self> {
        match datum {
            Datum::String(s) => Some(s),
            _ => None,
        }
    }
}
