//! The epoch timestamp logical type
//!
//! Carried on a `long` physical schema. Supported conversions:
//!
//! | direction | input | requested | result |
//! |---|---|---|---|
//! | to physical | timestamp | long | count since epoch |
//! | to physical | long | long | unchanged |
//! | to physical | timestamp | string | canonical ISO-8601 |
//! | to physical | timestamp | timestamp | unchanged |
//! | to logical | long | - | timestamp |
//! | to logical | timestamp | - | unchanged |
//! | to logical | string | - | parsed timestamp |
//!
//! Every other pair fails with `UnsupportedConversion`.

use chrono::{DateTime, Utc};

use super::epoch::{EpochConverter, EpochUnit};
use super::errors::{LogicalError, LogicalResult};
use super::logical_type::LogicalType;
use super::text;
use super::value::{Datum, LogicalValue, PhysicalRepr, ValueKind};
use crate::schema::{PhysicalSchema, SchemaTag};

/// Physical base type every epoch timestamp requires
const REQUIRED_BASE: SchemaTag = SchemaTag::Long;

/// Logical timestamp over an epoch-relative `long` count.
///
/// Stateless; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalTimestampType {
    converter: EpochConverter,
}

impl LogicalTimestampType {
    /// Create a timestamp type for the given unit
    pub const fn new(unit: EpochUnit) -> Self {
        Self {
            converter: EpochConverter::new(unit),
        }
    }

    /// The `timestamp-micros` logical type
    pub const fn micros() -> Self {
        Self::new(EpochUnit::MICROS)
    }

    /// Converts to a typed physical representation.
    ///
    /// `T` selects the requested kind: `i64`, `DateTime<Utc>` or `String`.
    pub fn to_physical_as<T: PhysicalRepr>(&self, value: &LogicalValue) -> LogicalResult<T> {
        let datum = self.to_physical_value(value, T::KIND)?;
        T::from_datum(datum).ok_or_else(|| self.unsupported(T::KIND, value.kind()))
    }

    fn unsupported(&self, requested: ValueKind, actual: ValueKind) -> LogicalError {
        LogicalError::UnsupportedConversion {
            logical_type: self.name().to_string(),
            requested,
            actual,
        }
    }
}

impl Default for LogicalTimestampType {
    fn default() -> Self {
        Self::micros()
    }
}

impl LogicalType for LogicalTimestampType {
    type Logical = DateTime<Utc>;

    fn name(&self) -> &str {
        self.converter.unit().name
    }

    fn validate_schema(&self, schema: &PhysicalSchema) -> LogicalResult<()> {
        let actual = schema.base_tag();
        if actual != REQUIRED_BASE {
            return Err(LogicalError::SchemaMismatch {
                logical_type: self.name().to_string(),
                expected: REQUIRED_BASE,
                actual,
            });
        }
        Ok(())
    }

    fn to_physical_value(&self, value: &LogicalValue, requested: ValueKind) -> LogicalResult<Datum> {
        match value {
            LogicalValue::Timestamp(ts) => match requested {
                ValueKind::Long => Ok(Datum::Long(self.converter.to_count(ts))),
                ValueKind::String => Ok(Datum::String(text::render(ts))),
                ValueKind::Timestamp => Ok(Datum::Timestamp(*ts)),
                _ => Err(self.unsupported(requested, value.kind())),
            },
            LogicalValue::Long(count) => match requested {
                ValueKind::Long => Ok(Datum::Long(*count)),
                _ => Err(self.unsupported(requested, value.kind())),
            },
            LogicalValue::Text(_) => Err(self.unsupported(requested, value.kind())),
        }
    }

    fn to_logical_value(&self, physical: &Datum) -> LogicalResult<DateTime<Utc>> {
        match physical {
            Datum::Long(count) => {
                self.converter
                    .to_timestamp(*count)
                    .ok_or_else(|| LogicalError::ValueOutOfRange {
                        logical_type: self.name().to_string(),
                        count: *count,
                    })
            }
            Datum::Timestamp(ts) => Ok(*ts),
            Datum::String(s) => text::parse(s).ok_or_else(|| LogicalError::MalformedText {
                logical_type: self.name().to_string(),
                text: s.clone(),
            }),
            Datum::Null
            | Datum::Boolean(_)
            | Datum::Int(_)
            | Datum::Float(_)
            | Datum::Double(_)
            | Datum::Bytes(_) => Err(self.unsupported(ValueKind::Timestamp, physical.kind())),
        }
    }
}
