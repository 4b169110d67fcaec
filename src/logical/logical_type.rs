//! The contract every logical type exposes to the host pipeline

use super::errors::{LogicalError, LogicalResult};
use super::value::{Datum, LogicalValue, ValueKind};
use crate::schema::{LogicalSchema, PhysicalSchema};

/// A semantic interpretation layered on a physical schema.
///
/// The host looks implementations up by `name()` and calls `validate_schema`
/// once per schema binding. Conversions assume that check already passed.
pub trait LogicalType: Send + Sync {
    /// In-memory representation produced by `to_logical_value`
    type Logical;

    /// Stable name used as the `logicalType` annotation
    fn name(&self) -> &str;

    /// Checks that the physical schema can carry this logical type.
    fn validate_schema(&self, schema: &PhysicalSchema) -> LogicalResult<()>;

    /// Converts a logical value to the requested physical kind.
    fn to_physical_value(&self, value: &LogicalValue, requested: ValueKind) -> LogicalResult<Datum>;

    /// Converts a physical value to its logical form.
    fn to_logical_value(&self, physical: &Datum) -> LogicalResult<Self::Logical>;

    /// Binds to an annotated schema: the annotation must name this type and
    /// the base schema must validate.
    fn bind(&self, schema: &LogicalSchema) -> LogicalResult<()> {
        if schema.logical_type() != self.name() {
            return Err(LogicalError::NameMismatch {
                logical_type: self.name().to_string(),
                found: schema.logical_type().to_string(),
            });
        }
        self.validate_schema(schema.base_schema())
    }
}
