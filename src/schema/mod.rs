//! Physical schema surface for logical types
//!
//! The host schema model owns parsing of full schemas. This module exposes
//! just what a logical type binds against:
//!
//! - the base type tag of a physical schema
//! - the `logicalType` annotation name
//!
//! Schemas are immutable once constructed.

mod errors;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use types::{LogicalSchema, PhysicalSchema, SchemaTag};
