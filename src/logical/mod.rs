//! Logical type conversion layer
//!
//! A logical type gives a physical value a richer meaning without changing
//! the bytes on the wire. Here: an epoch-relative `long` read as a UTC
//! timestamp.
//!
//! # Components
//!
//! - `EpochConverter`: exact count/timestamp arithmetic for one `EpochUnit`
//! - `LogicalTimestampType`: schema compatibility and representation dispatch
//!
//! # Usage
//!
//! ```ignore
//! use aerotime::logical::{LogicalTimestampType, LogicalType, Datum};
//! use aerotime::schema::PhysicalSchema;
//!
//! let lt = LogicalTimestampType::micros();
//! lt.validate_schema(&PhysicalSchema::long())?;
//! let ts = lt.to_logical_value(&Datum::Long(1_000_000))?;
//! ```

mod epoch;
mod errors;
mod logical_type;
mod text;
mod timestamp;
mod value;

pub use epoch::{EpochConverter, EpochUnit};
pub use errors::{LogicalError, LogicalResult};
pub use logical_type::LogicalType;
pub use text::{parse as parse_timestamp, render as render_timestamp};
pub use timestamp::LogicalTimestampType;
pub use value::{Datum, LogicalValue, PhysicalRepr, ValueKind};
