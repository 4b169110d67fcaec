//! aerotime - Logical timestamp types for schema-based binary serialization
//!
//! Lets a `long` on the wire carry a UTC timestamp, converting losslessly
//! between the epoch-relative count, the native timestamp and ISO-8601 text.

pub mod cli;
pub mod logical;
pub mod observability;
pub mod schema;
