//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Logical type bound to a physical schema
    SchemaBound,
    /// Physical schema rejected by a logical type
    SchemaRejected,
    /// Value conversion rejected
    ConversionRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaBound => "SCHEMA_BOUND",
            Event::SchemaRejected => "SCHEMA_REJECTED",
            Event::ConversionRejected => "CONVERSION_REJECTED",
        }
    }

    /// Returns whether this event reports rejected input
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::SchemaRejected | Event::ConversionRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
