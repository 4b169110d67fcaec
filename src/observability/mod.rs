//! Observability subsystem
//!
//! Structured JSON logging of lifecycle events. The logical and schema layers
//! never log; only configuration loading and the CLI do.
//!
//! # Usage
//!
//! ```ignore
//! use aerotime::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SchemaBound, &[("logical_type", "timestamp-micros")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture::capture_logs;

/// Log a lifecycle event with fields.
///
/// Rejections log at WARN, everything else at INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_rejection() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
