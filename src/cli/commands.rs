//! CLI command implementations
//!
//! Each command computes a JSON value; `run` writes it as the response.
//! Nothing here keeps state between invocations.

use serde_json::{json, Value};
use std::io::{self, Write};

use crate::logical::{render_timestamp, Datum, LogicalTimestampType, LogicalType, LogicalValue};
use crate::observability::{log_event_with_fields, Event};
use crate::schema::LogicalSchema;

use super::args::{Cli, Command, KindArg};
use super::config::Config;
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments, run the command and write the response to stdout.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_with(&cli, &mut io::stdout())
}

/// Run a parsed invocation and write its JSON response to `out`.
///
/// Every failure, configuration included, is written as an error response
/// and also returned, so the process exits non-zero.
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    match execute(cli) {
        Ok(data) => write_response(out, data),
        Err(e) => {
            write_error(out, e.code_str(), e.message())?;
            Err(e)
        }
    }
}

fn execute(cli: &Cli) -> CliResult<Value> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    config.apply();
    run_command(&cli.command, &config)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: &Command, config: &Config) -> CliResult<Value> {
    let lt = config.timestamp_type()?;
    let result = match cmd {
        Command::Validate { schema } => validate(&lt, schema),
        Command::ToLogical { long, text } => to_logical(&lt, *long, text.as_deref()),
        Command::ToPhysical { timestamp, kind } => to_physical(&lt, timestamp, *kind),
    };

    if let Err(ref e) = result {
        if e.code() == CliErrorCode::ConversionRejected {
            log_event_with_fields(
                Event::ConversionRejected,
                &[("code", e.code_str()), ("message", e.message())],
            );
        }
    }
    result
}

/// Bind the logical type to an annotated schema
pub fn validate(lt: &LogicalTimestampType, schema_json: &str) -> CliResult<Value> {
    let bound = LogicalSchema::parse(schema_json)
        .map_err(CliError::from)
        .and_then(|schema| {
            lt.bind(&schema)?;
            Ok(schema)
        });

    match bound {
        Ok(schema) => {
            let base = schema.base_schema().base_tag();
            log_event_with_fields(
                Event::SchemaBound,
                &[("base_type", base.type_name()), ("logical_type", lt.name())],
            );
            Ok(json!({
                "logical_type": lt.name(),
                "base_type": base,
            }))
        }
        Err(e) => {
            log_event_with_fields(
                Event::SchemaRejected,
                &[("code", e.code_str()), ("logical_type", lt.name())],
            );
            Err(e)
        }
    }
}

/// Convert a count or ISO-8601 text to a timestamp
pub fn to_logical(
    lt: &LogicalTimestampType,
    long: Option<i64>,
    text: Option<&str>,
) -> CliResult<Value> {
    let physical = match (long, text) {
        (Some(count), _) => Datum::Long(count),
        (None, Some(s)) => Datum::String(s.to_string()),
        (None, None) => {
            return Err(CliError::io_error("one of --long or --text is required"));
        }
    };

    let ts = lt.to_logical_value(&physical)?;
    let count: i64 = lt.to_physical_as(&LogicalValue::Timestamp(ts))?;

    Ok(json!({
        "timestamp": render_timestamp(&ts),
        "count": count,
    }))
}

/// Convert ISO-8601 text to the requested physical kind
pub fn to_physical(lt: &LogicalTimestampType, timestamp: &str, kind: KindArg) -> CliResult<Value> {
    let ts = lt.to_logical_value(&Datum::String(timestamp.to_string()))?;
    let datum = lt.to_physical_value(&LogicalValue::Timestamp(ts), kind.into())?;
    let kind = datum.kind();

    Ok(json!({
        "kind": kind,
        "value": datum_to_json(datum),
    }))
}

fn datum_to_json(datum: Datum) -> Value {
    match datum {
        Datum::Null => Value::Null,
        Datum::Boolean(b) => json!(b),
        Datum::Int(n) => json!(n),
        Datum::Long(n) => json!(n),
        Datum::Float(f) => json!(f),
        Datum::Double(f) => json!(f),
        Datum::Bytes(b) => json!(b),
        Datum::String(s) => json!(s),
        Datum::Timestamp(ts) => json!(render_timestamp(&ts)),
    }
}
