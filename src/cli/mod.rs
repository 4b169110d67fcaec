//! CLI module
//!
//! Provides command-line access to the timestamp logical type:
//! - validate: bind to an annotated schema
//! - to-logical: count or text to timestamp
//! - to-physical: timestamp to count, text or timestamp

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, KindArg};
pub use commands::{run, run_command, run_with, to_logical, to_physical, validate};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
