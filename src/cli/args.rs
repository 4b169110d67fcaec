//! CLI argument definitions using clap
//!
//! Commands:
//! - aerotime validate --schema <json>
//! - aerotime to-logical (--long <count> | --text <iso8601>)
//! - aerotime to-physical --timestamp <iso8601> [--kind long|string|timestamp]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::logical::ValueKind;

/// aerotime - logical timestamp conversion for schema-based serialization
#[derive(Parser, Debug)]
#[command(name = "aerotime")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bind the logical type to an annotated schema
    Validate {
        /// Schema JSON, e.g. {"type":"long","logicalType":"timestamp-micros"}
        #[arg(long)]
        schema: String,
    },

    /// Convert a physical value to a timestamp
    ToLogical {
        /// Count since the epoch
        #[arg(long, allow_negative_numbers = true, conflicts_with = "text", required_unless_present = "text")]
        long: Option<i64>,

        /// ISO-8601 text
        #[arg(long)]
        text: Option<String>,
    },

    /// Convert a timestamp to a physical representation
    ToPhysical {
        /// ISO-8601 text of the timestamp
        #[arg(long)]
        timestamp: String,

        /// Requested physical kind
        #[arg(long, value_enum, default_value_t = KindArg::Long)]
        kind: KindArg,
    },
}

/// Physical kinds selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Long,
    String,
    Timestamp,
}

impl From<KindArg> for ValueKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Long => ValueKind::Long,
            KindArg::String => ValueKind::String,
            KindArg::Timestamp => ValueKind::Timestamp,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
