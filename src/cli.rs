//! Command-line arguments for `pcode`.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "pcode",
    version,
    about = "Generate and validate 11-digit personal identification codes",
    long_about = "Generate and validate 11-digit personal identification codes.\n\n\
                  Output is JSON in the same shape as the /validate and /generate endpoints."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a personal code, printing {"valid": bool}.
    Validate {
        /// The code to check.
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print all 1000 codes for a date of birth and gender.
    Generate {
        /// Date of birth (YYYY-MM-DD, YYYYMMDD or MM/DD/YYYY).
        #[arg(value_name = "DOB", allow_hyphen_values = true)]
        dob: String,

        /// Gender input, 1-6 (odd for male, even for female).
        #[arg(value_name = "GENDER")]
        gender: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Compact,
    Json,
}
