//! `pcode`: personal code generator and validator.

use std::process::ExitCode;

use clap::Parser;
use personal_code::response::{Status, generate_response, validate_response};
use serde::Serialize;
use tracing::info;

mod cli;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};

/// Exit code for a rejected generate request
const EXIT_BAD_REQUEST: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let format = match cli.log_format {
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_logging(&LogConfig::from_flags(cli.verbose, cli.quiet, format))?;

    let status = match &cli.command {
        Command::Validate { code } => {
            let response = validate_response(code);
            info!(valid = response.valid, "validated code");
            print_json(&response, cli.pretty)?;
            response.status()
        }
        Command::Generate { dob, gender } => {
            let response = generate_response(dob, gender);
            info!(status = %response.status(), "generated codes");
            print_json(&response, cli.pretty)?;
            response.status()
        }
    };

    Ok(exit_code(status))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn exit_code(status: Status) -> ExitCode {
    if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_BAD_REQUEST)
    }
}
