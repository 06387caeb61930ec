//! Birch front-end driver.
//!
//! Library half of the `birch` binary: the command handlers, the CLI error
//! type, and tracing setup. [`run`] takes the raw argument list and output
//! streams, so everything the binary does can be driven from tests.

pub mod commands;
mod error;
mod logging;

pub use error::CliError;
pub use logging::{init_tracing, LOG_ENV};

use std::io::Write;

use commands::{check_file, explain_error, lex_file, parse_file, Options, Status};

pub const USAGE: &str = "\
Usage: birch <command> [options]

Commands:
  lex <file>        Print the token stream of a file
  parse <file>      Parse a file and print the result
  check <file>      Report every diagnostic for a file
  explain <code>    Explain a diagnostic code (e.g. E1004)
  help              Show this message
  version           Show the version

Options:
  --skip-definitions           Skip definitions, keep fixity and type declarations
  --no-offside                 Do not require continuation lines to be indented
  --threaded                   Lex on a separate thread
  --color=auto|always|never    Colored diagnostics
  --format=terminal|json       Diagnostic output format

Set BIRCH_LOG (or RUST_LOG) to enable tracing, e.g. BIRCH_LOG=birch_parse=debug.";

/// Run the CLI on `args` (program name excluded) and return the exit code.
///
/// `is_tty` says whether `err` is a terminal; it only matters for
/// `--color=auto`.
pub fn run(args: &[String], out: &mut impl Write, err: &mut impl Write, is_tty: bool) -> i32 {
    let Some((command, rest)) = args.split_first() else {
        let _ = writeln!(err, "{USAGE}");
        return 1;
    };

    let result = match command.as_str() {
        "lex" | "parse" | "check" => Options::parse_args(rest).and_then(|(options, positional)| {
            let options = Options { is_tty, ..options };
            match command.as_str() {
                "lex" => lex_file(&positional, &options, out, err),
                "parse" => parse_file(&positional, &options, out, err),
                _ => check_file(&positional, &options, out, err),
            }
        }),
        "explain" => match rest {
            [code] => explain_error(code, out),
            [] => Err(CliError::MissingArgument("error code")),
            [_, extra, ..] => Err(CliError::UnexpectedArgument(extra.clone())),
        },
        "help" | "--help" | "-h" => writeln!(out, "{USAGE}")
            .map(|()| Status::Clean)
            .map_err(CliError::from),
        "version" | "--version" | "-V" => writeln!(out, "birch {}", env!("CARGO_PKG_VERSION"))
            .map(|()| Status::Clean)
            .map_err(CliError::from),
        unknown => {
            let _ = writeln!(err, "Unknown command: {unknown}");
            let _ = writeln!(err);
            let _ = writeln!(err, "{USAGE}");
            return 1;
        }
    };

    match result {
        Ok(status) => status.exit_code(),
        Err(error) => {
            tracing::debug!(%error, "command failed");
            let _ = writeln!(err, "error: {error}");
            if error.is_usage() {
                let _ = writeln!(err);
                let _ = writeln!(err, "{USAGE}");
            }
            1
        }
    }
}
