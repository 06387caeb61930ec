//! The `check` command: report every diagnostic for a file.

use std::io::Write;

use birch_diagnostic::emitter::OutputFormat;

use super::{read_file, report, run_frontend, single_path, Options, Status};
use crate::CliError;

/// Lex and parse a file, reporting lexer diagnostics first.
pub fn check_file(
    positional: &[String],
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let path = single_path(positional)?;
    let source = read_file(path)?;
    let output = run_frontend(path, &source, options);
    let diagnostics = output.diagnostics();

    report(&diagnostics, path, &source, options, out, err);
    let status = Status::from_diagnostics(&diagnostics);
    if status == Status::Clean && options.format == OutputFormat::Terminal {
        writeln!(out, "{path}: ok")?;
    }
    Ok(status)
}
