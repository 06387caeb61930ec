//! The `explain` command: documentation for a diagnostic code.

use std::io::Write;

use birch_diagnostic::ErrorCode;

use super::Status;
use crate::CliError;

/// Print the description and the longer explanation of `code`.
pub fn explain_error(code: &str, out: &mut impl Write) -> Result<Status, CliError> {
    let Some(code) = ErrorCode::parse(code) else {
        return Err(CliError::UnknownCode(code.to_string()));
    };
    writeln!(out, "{code}: {}", code.description())?;
    writeln!(out)?;
    writeln!(out, "{}", code.explanation())?;
    Ok(Status::Clean)
}
