//! The `lex` command: print the token stream of a file.

use std::io::Write;

use birch_diagnostic::emitter::OutputFormat;
use birch_diagnostic::Diagnostic;
use tracing::debug;

use super::{read_file, report, single_path, Options, Status};
use crate::CliError;

/// Lex a file and list every token, comments and `Eof` included.
pub fn lex_file(
    positional: &[String],
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let path = single_path(positional)?;
    let source = read_file(path)?;
    let output = birch_lexer::lex(&source);
    debug!(path, tokens = output.tokens.len(), "lexed");

    if options.format == OutputFormat::Terminal {
        writeln!(out, "Tokens for '{path}' ({} tokens):", output.tokens.len())?;
        for token in output.tokens.iter() {
            writeln!(
                out,
                "  {:?} @ {}:{} {:?}",
                token.kind, token.pos.line, token.pos.column, token.text
            )?;
        }
    }

    let diagnostics: Vec<Diagnostic> = output
        .errors
        .iter()
        .map(birch_lexer::LexError::to_diagnostic)
        .collect();
    report(&diagnostics, path, &source, options, out, err);
    Ok(Status::from_diagnostics(&diagnostics))
}
