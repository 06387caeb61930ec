//! The `parse` command: show what the parser made of a file.

use std::io::Write;

use birch_diagnostic::emitter::OutputFormat;
use birch_ir::Decl;

use super::{read_file, report, run_frontend, single_path, Options, Status};
use crate::CliError;

/// Parse a file, print a summary and the tree rendered back as source.
pub fn parse_file(
    positional: &[String],
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let path = single_path(positional)?;
    let source = read_file(path)?;
    let output = run_frontend(path, &source, options);
    let diagnostics = output.diagnostics();

    if options.format == OutputFormat::Terminal {
        writeln!(out, "Parse result for '{path}':")?;
        match &output.parse.file {
            Some(file) => {
                let (mut types, mut fixities, mut definitions) = (0, 0, 0);
                for decl in &file.decls {
                    match decl {
                        Decl::Type(_) => types += 1,
                        Decl::Infix(_) => fixities += 1,
                        Decl::Definition(_) => definitions += 1,
                    }
                }
                writeln!(out, "  Module: {}", file.module.name)?;
                writeln!(out, "  Imports: {}", file.imports.len())?;
                writeln!(out, "  Types: {types}")?;
                writeln!(out, "  Fixity declarations: {fixities}")?;
                writeln!(out, "  Definitions: {definitions}")?;
                writeln!(out, "  Errors: {}", diagnostics.len())?;
                writeln!(out)?;
                write!(out, "{file}")?;
            }
            None => {
                writeln!(out, "  Aborted")?;
                writeln!(out, "  Errors: {}", diagnostics.len())?;
            }
        }
    }

    report(&diagnostics, path, &source, options, out, err);
    Ok(Status::from_diagnostics(&diagnostics))
}
