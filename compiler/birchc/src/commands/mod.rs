//! Command handlers for the `birch` CLI.
//!
//! Each handler writes its normal output to `out` and diagnostics to `err`
//! (or to `out` as a JSON array with `--format=json`), and returns a
//! [`Status`] the binary turns into an exit code. Shared pieces live here:
//! flag parsing, file reading, and diagnostic reporting.

mod check;
mod explain;
mod lex;
mod parse;

pub use check::check_file;
pub use explain::explain_error;
pub use lex::lex_file;
pub use parse::parse_file;

use std::io::Write;

use birch_diagnostic::emitter::{
    ColorMode, DiagnosticEmitter, JsonEmitter, OutputFormat, TerminalEmitter,
};
use birch_diagnostic::Diagnostic;
use birch_parse::{parse_source, parse_threaded, ParseOptions, SourceOutput};

use crate::CliError;

/// Outcome of a command that ran to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Clean,
    /// At least one diagnostic was reported.
    Failed,
}

impl Status {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        if diagnostics.is_empty() {
            Status::Clean
        } else {
            Status::Failed
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Status::Clean => 0,
            Status::Failed => 1,
        }
    }
}

/// Flags shared by the file commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub parse: ParseOptions,
    pub color: ColorMode,
    pub format: OutputFormat,
    /// Lex on a producer thread while the parser consumes.
    pub threaded: bool,
    /// Whether the diagnostics stream is a terminal (`--color=auto`).
    pub is_tty: bool,
}

impl Options {
    /// Split `args` into flags and positional arguments.
    pub fn parse_args(args: &[String]) -> Result<(Options, Vec<String>), CliError> {
        let mut options = Options::default();
        let mut positional = Vec::new();

        for arg in args {
            if arg == "--skip-definitions" {
                options.parse = options.parse.skip_definitions();
            } else if arg == "--no-offside" {
                options.parse = options.parse.without_offside();
            } else if arg == "--threaded" {
                options.threaded = true;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::parse(value).ok_or_else(|| CliError::InvalidValue {
                    flag: "color",
                    value: value.to_string(),
                })?;
            } else if let Some(value) = arg.strip_prefix("--format=") {
                options.format =
                    OutputFormat::parse(value).ok_or_else(|| CliError::InvalidValue {
                        flag: "format",
                        value: value.to_string(),
                    })?;
            } else if arg.starts_with('-') && arg.len() > 1 {
                return Err(CliError::UnknownFlag(arg.clone()));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((options, positional))
    }
}

/// The single file path a file command takes.
pub(crate) fn single_path(positional: &[String]) -> Result<&str, CliError> {
    match positional {
        [] => Err(CliError::MissingArgument("file path")),
        [path] => Ok(path.as_str()),
        [_, extra, ..] => Err(CliError::UnexpectedArgument(extra.clone())),
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|error| CliError::from_read(path, error))
}

/// Lex and parse `source` the way `options` asks for.
pub(crate) fn run_frontend(path: &str, source: &str, options: &Options) -> SourceOutput {
    if options.threaded {
        parse_threaded(path, source.to_string(), options.parse)
    } else {
        parse_source(path, source, options.parse)
    }
}

/// Render `diagnostics` in the selected format.
///
/// Terminal output goes to `err` with a closing summary line. JSON goes to
/// `out`, and always forms a complete array, empty when the file is clean.
pub(crate) fn report(
    diagnostics: &[Diagnostic],
    path: &str,
    source: &str,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) {
    match options.format {
        OutputFormat::Terminal => {
            if diagnostics.is_empty() {
                return;
            }
            let mut emitter = TerminalEmitter::with_color_mode(err, options.color, options.is_tty)
                .with_file_name(path)
                .with_source(source);
            emitter.emit_all(diagnostics);
            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            emitter.emit_summary(errors, diagnostics.len() - errors);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(out);
            emitter.begin();
            emitter.emit_all(diagnostics);
            emitter.end();
            emitter.flush();
        }
    }
}
