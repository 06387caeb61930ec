//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Whitespace putting a caret under `column` of `line`: tabs in the line
/// are kept so the caret lines up however the terminal expands them.
fn caret_indent(line: &str, column: u32) -> String {
    line.chars()
        .take(column.saturating_sub(1) as usize)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// With a file name, primary labels render as `--> file:line:col`; with the
/// source text as well, the offending line is quoted under the label.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    file_name: Option<String>,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            file_name: None,
            source: None,
        }
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Give the writer back, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_location(&mut self, label: &Label) {
        match (&self.file_name, label.pos) {
            (Some(file), Some(pos)) => {
                let _ = write!(self.writer, "{file}:{}:{}", pos.line, pos.column);
            }
            (None, Some(pos)) => {
                let _ = write!(self.writer, "{}:{}", pos.line, pos.column);
            }
            (Some(file), None) => {
                let _ = write!(self.writer, "{file} {:?}", label.span);
            }
            (None, None) => {
                let _ = write!(self.writer, "{:?}", label.span);
            }
        }
    }

    /// Quote the source line of `label` with a caret underline.
    fn write_snippet(&mut self, label: &Label) {
        let Some(pos) = label.pos else {
            return;
        };
        let Some(line) = self
            .source
            .as_deref()
            .and_then(|src| src.lines().nth(pos.line.saturating_sub(1) as usize))
            .map(str::to_owned)
        else {
            return;
        };

        let number = pos.line.to_string();
        let gutter = " ".repeat(number.len());
        let indent = caret_indent(&line, pos.column);
        let width = label
            .span
            .to_range()
            .len()
            .min(line.chars().count().saturating_sub(indent.chars().count()))
            .max(1);

        let _ = writeln!(self.writer, "  {gutter} |");
        let _ = writeln!(self.writer, "  {number} | {line}");
        let _ = write!(self.writer, "  {gutter} | {indent}");
        let carets = "^".repeat(width);
        if label.is_primary {
            self.write_colored(&carets, colors::ERROR);
        } else {
            self.write_colored(&carets, colors::SECONDARY);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} ");
            self.write_location(label);
            if !label.message.is_empty() {
                let _ = write!(self.writer, ": ");
                if label.is_primary {
                    self.write_colored(&label.message, colors::ERROR);
                } else {
                    self.write_colored(&label.message, colors::SECONDARY);
                }
            }
            let _ = writeln!(self.writer);
            self.write_snippet(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::NOTE);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
