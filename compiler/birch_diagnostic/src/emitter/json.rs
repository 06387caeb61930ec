//! JSON Emitter
//!
//! Machine-readable diagnostic output: one JSON array per run.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter};

pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Open the JSON array.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// Close the JSON array.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        // Built by hand; the shape is small and fixed.
        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        let _ = writeln!(
            self.writer,
            "    \"severity\": \"{}\",",
            diagnostic.severity
        );
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );

        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(self.writer, "        \"start\": {},", label.span.start);
            let _ = writeln!(self.writer, "        \"end\": {},", label.span.end);
            if let Some(pos) = label.pos {
                let _ = writeln!(self.writer, "        \"line\": {},", pos.line);
                let _ = writeln!(self.writer, "        \"column\": {},", pos.column);
            }
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "        \"primary\": {}", label.is_primary);
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = writeln!(self.writer, "      \"{}\"{}", escape_json(note), comma);
        }
        let _ = writeln!(self.writer, "    ],");

        let _ = writeln!(self.writer, "    \"suggestions\": [");
        for (i, suggestion) in diagnostic.suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.suggestions.len());
            let _ = writeln!(
                self.writer,
                "      \"{}\"{}",
                escape_json(suggestion),
                comma
            );
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use birch_ir::{Position, Span};

    fn emit_to_string(diagnostics: &[Diagnostic]) -> String {
        let mut emitter = JsonEmitter::new(Vec::new());
        emitter.begin();
        emitter.emit_all(diagnostics);
        emitter.end();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn test_json_single_diagnostic() {
        let diag = Diagnostic::error(ErrorCode::E1006)
            .with_message("Operator priority must be a number between 0 and 9, both included.")
            .with_label_at(Position::new(3, 8, 30), Span::new(30, 32), "");
        let json = emit_to_string(&[diag]);

        assert!(json.starts_with("[\n  {\n"));
        assert!(json.contains("\"code\": \"E1006\","));
        assert!(json.contains("\"severity\": \"error\","));
        assert!(json.contains("\"line\": 3,"));
        assert!(json.contains("\"column\": 8,"));
        assert!(json.contains("\"primary\": true"));
        assert!(json.ends_with("  }\n]\n"));
    }

    #[test]
    fn test_json_separates_diagnostics() {
        let a = Diagnostic::error(ErrorCode::E1001).with_message("a");
        let b = Diagnostic::error(ErrorCode::E1002).with_message("b \"quoted\"");
        let json = emit_to_string(&[a, b]);

        assert_eq!(json.matches("\"code\"").count(), 2);
        assert!(json.contains("  },\n  {"));
        assert!(json.contains("b \\\"quoted\\\""));
    }

    #[test]
    fn test_json_empty_run() {
        let json = emit_to_string(&[]);
        assert_eq!(json, "[\n\n]\n");
    }
}
