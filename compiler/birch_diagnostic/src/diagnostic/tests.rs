use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Span::new(0, 5), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes, vec!["some context".to_string()]);
    assert_eq!(diag.suggestions, vec!["try this".to_string()]);
}

#[test]
fn test_primary_label_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E1007)
        .with_secondary_label(Span::new(0, 3), "annotation here")
        .with_label_at(Position::new(2, 3, 12), Span::new(12, 15), "definition here");

    assert_eq!(diag.primary_span(), Some(Span::new(12, 15)));
    assert_eq!(diag.primary_pos(), Some(Position::new(2, 3, 12)));
}

#[test]
fn test_primary_pos_absent_without_position() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_label(Span::new(1, 2), "x");
    assert_eq!(diag.primary_pos(), None);
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E1010);
    assert!(!diag.is_error());
    assert_eq!(diag.severity, Severity::Warning);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1005).with_message("I was expecting a type");
    assert_eq!(diag.to_string(), "error [E1005]: I was expecting a type");
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Note.to_string(), "note");
}
