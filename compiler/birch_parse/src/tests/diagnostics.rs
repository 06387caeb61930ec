use super::{codes, parse};
use crate::recovery::{DECL_START, LITERAL};
use crate::{parse_source, ParseErrorKind, ParseOptions, CONTEXT_WINDOW};
use birch_diagnostic::ErrorCode;
use birch_ir::{Expr, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn test_unknown_declaration_start_is_fatal() {
    let output = parse("module Foo\n\n= 1\n\nfoo = 2");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ParseErrorKind::ExpectedOneOf(DECL_START));
    assert_eq!(output.errors[0].found, TokenKind::Assign);
    assert!(output.file.is_none());
}

#[test]
fn test_errors_before_abort_are_kept() {
    let output = parse("module foo\n\ninfixl 10 +");
    assert_eq!(codes(&output), vec![ErrorCode::E1004, ErrorCode::E1006]);
    assert!(!output.is_complete());
}

#[test]
fn test_recoverable_errors_do_not_stop_the_parse() {
    let output = parse("module Foo exposing ()\n\nimport bar\n\nx = 1");
    assert_eq!(codes(&output), vec![ErrorCode::E1002, ErrorCode::E1004]);
    let file = output.file.unwrap();
    assert_eq!(file.imports.len(), 1);
    assert_eq!(file.definitions().count(), 1);
}

#[test]
fn test_eof_where_token_is_required() {
    let output = parse("module Foo\n\nfoo =");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::UnexpectedEof { expected: LITERAL }
    );
    assert!(output.file.is_none());
}

#[test]
fn test_eof_in_import() {
    let output = parse("module Foo\n\nimport");
    assert_eq!(codes(&output), vec![ErrorCode::E1003]);
    assert!(output.file.is_none());
}

#[test]
fn test_empty_input() {
    let output = parse("");
    assert_eq!(codes(&output), vec![ErrorCode::E1003]);
    assert!(output.file.is_none());
}

#[test]
fn test_unsupported_expression_is_fatal() {
    let output = parse("module Foo\n\nfoo = bar");
    assert_eq!(codes(&output), vec![ErrorCode::E1009]);
    assert_eq!(
        output.errors[0].message(),
        "cannot parse expression with token of type identifier"
    );
    assert!(output.file.is_none());
}

#[test]
fn test_missing_annotation_type_is_fatal() {
    let output = parse("module Foo\n\nfoo :\nfoo = 1");
    assert_eq!(codes(&output), vec![ErrorCode::E1005]);
    assert_eq!(output.errors[0].pos.line, 4);
    assert!(output.file.is_none());
}

#[test]
fn test_malformed_type_is_fatal() {
    let output = parse("module Foo\n\nfoo : = Int\nfoo = 1");
    assert_eq!(codes(&output), vec![ErrorCode::E1002]);
    assert!(output.file.is_none());
}

#[test]
fn test_lex_error_token_is_reported_by_parser() {
    let source = parse_source("Test.birch", "module Foo\n\nx = 1 ;", ParseOptions::default());
    assert_eq!(source.lex_errors.len(), 1);
    let codes: Vec<_> = source.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0002, ErrorCode::E1002]);
}

#[test]
fn test_offside_token_is_recorded_and_parsing_continues() {
    let output = parse("module Foo\n\nfoo =\n1\n");
    assert_eq!(codes(&output), vec![ErrorCode::E1010]);
    assert_eq!(output.errors[0].message(), "I was expecting a whitespace");
    assert_eq!(output.errors[0].pos.line, 4);
    let file = output.file.unwrap();
    let def = file.definitions().next().unwrap();
    let Expr::Literal(lit) = &def.body;
    assert_eq!(lit.text, "1");
}

#[test]
fn test_offside_in_module_header() {
    let output = parse("module Foo exposing\n(..)");
    assert_eq!(codes(&output), vec![ErrorCode::E1010]);
    assert!(output.file.unwrap().module.exposing.is_some());
}

#[test]
fn test_offside_can_be_disabled() {
    let output = parse_source(
        "Test.birch",
        "module Foo\n\nfoo =\n1\n",
        ParseOptions::default().without_offside(),
    )
    .parse;
    assert!(output.errors.is_empty());
    assert!(output.file.is_some());
}

#[test]
fn test_indented_continuation_is_fine() {
    let output = parse("module Foo\n\nfoo :\n    Int\n        -> Int\nfoo =\n    1");
    assert!(output.errors.is_empty(), "{:#?}", output.errors);
}

#[test]
fn test_context_is_scoped_to_the_declaration() {
    let output = parse("module Foo\n\nalpha = 1\n\nbeta gamma = )");
    assert_eq!(codes(&output), vec![ErrorCode::E1009]);
    assert_eq!(output.errors[0].context_text(), "beta gamma = )");
}

#[test]
fn test_context_window_is_bounded() {
    let output = parse("module Foo\n\nf : a -> b -> c -> d -> e\nf = )");
    let error = &output.errors[0];
    assert_eq!(error.context.len(), CONTEXT_WINDOW);
    assert_eq!(error.context_text(), "c -> d -> e f = )");
}

#[test]
fn test_diagnostic_conversion() {
    let output = parse("module Foo\n\nimport Bar as baz");
    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(diag.primary_pos().map(|p| (p.line, p.column)), Some((3, 15)));
    assert_eq!(diag.notes, vec!["while reading: import Bar as baz end of file".to_string()]);
}
