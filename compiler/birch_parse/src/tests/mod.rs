//! Whole-file parser tests.
//!
//! - `header`: module headers, imports, and exposing lists
//! - `declarations`: type, fixity, and value declarations
//! - `diagnostics`: recoverable errors, fatal aborts, the context window,
//!   and indentation
//! - `entry`: parse modes and the source-level entry points

mod diagnostics;

use birch_diagnostic::ErrorCode;
use birch_ir::File;

use crate::{parse_source, ParseOptions, ParseOutput};

fn parse(source: &str) -> ParseOutput {
    parse_source("Test.birch", source, ParseOptions::default()).parse
}

/// Parse a file that must come out clean.
fn parse_ok(source: &str) -> File {
    let output = parse(source);
    assert!(output.errors.is_empty(), "{:#?}", output.errors);
    output.file.unwrap()
}

fn codes(output: &ParseOutput) -> Vec<ErrorCode> {
    output.errors.iter().map(crate::ParseError::code).collect()
}
