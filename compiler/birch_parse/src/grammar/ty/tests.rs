use super::*;
use crate::{ParseError, ParseErrorKind, ParseOptions};
use birch_ir::{Ident, Position, TokenStream};
use pretty_assertions::assert_eq;

/// Parser positioned on `source`, indented one column so the type does not
/// start a line.
fn parser(source: &str) -> Parser<TokenStream> {
    let tokens = birch_lexer::lex(&format!(" {source}")).tokens.into_stream();
    Parser::new("test", tokens, ParseOptions::default())
}

fn parse_ok(source: &str) -> Type {
    let mut parser = parser(source);
    let ty = parser.parse_type().unwrap().unwrap();
    assert!(
        parser.session().errors().is_empty(),
        "{:?}",
        parser.session().errors()
    );
    ty
}

fn parse_fatal(source: &str) -> ParseError {
    let mut parser = parser(source);
    assert!(parser.parse_type().is_err());
    parser.session().errors().last().cloned().unwrap()
}

fn var(name: &str, column: u32) -> Type {
    Type::Var(Ident::new(name, Position::new(1, column, column - 1)))
}

fn named(name: &str, column: u32, args: Vec<Type>) -> Type {
    Type::Named {
        name: Ident::new(name, Position::new(1, column, column - 1)),
        args,
    }
}

#[test]
fn test_named_and_var() {
    assert_eq!(parse_ok("Int"), named("Int", 2, vec![]));
    assert_eq!(parse_ok("a"), var("a", 2));
}

#[test]
fn test_named_with_args() {
    assert_eq!(
        parse_ok("Dict k v"),
        named("Dict", 2, vec![var("k", 7), var("v", 9)])
    );
}

#[test]
fn test_upper_argument_takes_following_atoms() {
    assert_eq!(
        parse_ok("Dict String Int"),
        named(
            "Dict",
            2,
            vec![named("String", 7, vec![named("Int", 14, vec![])])]
        )
    );
}

#[test]
fn test_parenthesized_argument_stops_nesting() {
    let ty = parse_ok("Dict (Maybe a) Int");
    let Type::Named { args, .. } = &ty else {
        panic!("expected a named type, got {ty:?}");
    };
    assert_eq!(args.len(), 2);
    assert_eq!(ty.to_string(), "Dict (Maybe a) Int");
}

#[test]
fn test_function_type() {
    let ty = parse_ok("Maybe a -> List b -> c");
    assert_eq!(
        ty,
        Type::Function {
            args: vec![
                named("Maybe", 2, vec![var("a", 8)]),
                named("List", 13, vec![var("b", 18)]),
            ],
            ret: Box::new(var("c", 23)),
        }
    );
    assert_eq!(ty.to_string(), "Maybe a -> List b -> c");
}

#[test]
fn test_parenthesized_function_argument() {
    let ty = parse_ok("(a -> b) -> List a -> List b");
    assert_eq!(ty.to_string(), "(a -> b) -> List a -> List b");
    match ty {
        Type::Function { args, .. } => {
            assert_eq!(args.len(), 2);
            assert!(matches!(args[0], Type::Function { .. }));
        }
        other => panic!("expected a function type, got {other:?}"),
    }
}

#[test]
fn test_parens_unwrap() {
    assert_eq!(parse_ok("(Int)"), named("Int", 3, vec![]));
    assert_eq!(parse_ok("((a))"), var("a", 4));
}

#[test]
fn test_nested_application_displays_parens() {
    let ty = parse_ok("Dict String (List a)");
    assert_eq!(ty.to_string(), "Dict (String (List a))");
    assert_eq!(parse_ok(&ty.to_string()).to_string(), ty.to_string());
}

#[test]
fn test_tuple() {
    let ty = parse_ok("(Int, String, a)");
    assert_eq!(
        ty,
        Type::Tuple(vec![
            named("Int", 3, vec![]),
            named("String", 8, vec![]),
            var("a", 16),
        ])
    );
}

#[test]
fn test_record() {
    let ty = parse_ok("{ x : Int, y : Maybe Float }");
    assert_eq!(ty.to_string(), "{ x : Int, y : Maybe Float }");
    match ty {
        Type::Record(fields) => {
            let names: Vec<_> = fields.iter().map(|f| f.name.name.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
        }
        other => panic!("expected a record, got {other:?}"),
    }
}

#[test]
fn test_empty_record() {
    assert_eq!(parse_ok("{}"), Type::Record(Vec::new()));
}

#[test]
fn test_record_field_case() {
    let mut parser = parser("{ X : Int }");
    assert!(parser.parse_type().unwrap().is_some());
    let errors = parser.session().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::E1004);
}

#[test]
fn test_type_stops_at_line_start() {
    let mut parser = parser("Maybe a\nfoo = 1");
    assert_eq!(
        parser.parse_type().unwrap(),
        Some(named("Maybe", 2, vec![var("a", 8)]))
    );
    assert_eq!(parser.current().text, "foo");
}

#[test]
fn test_continuation_lines() {
    let ty = parse_ok("Int\n    -> String\n    -> Bool");
    assert_eq!(ty.to_string(), "Int -> String -> Bool");
}

#[test]
fn test_no_type_at_line_start() {
    let tokens = birch_lexer::lex("foo").tokens.into_stream();
    let mut parser = Parser::new("test", tokens, ParseOptions::default());
    assert_eq!(parser.parse_type().unwrap(), None);
    assert!(parser.session().errors().is_empty());
}

#[test]
fn test_missing_type_after_arrow_is_fatal() {
    let err = parse_fatal("Int ->\nfoo = 1");
    assert_eq!(err.code(), ErrorCode::E1005);
    assert_eq!(err.message(), EXPECTED_TYPE);
    assert_eq!(err.pos.line, 2);
}

#[test]
fn test_bad_atom_is_fatal() {
    let err = parse_fatal("-> Int");
    assert_eq!(err.kind, ParseErrorKind::ExpectedOneOf(TYPE_START));
}

#[test]
fn test_eof_inside_parens_is_fatal() {
    let err = parse_fatal("(Int");
    assert!(err.is_eof());
    assert_eq!(err.code(), ErrorCode::E1003);
}

#[test]
fn test_eof_inside_tuple_is_fatal() {
    let err = parse_fatal("(Int, ");
    assert!(err.is_eof());
}

#[test]
fn test_deeply_nested_parens() {
    let depth = 5_000;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_ok(&source), var("a", 2 + u32::try_from(depth).unwrap()));
}

#[test]
fn test_arguments_continue_on_later_lines() {
    let ty = parse_ok("Dict\n    (Maybe k)\n    (List a)");
    assert_eq!(ty.to_string(), "Dict (Maybe k) (List a)");
}

#[test]
fn test_lower_name_opening_a_line_ends_the_type() {
    let mut parser = parser("Maybe a\n  foo = 1");
    assert_eq!(
        parser.parse_type().unwrap(),
        Some(named("Maybe", 2, vec![var("a", 8)]))
    );
    assert_eq!(parser.current().text, "foo");
}
