//! Error codes for front-end diagnostics.
//!
//! The first digit is the phase: `E0xxx` lexer, `E1xxx` parser. Codes are
//! stable; `birch explain <code>` prints [`ErrorCode::explanation`].

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Character that starts no token
    E0002,
    /// Unterminated or malformed character literal
    E0003,
    /// Unterminated block comment
    E0004,

    // Parser Errors (E1xxx)
    /// A specific token was expected
    E1001,
    /// One of several tokens was expected
    E1002,
    /// Input ended where a token was required
    E1003,
    /// Name has the wrong letter case
    E1004,
    /// A type was expected
    E1005,
    /// Operator priority outside `0..=9`
    E1006,
    /// Definition indented relative to its annotation
    E1007,
    /// Definition does not follow its annotation
    E1008,
    /// Expression form not supported
    E1009,
    /// Token not indented past its declaration
    E1010,
}

impl ErrorCode {
    /// Every code, lexer codes first.
    pub const ALL: [ErrorCode; 14] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
        }
    }

    /// One-line summary.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "unterminated or malformed character literal",
            ErrorCode::E0004 => "unterminated block comment",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected one of several tokens",
            ErrorCode::E1003 => "unexpected end of input",
            ErrorCode::E1004 => "name has the wrong letter case",
            ErrorCode::E1005 => "expected a type",
            ErrorCode::E1006 => "operator priority out of range",
            ErrorCode::E1007 => "definition is indented relative to its annotation",
            ErrorCode::E1008 => "definition does not follow its annotation",
            ErrorCode::E1009 => "unsupported expression",
            ErrorCode::E1010 => "token is not indented past its declaration",
        }
    }

    /// Longer explanation with an example, for `birch explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal was opened with `\"` but the line ended before the \
                 closing quote.\n\n    greeting = \"hello\n\nClose the string on the same line."
            }
            ErrorCode::E0002 => {
                "The lexer found a character that cannot start any token, such as a \
                 stray `;` or a control character."
            }
            ErrorCode::E0003 => {
                "A character literal must hold exactly one character or escape \
                 between single quotes.\n\n    letter = 'ab'"
            }
            ErrorCode::E0004 => {
                "A `{-` block comment was never closed with `-}` before the end of \
                 the file."
            }
            ErrorCode::E1001 => {
                "The parser needed one particular token at this point and found \
                 something else.\n\n    module Foo exposing (..\n\nHere `)` is missing."
            }
            ErrorCode::E1002 => {
                "The parser accepts several tokens at this point and found none of \
                 them. Top-level declarations must start with `import`, `type`, a \
                 fixity keyword, or a name. Exposing lists must not be empty:\n\n    \
                 module Foo exposing ()"
            }
            ErrorCode::E1003 => {
                "The file ended in the middle of a declaration. Parsing stops here \
                 and no syntax tree is produced."
            }
            ErrorCode::E1004 => {
                "Modules, types and constructors are upper case; type variables, \
                 record fields, definitions and their arguments are lower case.\n\n    \
                 type alias point = { x : Int }"
            }
            ErrorCode::E1005 => {
                "A type was required, for example after `:` in an annotation or after \
                 `=` in a type alias, but the next token starts a new declaration.\n\n    \
                 foo :\n    foo = 1"
            }
            ErrorCode::E1006 => {
                "Fixity declarations take a priority between 0 and 9, both \
                 included.\n\n    infixl 10 +"
            }
            ErrorCode::E1007 => {
                "A definition must start in the same column as its type \
                 annotation.\n\n    foo : Int\n      foo = 1"
            }
            ErrorCode::E1008 => {
                "A type annotation must be followed directly by the definition it \
                 describes.\n\n    foo : Int\n    bar = 1"
            }
            ErrorCode::E1009 => {
                "Only literals (numbers, strings, characters and booleans) are \
                 accepted as definition bodies."
            }
            ErrorCode::E1010 => {
                "Everything after the first token of a top-level declaration must be \
                 indented by at least one space.\n\n    foo =\n    1"
            }
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Look up a code by name, case-insensitively.
    pub fn parse(s: &str) -> Option<ErrorCode> {
        s.parse().ok()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
