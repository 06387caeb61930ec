//! Module header, imports, and exposing lists.

use std::fmt;

use super::Ident;
use crate::Position;

/// Dotted module path such as `Html.Attributes`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleName {
    pub parts: Vec<Ident>,
}

impl ModuleName {
    pub fn new(parts: Vec<Ident>) -> Self {
        ModuleName { parts }
    }

    /// Position of the first segment.
    pub fn pos(&self) -> Position {
        self.parts.first().map_or(Position::START, |part| part.pos)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&part.name)?;
        }
        Ok(())
    }
}

/// What a module or import exposes.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExposingList {
    /// `(..)`
    Open,
    /// Explicit, non-empty list.
    Closed(Vec<ExposedIdent>),
}

impl ExposingList {
    pub fn is_open(&self) -> bool {
        matches!(self, ExposingList::Open)
    }

    /// Explicit entries, empty for `(..)`.
    pub fn idents(&self) -> &[ExposedIdent] {
        match self {
            ExposingList::Open => &[],
            ExposingList::Closed(idents) => idents,
        }
    }
}

impl fmt::Display for ExposingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposingList::Open => f.write_str("(..)"),
            ExposingList::Closed(idents) => {
                f.write_str("(")?;
                for (i, ident) in idents.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ident}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// One entry in an exposing list; `exposing` holds a union's constructors.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExposedIdent {
    pub ident: Ident,
    pub exposing: Option<ExposingList>,
}

impl fmt::Display for ExposedIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ident)?;
        if let Some(exposing) = &self.exposing {
            write!(f, "{exposing}")?;
        }
        Ok(())
    }
}

/// `module Name exposing (...)`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ModuleDecl {
    pub name: ModuleName,
    pub exposing: Option<ExposingList>,
    pub pos: Position,
}

impl fmt::Display for ModuleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module {}", self.name)?;
        if let Some(exposing) = &self.exposing {
            write!(f, " exposing {exposing}")?;
        }
        Ok(())
    }
}

/// `import Name [as Alias] [exposing (...)]`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ImportDecl {
    pub module: ModuleName,
    pub alias: Option<Ident>,
    pub exposing: Option<ExposingList>,
    pub pos: Position,
}

impl fmt::Display for ImportDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {}", self.module)?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        if let Some(exposing) = &self.exposing {
            write!(f, " exposing {exposing}")?;
        }
        Ok(())
    }
}
