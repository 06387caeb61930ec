//! Fatal abort as a plain return value.
//!
//! Productions return `PResult<T>`. The three outcomes a production can
//! have map onto it as follows:
//!
//! | Outcome | Value |
//! |---------|-------|
//! | parsed a node | `Ok(node)` or `Ok(Some(node))` |
//! | nothing here / node rejected after a diagnostic | `Ok(None)` |
//! | cannot continue | `Err(Fatal)` |
//!
//! `Fatal` carries no message: the diagnostic explaining it is recorded in
//! the session before the value is created, so unwinding with `?` never
//! loses information.

use birch_ir::Position;

/// The file cannot be parsed any further.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fatal {
    /// Where the parser gave up.
    pub pos: Position,
}

pub type PResult<T> = Result<T, Fatal>;
