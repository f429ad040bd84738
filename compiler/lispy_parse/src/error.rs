//! Compile-time errors.
//!
//! Any of these aborts compilation of the whole unit; the parser does not
//! try to resynchronize.

use std::fmt;

use lispy_ir::TokenKind;
use thiserror::Error;

/// How many elements a form accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token was required and another one was found.
    #[error("line {line}: unexpected token: expected {expected} but got {found} {context}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        line: u32,
        context: &'static str,
    },

    /// The tokens ran out in the middle of an expression.
    #[error("unexpected end of input: expected {expected} {context}")]
    UnexpectedEnd {
        expected: TokenKind,
        context: &'static str,
    },

    /// A token that has no meaning as an element, e.g. `;` or a keyword.
    #[error("line {line}: `{found}` cannot be used as an element")]
    UnexpectedElement { found: TokenKind, line: u32 },

    /// The first token after `(` cannot start a form.
    #[error("line {line}: `{found}` cannot start an expression")]
    InvalidFormHead { found: TokenKind, line: u32 },

    /// A special form or operator with the wrong number of elements.
    #[error("line {line}: {form} expects {expected} arguments, but got {found}")]
    Arity {
        form: &'static str,
        expected: Arity,
        found: usize,
        line: u32,
    },

    /// A registered keyword that names no special form.
    #[error("line {line}: `{keyword}` is not a known form")]
    UnknownForm { keyword: String, line: u32 },

    /// Something other than an identifier in a lambda parameter list.
    #[error("line {line}: lambda parameters must be identifiers, got `{found}`")]
    InvalidParameter { found: TokenKind, line: u32 },
}
