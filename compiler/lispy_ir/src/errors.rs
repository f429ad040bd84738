//! Runtime error conditions.
//!
//! Raised while a compiled thunk runs. They abort the enclosing call and
//! propagate with `?` to whoever invoked the program; nothing recovers
//! mid-expression.

use thiserror::Error;

use crate::value::Value;

/// Result of invoking a compiled thunk or built-in.
pub type EvalResult = Result<Value, EvalError>;

/// Why evaluation stopped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// Lookup walked the whole scope chain without finding the name.
    #[error("name not bound: {name}")]
    NotBound { name: String },

    /// `define` of a name that already exists in the same scope.
    #[error("{name} was already defined")]
    AlreadyDefined { name: String },

    /// `set` of a name that is bound nowhere in the scope chain.
    #[error("set being used on a name that hasn't been defined: {name}")]
    NotDefined { name: String },

    /// The binding position of `define`/`set` did not hold a name.
    #[error("{form} expects an identifier as its first argument but got {found}")]
    InvalidTarget {
        form: &'static str,
        found: &'static str,
    },

    /// Arithmetic on operands of the wrong kind.
    #[error("cannot apply `{op}` to {left} and {right}")]
    TypeMismatch {
        op: char,
        left: &'static str,
        right: &'static str,
    },

    /// Integer arithmetic left the `i64` range.
    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: char },

    /// An arithmetic symbol the language lexes but does not evaluate.
    #[error("arithmetic operator `{op}` is not supported")]
    UnsupportedOperator { op: char },

    /// Lambda calls nested deeper than the environment allows.
    #[error("maximum call depth of {depth} exceeded")]
    StackOverflow { depth: usize },

    /// A host built-in rejected its arguments.
    #[error("{name}: {message}")]
    Native { name: &'static str, message: String },
}
