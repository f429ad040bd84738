//! Runtime values.
//!
//! [`Value`] is the only datum the interpreter manipulates: literal token
//! payloads, compiled expressions and evaluation results are all Values.
//! Composite payloads live behind [`Heap`] handles, so a captured literal is
//! shared by every closure that refers to it rather than duplicated.
//!
//! ```text
//! let n = Value::int(5);
//! let s = Value::string("hello");
//! let xs = Value::list(vec![Value::int(1), Value::int(2)]);
//! ```

mod function;
mod heap;
mod operators;

use std::fmt;

pub use function::{Closure, Function, NativeFn};
pub use heap::Heap;
pub use operators::ArithOp;

use crate::{Environment, EvalResult};

/// Tagged runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(Heap<String>),
    Bool(bool),
    Null,
    Function(Function),
    List(Heap<Vec<Value>>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value; element order is preserved.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

// Value Methods

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Truthiness of an already-resolved value.
    ///
    /// Only `false` and integer zero are falsy; every other kind, including
    /// `0.0`, the empty string and `null`, counts as true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            _ => true,
        }
    }

    /// Force this value to a final result in `env`.
    ///
    /// Functions are invoked with no arguments; anything else is returned
    /// unchanged.
    pub fn resolve(&self, env: &Environment) -> EvalResult {
        match self {
            Value::Function(f) => f.call(&[], env),
            value => Ok(value.clone()),
        }
    }

    /// Kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Function(_) => "function",
            Value::List(_) => "list",
        }
    }

    /// Text for user output: like `Display`, but strings are unquoted.
    pub fn display_text(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            Value::List(items) => {
                let inner: Vec<_> = items.iter().map(Value::display_text).collect();
                format!("({})", inner.join(" "))
            }
            value => value.to_string(),
        }
    }
}

/// Source-level rendering: integers and quoted strings lex back to the same
/// token, floats always carry a `.`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => {
                let text = x.to_string();
                if text.contains(['.', 'e', 'i', 'N']) {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
            Value::Str(s) => {
                // Pick the quote the text does not contain so it lexes back intact.
                let quote = if s.contains('"') && !s.contains('\'') {
                    '\''
                } else {
                    '"'
                };
                write!(f, "{quote}{}{quote}", s.as_str())
            }
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Function(func) => write!(f, "{func}"),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(&s.as_str()).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Null => f.write_str("Null"),
            Value::Function(func) => fmt::Debug::fmt(func, f),
            Value::List(items) => f.debug_list().entries(items.iter()).finish(),
        }
    }
}

/// Structural equality; floats compare bit for bit, functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
