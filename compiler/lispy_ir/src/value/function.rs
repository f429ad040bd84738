//! Callable values.
//!
//! Compiled code is made of these: every parenthesized expression becomes a
//! [`Function::Closure`], every identifier in read position becomes a
//! [`Function::Deferred`] lookup, and the host contributes
//! [`Function::Native`] built-ins. All three are invoked the same way, with
//! an argument list and the environment of the caller.

use std::fmt;

use super::{Heap, Value};
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalError, EvalResult, MAX_CALL_DEPTH};

/// Signature of a host built-in.
pub type NativeFn = fn(&[Value]) -> EvalResult;

type ClosureBody = dyn Fn(&[Value], &Environment) -> EvalResult;

/// A compiled thunk or lambda.
pub struct Closure {
    /// Which form produced this closure (`"define"`, `"lambda"`, ...).
    label: &'static str,
    /// Declared parameter names; `None` for thunks.
    params: Option<Vec<String>>,
    body: Box<ClosureBody>,
}

impl Closure {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn params(&self) -> Option<&[String]> {
        self.params.as_deref()
    }
}

/// A value that can be invoked.
#[derive(Clone)]
pub enum Function {
    /// Compiled expression or lambda.
    Closure(Heap<Closure>),
    /// Read of an identifier, resolved against the caller's environment
    /// each time it is invoked.
    Deferred(Heap<String>),
    /// Built-in supplied by the host environment.
    Native { name: &'static str, body: NativeFn },
}

impl Function {
    /// Wrap a compiled expression.
    pub fn thunk(
        label: &'static str,
        body: impl Fn(&[Value], &Environment) -> EvalResult + 'static,
    ) -> Self {
        Function::Closure(Heap::new(Closure {
            label,
            params: None,
            body: Box::new(body),
        }))
    }

    /// Wrap a lambda body declared with `params`.
    pub fn lambda(
        params: Vec<String>,
        body: impl Fn(&[Value], &Environment) -> EvalResult + 'static,
    ) -> Self {
        Function::Closure(Heap::new(Closure {
            label: "lambda",
            params: Some(params),
            body: Box::new(body),
        }))
    }

    /// Deferred read of `name`.
    pub fn deferred(name: impl Into<String>) -> Self {
        Function::Deferred(Heap::new(name.into()))
    }

    pub fn native(name: &'static str, body: NativeFn) -> Self {
        Function::Native { name, body }
    }

    /// Invoke with `args`, resolving names against `env`.
    ///
    /// A deferred lookup that finds another function invokes it with the
    /// same arguments, so identifiers are dereferenced on read.
    pub fn call(&self, args: &[Value], env: &Environment) -> EvalResult {
        match self {
            Function::Closure(closure) => ensure_sufficient_stack(|| (closure.body)(args, env)),
            Function::Deferred(name) => follow_deferred(name, args, env),
            Function::Native { body, .. } => body(args),
        }
    }

    pub fn is_lambda(&self) -> bool {
        self.params().is_some()
    }

    /// Declared parameters, if this is a lambda.
    pub fn params(&self) -> Option<&[String]> {
        match self {
            Function::Closure(closure) => closure.params(),
            Function::Deferred(_) | Function::Native { .. } => None,
        }
    }

    /// Identity comparison: two functions are equal only if they are the
    /// same compiled object.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        match (self, other) {
            (Function::Closure(a), Function::Closure(b)) => Heap::ptr_eq(a, b),
            (Function::Deferred(a), Function::Deferred(b)) => Heap::ptr_eq(a, b),
            (Function::Native { name: a, .. }, Function::Native { name: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Follow a chain of names until it reaches a non-name value.
///
/// A chain longer than [`MAX_CALL_DEPTH`] hops, such as `(define a a)`, is
/// reported as a stack overflow.
fn follow_deferred(name: &Heap<String>, args: &[Value], env: &Environment) -> EvalResult {
    let mut name = name.clone();
    for _ in 0..MAX_CALL_DEPTH {
        match env.lookup(&name)? {
            Value::Function(Function::Deferred(next)) => name = next,
            Value::Function(found) => return ensure_sufficient_stack(|| found.call(args, env)),
            value => return Ok(value),
        }
    }
    Err(EvalError::StackOverflow {
        depth: MAX_CALL_DEPTH,
    })
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Closure(closure) if closure.params.is_some() => write!(f, "<lambda>"),
            Function::Closure(_) => write!(f, "<function>"),
            Function::Deferred(name) => write!(f, "<deferred {}>", name.as_str()),
            Function::Native { name, .. } => write!(f, "<native {name}>"),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Closure(closure) => f
                .debug_struct("Closure")
                .field("label", &closure.label)
                .field("params", &closure.params)
                .finish_non_exhaustive(),
            Function::Deferred(name) => f.debug_tuple("Deferred").field(&name.as_str()).finish(),
            Function::Native { name, .. } => f.debug_tuple("Native").field(name).finish(),
        }
    }
}
