//! Lexical scopes.
//!
//! An [`Environment`] is a cheap handle to one scope: its bindings plus a
//! link to the enclosing scope. Every invocation receives the environment
//! to resolve names in as an argument, and a lambda call creates its scope
//! with [`Environment::child`] as a local value, so there is no "current
//! scope" to swap and restore.
//!
//! Children hold their parent through the shared handle. A value that
//! escapes a call therefore keeps alive whatever scope it still reaches.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{EvalError, EvalResult, Value};

/// Deepest chain of nested lambda scopes before a call fails with
/// [`EvalError::StackOverflow`].
pub const MAX_CALL_DEPTH: usize = 10_000;

/// A single scope.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
    /// Number of ancestors; the base environment is at depth 0.
    depth: usize,
}

// Unlink the chain iteratively so dropping a deep chain cannot overflow.
impl Drop for Scope {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(env) = parent {
            parent = match Rc::try_unwrap(env.0) {
                Ok(cell) => cell.into_inner().parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Shared handle to a scope and, through it, to the scope chain.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Create an empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope whose parent is `self`.
    ///
    /// Fails once the chain would exceed [`MAX_CALL_DEPTH`].
    pub fn child(&self) -> Result<Environment, EvalError> {
        let depth = self.depth() + 1;
        if depth > MAX_CALL_DEPTH {
            return Err(EvalError::StackOverflow {
                depth: MAX_CALL_DEPTH,
            });
        }
        Ok(Environment(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
            depth,
        }))))
    }

    pub fn depth(&self) -> usize {
        self.0.borrow().depth
    }

    /// Find `name` in this scope or the nearest ancestor that binds it.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut scope = self.clone();
        loop {
            let parent = {
                let inner = scope.0.borrow();
                if let Some(value) = inner.bindings.get(name) {
                    return Some(value.clone());
                }
                inner.parent.clone()
            };
            scope = parent?;
        }
    }

    /// Like [`get`](Self::get), failing with [`EvalError::NotBound`].
    pub fn lookup(&self, name: &str) -> EvalResult {
        self.get(name).ok_or_else(|| EvalError::NotBound {
            name: name.to_string(),
        })
    }

    /// Whether `name` is bound in this scope itself, ignoring ancestors.
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Add a new binding to this scope and return the stored value.
    ///
    /// A name already bound *in this scope* is rejected; bindings in
    /// ancestors may be shadowed.
    pub fn define(&self, name: &str, value: Value) -> EvalResult {
        let mut inner = self.0.borrow_mut();
        if inner.bindings.contains_key(name) {
            return Err(EvalError::AlreadyDefined {
                name: name.to_string(),
            });
        }
        inner.bindings.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn set(&self, name: &str, value: Value) -> EvalResult {
        let mut scope = self.clone();
        loop {
            let parent = {
                let mut inner = scope.0.borrow_mut();
                if let Some(slot) = inner.bindings.get_mut(name) {
                    *slot = value.clone();
                    return Ok(value);
                }
                inner.parent.clone()
            };
            match parent {
                Some(parent) => scope = parent,
                None => {
                    return Err(EvalError::NotDefined {
                        name: name.to_string(),
                    })
                }
            }
        }
    }

    /// Bind `name` in this scope, replacing any binding it already has here.
    ///
    /// Used for lambda parameters, where a repeated parameter name simply
    /// takes the later argument.
    pub fn bind(&self, name: &str, value: Value) {
        self.0.borrow_mut().bindings.insert(name.to_string(), value);
    }

    /// Names bound in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("bindings", &self.local_names())
            .finish()
    }
}
