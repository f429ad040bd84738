//! A compiled source unit.

use std::fmt;

use lispy_ir::{Environment, EvalResult, Function, Value};
use tracing::debug;

/// Top-level thunks in source order, bound to the environment they run in.
pub struct Program {
    expressions: Vec<Function>,
    env: Environment,
}

impl Program {
    pub(crate) fn new(expressions: Vec<Function>, env: Environment) -> Self {
        Program { expressions, env }
    }

    pub fn expressions(&self) -> &[Function] {
        &self.expressions
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Invoke each top-level thunk in order with no arguments.
    ///
    /// Returns the last result, or `null` for an empty program. Stops at
    /// the first error; bindings made before it remain in the environment.
    pub fn run(&self) -> EvalResult {
        let mut last = Value::Null;
        for (index, expression) in self.expressions.iter().enumerate() {
            debug!(index, "evaluating top-level expression");
            last = expression.call(&[], &self.env)?;
        }
        Ok(last)
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("expressions", &self.expressions.len())
            .field("env", &self.env)
            .finish()
    }
}
